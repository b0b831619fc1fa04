//! Generic containers for the rows a server hands back.
//!
//! Every cell is a [`Value`]; a result set is a [`Rows`]; a single row keyed
//! by column name is a [`Dao`]. Keeping the numeric variants distinct from
//! text is what lets the table renderer right-align counts.

pub use dao::{
    Dao,
    FromDao,
};
pub use error::{
    ConvertError,
    DaoError,
};
pub use rows::Rows;
pub use value::{
    FromValue,
    ToValue,
    Value,
};

mod dao;
mod error;
mod rows;
mod value;
