use crate::{
    error::DaoError,
    FromValue,
    Value,
};
use std::collections::BTreeMap;

/// A single row, keyed by column name
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dao(pub BTreeMap<String, Value>);

impl Dao {
    pub fn new() -> Self { Dao::default() }

    pub fn insert_value<K>(&mut self, k: K, value: &Value)
    where
        K: ToString,
    {
        self.0.insert(k.to_string(), value.clone());
    }

    pub fn get<'a, T>(&'a self, s: &str) -> Result<T, DaoError>
    where
        T: FromValue,
    {
        let value: Option<&'a Value> = self.0.get(s);
        match value {
            Some(v) => FromValue::from_value(v).map_err(DaoError::ConvertError),
            None => Err(DaoError::NoSuchValueError(s.into())),
        }
    }
}

pub trait FromDao: Sized {
    /// convert dao to an instance of the corresponding struct of the model
    fn from_dao(dao: &Dao) -> Result<Self, DaoError>;
}
