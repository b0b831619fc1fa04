use crate::{
    Dao,
    Value,
};
use std::slice;

/// A result set: the column names once, then the cells of every row
#[derive(Debug, PartialEq, Clone)]
pub struct Rows {
    pub columns: Vec<String>,
    pub data: Vec<Vec<Value>>,
}

impl Rows {
    pub fn new(columns: Vec<String>) -> Self {
        Rows {
            columns,
            data: vec![],
        }
    }

    pub fn push(&mut self, row: Vec<Value>) { self.data.push(row) }

    /// The values of the column at `index`, one per row.
    /// Rows too short to have that column are skipped.
    ///
    /// Statements like `SHOW GRANTS FOR` name their only column after the
    /// account, so positional access is the only stable way to read them.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.data.iter().filter_map(move |row| row.get(index))
    }

    /// Returns an iterator over the rows, each keyed by column name.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            columns: &self.columns,
            iter: self.data.iter(),
        }
    }
}

pub struct Iter<'a> {
    columns: &'a [String],
    iter: slice::Iter<'a, Vec<Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Dao;

    fn next(&mut self) -> Option<Dao> {
        let row = self.iter.next()?;
        let mut dao = Dao::new();
        for (column, value) in self.columns.iter().zip(row) {
            dao.insert_value(column, value);
        }
        Some(dao)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}
