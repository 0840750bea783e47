#![deny(unsafe_code)]

//! In-memory table of audience records.
//!
//! A [`Table`] owns its header once and shares it with every [`Record`], so a
//! record behaves as an ordered column-name to value mapping without copying
//! the header strings per row.
//!
//! Lookups by column name are exact (header case is preserved). When a header
//! repeats a column name, lookups resolve to the first occurrence.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One parsed data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Builds a record over the shared header.
    ///
    /// Missing trailing values become empty strings and values beyond the
    /// header width are dropped, so every record carries exactly the header's
    /// columns.
    pub fn new(columns: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(columns.len(), String::new());
        Self { columns, values }
    }

    /// Returns the cell for `column`, or `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.value_at(index)
    }

    /// Returns the cell at a header position.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Iterates `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Ordered sequence of records sharing one header.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
    #[serde(skip)]
    shared: Arc<[String]>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        let shared: Arc<[String]> = columns.clone().into();
        Self {
            columns,
            records: Vec::new(),
            shared,
        }
    }

    /// Table with no header and no records.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Convenience constructor used by tests and callers holding string rows.
    pub fn from_rows<C, R, V>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = V>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut table = Self::new(columns.into_iter().map(Into::into).collect());
        for row in rows {
            table.push_row(row.into_iter().map(Into::into).collect());
        }
        table
    }

    /// Appends a row; values are aligned to the header (see [`Record::new`]).
    pub fn push_row(&mut self, values: Vec<String>) {
        self.records
            .push(Record::new(Arc::clone(&self.shared), values));
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if `column` is part of the header.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let table = Table::from_rows(
            ["age", "gender", "city"],
            [vec!["25"], vec!["30", "male", "Paris", "extra"]],
        );
        let first = &table.records()[0];
        assert_eq!(first.get("age"), Some("25"));
        assert_eq!(first.get("gender"), Some(""));
        assert_eq!(first.get("city"), Some(""));
        assert_eq!(table.records()[1].len(), 3);
        assert_eq!(table.records()[1].get("city"), Some("Paris"));
    }

    #[test]
    fn lookups_are_case_exact() {
        let table = Table::from_rows(["Age"], [vec!["41"]]);
        assert_eq!(table.records()[0].get("Age"), Some("41"));
        assert_eq!(table.records()[0].get("age"), None);
    }
}
