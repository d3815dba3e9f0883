//! Append-only record tables with key-based de-duplication.

use std::slice::Iter;

/// A record that identifies itself by a key; a table holds at most one record per key.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// A table column header with the precision its cells are shown at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub precision: usize,
}

impl Column {
    #[must_use]
    pub const fn new(header: &'static str, precision: usize) -> Self {
        Self { header, precision }
    }
}

/// A record that can be laid out as a row of numeric cells.
pub trait TableRow {
    const COLUMNS: &'static [Column];

    /// Cell values in `COLUMNS` order.
    fn cells(&self) -> Vec<f64>;

    /// Cells rendered with each column's precision.
    fn formatted_cells(&self) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .zip(self.cells())
            .map(|(column, value)| format!("{value:.prec$}", prec = column.precision))
            .collect()
    }
}

/// Ordered collection holding at most one record per key.
///
/// Insertion order is kept but carries no meaning; readers sort before use.
#[derive(Debug, Clone)]
pub struct RecordTable<R> {
    records: Vec<R>,
}

impl<R> Default for RecordTable<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Keyed> RecordTable<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains_key(&self, key: &R::Key) -> bool {
        self.records.iter().any(|r| r.key() == *key)
    }

    /// Append `record` unless its key is already present.
    ///
    /// Returns `false` for a duplicate; the table is left untouched.
    pub fn insert(&mut self, record: R) -> bool {
        if self.contains_key(&record.key()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, R> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<R: Keyed + Clone> RecordTable<R> {
    /// Copy of the records sorted ascending by `field` (stable for equal values).
    #[must_use]
    pub fn sorted_by(&self, field: impl Fn(&R) -> f64) -> Vec<R> {
        let mut rows = self.records.clone();
        rows.sort_by(|a, b| field(a).total_cmp(&field(b)));
        rows
    }
}

impl<'a, R> IntoIterator for &'a RecordTable<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
