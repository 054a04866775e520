//! Result sinks: where the loaded columns end up.
//!
//! The loader hands every non-ignored column, in original column order, to a
//! [`ColumnSink`]. [`ColumnSet`] is the default in-memory sink; callers with
//! their own containers implement the trait instead.

use serde::Serialize;

/// One homogeneous column of decoded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnData {
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of values in this column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(values) => values.len(),
            ColumnData::Double(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    /// `true` when this column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The integer values, if this is an integer column.
    pub fn as_integers(&self) -> Option<&[i32]> {
        match self {
            ColumnData::Integer(values) => Some(values),
            _ => None,
        }
    }

    /// The floating-point values, if this is a double column.
    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Double(values) => Some(values),
            _ => None,
        }
    }

    /// The text values, if this is a text column.
    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            ColumnData::Text(values) => Some(values),
            _ => None,
        }
    }
}

/// Receiver for the typed columns produced by a load.
///
/// Columns arrive once each, in original column order, after the bulk pass
/// completes; ignored columns never arrive at all. `name` is present exactly
/// when the file was loaded with headers.
pub trait ColumnSink {
    fn push_column(&mut self, name: Option<String>, data: ColumnData);
}

/// Default in-memory sink: ordered columns plus a parallel name list.
///
/// The name list exists only when headers were present, and is aligned with
/// the emitted (non-ignored) columns only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnSet {
    columns: Vec<ColumnData>,
    names: Option<Vec<String>>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emitted columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All emitted columns, in original column order.
    pub fn columns(&self) -> &[ColumnData] {
        &self.columns
    }

    /// The column at `index`, if any.
    pub fn column(&self, index: usize) -> Option<&ColumnData> {
        self.columns.get(index)
    }

    /// The header names aligned with [`columns`](Self::columns), when the
    /// file had headers.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Integer values of the column at `index`, when it is an integer column.
    pub fn integers(&self, index: usize) -> Option<&[i32]> {
        self.column(index)?.as_integers()
    }

    /// Floating-point values of the column at `index`, when it is a double
    /// column.
    pub fn doubles(&self, index: usize) -> Option<&[f64]> {
        self.column(index)?.as_doubles()
    }

    /// Text values of the column at `index`, when it is a text column.
    pub fn texts(&self, index: usize) -> Option<&[String]> {
        self.column(index)?.as_texts()
    }
}

impl ColumnSink for ColumnSet {
    fn push_column(&mut self, name: Option<String>, data: ColumnData) {
        if let Some(name) = name {
            self.names.get_or_insert_with(Vec::new).push(name);
        }
        self.columns.push(data);
    }
}
