//! The per-column typed accumulator driven by the bulk pass.

use crate::error::{LoadError, Result};
use crate::probe;
use crate::signature::ColumnType;
use crate::sink::{ColumnData, ColumnSink};

/// Append-only typed store for one output column.
///
/// A tagged union over the four column types, each holding its own
/// homogeneous sequence. Invariant: across one load, every non-ignored store
/// advances in lockstep, so after each successfully processed data line all
/// non-ignored stores hold the same number of values.
#[derive(Debug)]
pub enum Column {
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Text(Vec<String>),
    Ignore,
}

impl Column {
    /// Create an empty store of the given type.
    pub fn new(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Integer => Column::Integer(Vec::new()),
            ColumnType::Double => Column::Double(Vec::new()),
            ColumnType::Text => Column::Text(Vec::new()),
            ColumnType::Ignore => Column::Ignore,
        }
    }

    /// The type tag this store was created with.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Integer(_) => ColumnType::Integer,
            Column::Double(_) => ColumnType::Double,
            Column::Text(_) => ColumnType::Text,
            Column::Ignore => ColumnType::Ignore,
        }
    }

    /// `true` when this store discards its input.
    pub fn is_ignore(&self) -> bool {
        matches!(self, Column::Ignore)
    }

    /// Number of accumulated values (always 0 for an ignored store).
    pub fn len(&self) -> usize {
        match self {
            Column::Integer(values) => values.len(),
            Column::Double(values) => values.len(),
            Column::Text(values) => values.len(),
            Column::Ignore => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-type an *empty* store. Guards against reuse: once a value has been
    /// accepted the type is fixed, and re-assigning it is an engine defect.
    pub fn set_type(&mut self, ty: ColumnType) -> Result<()> {
        if !self.is_empty() {
            return Err(LoadError::Internal(
                "set_type called on a non-empty column store",
            ));
        }
        *self = Column::new(ty);
        Ok(())
    }

    /// Accept one field of text, appending the decoded value on success.
    ///
    /// Numeric stores delegate to the probes and report failure without
    /// mutating state. Text stores always succeed; when `last_col` is set,
    /// trailing CR/LF is stripped first (the bounded reader leaves the line
    /// terminator attached to the final field). Ignored stores always
    /// succeed and store nothing.
    pub fn accept(&mut self, text: &str, last_col: bool) -> bool {
        match self {
            Column::Integer(values) => match probe::parse_integer(text) {
                Some(value) => {
                    values.push(value);
                    true
                }
                None => false,
            },
            Column::Double(values) => match probe::parse_double(text) {
                Some(value) => {
                    values.push(value);
                    true
                }
                None => false,
            },
            Column::Text(values) => {
                let text = if last_col {
                    text.trim_end_matches(['\n', '\r'])
                } else {
                    text
                };
                values.push(text.to_string());
                true
            }
            Column::Ignore => true,
        }
    }

    /// Hand the accumulated values to the sink as one homogeneous column.
    ///
    /// The caller must filter out ignored stores first; emitting one is an
    /// engine defect.
    pub fn emit<S: ColumnSink>(self, name: Option<String>, sink: &mut S) -> Result<()> {
        let data = match self {
            Column::Integer(values) => ColumnData::Integer(values),
            Column::Double(values) => ColumnData::Double(values),
            Column::Text(values) => ColumnData::Text(values),
            Column::Ignore => {
                return Err(LoadError::Internal(
                    "emit called on an ignored column store",
                ));
            }
        };
        sink.push_column(name, data);
        Ok(())
    }
}
