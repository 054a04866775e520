//! Column type tags and the per-file type signature.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LoadError;

/// The declared type of one output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    /// 32-bit signed integers, tag `i`.
    Integer,
    /// 64-bit floating-point values, tag `r`.
    Double,
    /// Verbatim text, tag `s`.
    Text,
    /// Accepted but discarded, tag `.`. Never produced by inference.
    Ignore,
}

impl ColumnType {
    /// Decode a signature tag character.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'i' => Some(ColumnType::Integer),
            'r' => Some(ColumnType::Double),
            's' => Some(ColumnType::Text),
            '.' => Some(ColumnType::Ignore),
            _ => None,
        }
    }

    /// The signature tag character for this type.
    pub fn tag(self) -> char {
        match self {
            ColumnType::Integer => 'i',
            ColumnType::Double => 'r',
            ColumnType::Text => 's',
            ColumnType::Ignore => '.',
        }
    }

    /// `true` for [`ColumnType::Ignore`].
    pub fn is_ignore(self) -> bool {
        self == ColumnType::Ignore
    }
}

/// An ordered sequence of column type tags, one per column.
///
/// Immutable once established: it is either parsed from a caller-supplied
/// tag string or inferred from sample data during schema resolution, and its
/// length must equal the number of fields on the first line of the file.
///
/// ```
/// use csvcolumns::{ColumnType, TypeSignature};
///
/// let sig: TypeSignature = "ir.s".parse()?;
/// assert_eq!(sig.len(), 4);
/// assert_eq!(sig.types()[1], ColumnType::Double);
/// assert_eq!(sig.to_string(), "ir.s");
/// # Ok::<(), csvcolumns::LoadError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSignature(Vec<ColumnType>);

impl TypeSignature {
    /// Number of columns covered by this signature.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the signature covers no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The per-column types, in column order.
    pub fn types(&self) -> &[ColumnType] {
        &self.0
    }

    /// Iterate over the per-column types.
    pub fn iter(&self) -> impl Iterator<Item = ColumnType> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<ColumnType>> for TypeSignature {
    fn from(types: Vec<ColumnType>) -> Self {
        Self(types)
    }
}

impl FromStr for TypeSignature {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|tag| ColumnType::from_tag(tag).ok_or(LoadError::UnknownTypeTag(tag)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ty in &self.0 {
            write!(f, "{}", ty.tag())?;
        }
        Ok(())
    }
}
