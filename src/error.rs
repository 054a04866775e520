//! Error types for the loading engine.
//!
//! Every failure is fatal to the invocation that produced it: there is no
//! retry or partial-result path. Errors carry enough positional context
//! (line number, column number, offending text, expected type tag) to locate
//! the offending input without re-running with extra diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Coarse classification of a [`LoadError`].
///
/// `Internal` errors indicate a defect in the engine itself rather than bad
/// input; the other kinds are user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or an unusable file.
    Config,
    /// The header/sample pass could not establish a column schema.
    Schema,
    /// A data line failed to split or parse under the established schema.
    Row,
    /// An engine invariant was violated.
    Internal,
}

/// All the ways a load can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("maximum line length must be larger than 0")]
    ZeroMaxLineLength,

    #[error("unable to open file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while reading: {0}")]
    Io(#[from] io::Error),

    #[error("invalid column type '{0}' in type signature")]
    UnknownTypeTag(char),

    #[error("unable to read first line from file '{path}'")]
    MissingFirstLine { path: PathBuf },

    #[error("unable to read second line from file '{path}' (needed to guess column types)")]
    MissingSampleLine { path: PathBuf },

    #[error(
        "number of columns in first line ({columns}) is not equal to the type signature length ({signature})"
    )]
    SignatureLengthMismatch { columns: usize, signature: usize },

    #[error(
        "first and second line in '{path}' do not contain the same number of columns ({header} vs {sample})"
    )]
    SampleWidthMismatch {
        path: PathBuf,
        header: usize,
        sample: usize,
    },

    #[error("unable to rewind '{path}': {source}")]
    Rewind {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not enough columns on line {line} (expected {expected}, found {found})")]
    NotEnoughColumns {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("unable to interpret '{value}' (line {line}, col {column}) as type '{expected}'")]
    FieldParse {
        value: String,
        line: u64,
        column: usize,
        expected: char,
    },

    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl LoadError {
    /// Classify this error for logging and reporting purposes.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::ZeroMaxLineLength
            | LoadError::Open { .. }
            | LoadError::Io(_)
            | LoadError::UnknownTypeTag(_) => ErrorKind::Config,
            LoadError::MissingFirstLine { .. }
            | LoadError::MissingSampleLine { .. }
            | LoadError::SignatureLengthMismatch { .. }
            | LoadError::SampleWidthMismatch { .. }
            | LoadError::Rewind { .. } => ErrorKind::Schema,
            LoadError::NotEnoughColumns { .. } | LoadError::FieldParse { .. } => ErrorKind::Row,
            LoadError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// `true` when this error indicates an engine defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}
