//! # csvcolumns
//!
//! Column-typed CSV loading for Rust: read a comma-separated text file into
//! strongly-typed, homogeneous columns, optionally inferring each column's
//! type from sample data.
//!
//! ## Key Features
//!
//! - **Typed columns** - each output column is all-integer (`i32`),
//!   all-double (`f64`), or all-text, never a bag of dynamic values
//! - **Type inference** - probe the first data line to derive a per-column
//!   type signature when the caller doesn't supply one
//! - **Compact type signatures** - one character per column: `i` integer,
//!   `r` double, `s` text, `.` ignore
//! - **Bounded memory** - the bulk pass streams line by line through a
//!   fixed-capacity buffer
//! - **Positional diagnostics** - every failure names the line, column,
//!   offending text, and expected type
//! - **Pluggable sinks** - receive columns into the built-in [`ColumnSet`]
//!   or any [`ColumnSink`] of your own
//!
//! ## Quick Start
//!
//! ```no_run
//! use csvcolumns::load;
//!
//! # fn main() -> csvcolumns::Result<()> {
//! // Infer column types; line 1 holds header names.
//! let columns = load("data.csv", None, 16384, true)?;
//!
//! println!("loaded {} columns", columns.len());
//! if let Some(names) = columns.names() {
//!     println!("named {:?}", names);
//! }
//!
//! // Or declare the types yourself, ignoring the middle column.
//! let columns = load("data.csv", Some("i.s"), 16384, true)?;
//! let ids = columns.integers(0).unwrap();
//! let labels = columns.texts(1).unwrap();
//! # Ok(())
//! # }
//! ```
//!
//! ## How a load works
//!
//! Loading is a two-pass algorithm:
//!
//! 1. **Schema resolution** reads line 1 with a quote-aware splitter to
//!    count columns (and collect names when headers are declared). The type
//!    signature is either validated against that count or inferred by
//!    probing one line of sample data (integer first, then double, then
//!    text). The stream is then rewound to the first data line.
//! 2. **Bulk loading** streams every remaining line through a bounded
//!    buffer, splits it on `,` with a fast quote-blind scan, and feeds each
//!    field to its column store. The first failure aborts the whole load.
//!
//! Inferred signatures are reported through the [`log`] facade at info
//! level.
//!
//! ## Limitations
//!
//! By design, this is not a general RFC-4180 reader:
//!
//! - Quotes are honored only on the first two lines (header and inference
//!   sample); data lines are split quote-blind.
//! - A data line longer than `max_line_length` is silently truncated, its
//!   remainder surfacing as the next line. Pick the maximum accordingly.
//! - On data lines, runs of commas collapse: a zero-length field reads as a
//!   missing column, not an empty value.
//! - No locale-aware number parsing. The Windows `1.#INF` / `1.#IND`
//!   spellings of infinities and NaN are honored via a documented heuristic.
//!
//! ## Module Overview
//!
//! - [`loader`] - Bulk pass and the [`load`] / [`load_into`] entry points
//! - [`schema`] - First pass: signature resolution and header names
//! - [`column`] - Per-column typed accumulators
//! - [`sink`] - The [`ColumnSink`] trait and default [`ColumnSet`]
//! - [`signature`] - Type tags and signature parsing
//! - [`split`] - Flexible (header) and fast (data) field splitters
//! - [`probe`] - Strict integer/double probing
//! - [`read`] - Unbounded and bounded line readers
//! - [`error`] - Error types and classification

pub mod column;
pub mod error;
pub mod loader;
pub mod probe;
pub mod read;
pub mod schema;
pub mod signature;
pub mod sink;
pub mod split;

pub use column::Column;
pub use error::{ErrorKind, LoadError, Result};
pub use loader::{load, load_into};
pub use schema::Schema;
pub use signature::{ColumnType, TypeSignature};
pub use sink::{ColumnData, ColumnSet, ColumnSink};
pub use split::SplitOptions;
