//! Bulk loading: the second pass, and the crate's entry points.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::column::Column;
use crate::error::{LoadError, Result};
use crate::read::BoundedLineReader;
use crate::schema;
use crate::sink::{ColumnSet, ColumnSink};
use crate::split;

/// The data-line field separator.
const SEPARATOR: char = ',';

/// Load a comma-separated file into a [`ColumnSet`].
///
/// `signature` supplies one tag per column (`i` integer, `r` double, `s`
/// text, `.` ignore); pass `None` to infer types from the first data line.
/// `max_line_length` bounds per-line memory during the bulk pass; lines
/// longer than this are silently truncated (see
/// [`BoundedLineReader`](crate::read::BoundedLineReader)). When
/// `has_headers` is set, line 1 supplies column names and data starts at
/// line 2.
///
/// ```no_run
/// # fn main() -> csvcolumns::Result<()> {
/// let columns = csvcolumns::load("measurements.csv", None, 16384, true)?;
/// if let Some(values) = columns.doubles(0) {
///     println!("{} values in column 0", values.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Fatal on the first failure: an unusable file or zero `max_line_length`, a
/// schema that cannot be established, a data line with too few fields, or a
/// field that does not parse under its column's type. Row errors name the
/// line number (data lines count from 2), the 1-based column, the offending
/// text, and the expected tag.
pub fn load(
    path: impl AsRef<Path>,
    signature: Option<&str>,
    max_line_length: usize,
    has_headers: bool,
) -> Result<ColumnSet> {
    let mut sink = ColumnSet::new();
    load_into(path, signature, max_line_length, has_headers, &mut sink)?;
    Ok(sink)
}

/// Like [`load`], but emits the columns into a caller-supplied sink.
///
/// The sink receives each non-ignored column exactly once, in original
/// column order, only after every data line has been processed; a failed
/// load leaves the sink untouched.
///
/// # Errors
/// See [`load`].
pub fn load_into<S: ColumnSink>(
    path: impl AsRef<Path>,
    signature: Option<&str>,
    max_line_length: usize,
    has_headers: bool,
    sink: &mut S,
) -> Result<()> {
    let path = path.as_ref();
    if max_line_length == 0 {
        return Err(LoadError::ZeroMaxLineLength);
    }
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let schema = schema::resolve(&mut reader, path, signature, has_headers)?;
    let num_cols = schema.signature.len();
    let mut columns: Vec<Column> = schema.signature.iter().map(Column::new).collect();

    let bounded = BoundedLineReader::new(max_line_length);
    // Data lines are reported starting at 2 whether or not line 1 was a
    // header row (preserved diagnostic convention).
    let mut line_number: u64 = 2;
    while let Some(line) = bounded.read_line(&mut reader)? {
        let mut fields = split::split_fast(&line, SEPARATOR);
        for (index, column) in columns.iter_mut().enumerate() {
            let Some(field) = fields.next() else {
                return Err(LoadError::NotEnoughColumns {
                    line: line_number,
                    expected: num_cols,
                    found: index,
                });
            };
            let last_col = index + 1 == num_cols;
            if !column.accept(field, last_col) {
                return Err(LoadError::FieldParse {
                    value: field.trim_end_matches(['\n', '\r']).to_string(),
                    line: line_number,
                    column: index + 1,
                    expected: column.column_type().tag(),
                });
            }
        }
        // Fields beyond num_cols, if any, are silently ignored.
        line_number += 1;
    }

    let mut names = schema.names.map(Vec::into_iter);
    for column in columns {
        let name = names.as_mut().and_then(Iterator::next);
        if column.is_ignore() {
            continue;
        }
        column.emit(name, sink)?;
    }
    Ok(())
}
