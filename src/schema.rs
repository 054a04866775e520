//! Schema resolution: the first pass over the file.
//!
//! Establishes the per-column type signature and the optional header names,
//! then leaves the stream positioned at the first data line for the bulk
//! pass. The signature comes either from a caller-supplied tag string
//! (validated against the detected column count) or from probing one line of
//! sample data.

use std::io::{BufRead, Seek, SeekFrom};
use std::path::Path;

use log::info;

use crate::error::{LoadError, Result};
use crate::probe;
use crate::read;
use crate::signature::{ColumnType, TypeSignature};
use crate::split::{self, SplitOptions};

/// Splitter configuration for line 1: quote-aware so quoted header names may
/// contain the separator.
const HEADER_SPLIT: SplitOptions<'static> = SplitOptions {
    separators: ",",
    quotes: "\"'",
    comments: "",
    ignore_empty: false,
};

/// Splitter configuration for the sample line: no quote handling, matching
/// how the bulk pass will see data lines.
const SAMPLE_SPLIT: SplitOptions<'static> = SplitOptions {
    separators: ",",
    quotes: "",
    comments: "",
    ignore_empty: false,
};

/// Outcome of schema resolution.
///
/// After a successful [`resolve`], the stream is positioned at the first
/// data line and both fields are immutable for the rest of the load.
#[derive(Debug)]
pub struct Schema {
    /// One type tag per column of the file.
    pub signature: TypeSignature,
    /// Header names from line 1, present exactly when headers were declared.
    pub names: Option<Vec<String>>,
}

/// Resolve the column schema of the stream.
///
/// Reads line 1 (and line 2 when inference needs a sample and line 1 holds
/// names), derives or validates the type signature, and repositions the
/// stream so the bulk pass starts at the first data line. When the signature
/// is inferred rather than supplied, it is reported via `log::info!`.
///
/// `path` is used for diagnostics only; the stream itself is the source.
///
/// # Errors
/// All failures are fatal: an unreadable first line, a signature length that
/// does not match the detected column count, an unknown tag character, an
/// unreadable or mismatched sample line, or a rewind failure.
pub fn resolve<R: BufRead + Seek>(
    reader: &mut R,
    path: &Path,
    explicit: Option<&str>,
    has_headers: bool,
) -> Result<Schema> {
    let first = read::read_line(reader)?.ok_or_else(|| LoadError::MissingFirstLine {
        path: path.to_path_buf(),
    })?;
    let header_fields = split::split_flexible(&first, &HEADER_SPLIT);
    let num_cols = header_fields.len();

    let signature = match explicit {
        Some(tags) => {
            let signature: TypeSignature = tags.parse()?;
            if signature.len() != num_cols {
                return Err(LoadError::SignatureLengthMismatch {
                    columns: num_cols,
                    signature: signature.len(),
                });
            }
            // Line 1 was consumed purely to count columns; without headers
            // it is data and the bulk pass must re-read it.
            if !has_headers {
                rewind(reader, path)?;
            }
            signature
        }
        None => {
            let sample_fields;
            let sample: &[String] = if has_headers {
                // Line 1 holds names, so probe line 2 instead.
                let second =
                    read::read_line(reader)?.ok_or_else(|| LoadError::MissingSampleLine {
                        path: path.to_path_buf(),
                    })?;
                sample_fields = split::split_flexible(&second, &SAMPLE_SPLIT);
                if sample_fields.len() != num_cols {
                    return Err(LoadError::SampleWidthMismatch {
                        path: path.to_path_buf(),
                        header: num_cols,
                        sample: sample_fields.len(),
                    });
                }
                &sample_fields
            } else {
                &header_fields
            };

            let types: Vec<ColumnType> = sample.iter().map(|field| infer_type(field)).collect();
            let signature = TypeSignature::from(types);
            info!("detected column signature '{signature}'");

            rewind(reader, path)?;
            if has_headers {
                // Skip line 1 again so the bulk pass starts at line 2.
                read::read_line(reader)?.ok_or_else(|| LoadError::MissingFirstLine {
                    path: path.to_path_buf(),
                })?;
            }
            signature
        }
    };

    let names = has_headers.then_some(header_fields);
    Ok(Schema { signature, names })
}

/// Probe one sample value: integer first, then double, falling back to text.
/// Inference never produces [`ColumnType::Ignore`].
fn infer_type(field: &str) -> ColumnType {
    if probe::parse_integer(field).is_some() {
        ColumnType::Integer
    } else if probe::parse_double(field).is_some() {
        ColumnType::Double
    } else {
        ColumnType::Text
    }
}

fn rewind<R: Seek>(reader: &mut R, path: &Path) -> Result<()> {
    reader
        .seek(SeekFrom::Start(0))
        .map(|_| ())
        .map_err(|source| LoadError::Rewind {
            path: path.to_path_buf(),
            source,
        })
}
