//! Strict string-to-number probing.
//!
//! These probes back both type inference (which column type does a sample
//! value suggest?) and data loading (does this field satisfy its column's
//! declared type?). Both require the *entire* input, after trimming
//! surrounding whitespace, to be consumed by the parse.

/// Whitespace characters trimmed before probing.
const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Parse `text` as a base-10 `i32`.
///
/// Leading/trailing whitespace (space, tab, CR, LF) is trimmed first. The
/// remaining text must consist of an optional sign followed by decimal digits
/// only, and the value must fit an `i32` without truncation.
///
/// ```
/// use csvcolumns::probe::parse_integer;
///
/// assert_eq!(parse_integer("  12  "), Some(12));
/// assert_eq!(parse_integer("-7"), Some(-7));
/// assert_eq!(parse_integer("12a"), None);
/// assert_eq!(parse_integer("2147483648"), None); // overflows i32
/// ```
pub fn parse_integer(text: &str) -> Option<i32> {
    let trimmed = text.trim_matches(WHITESPACE);
    if trimmed.is_empty() {
        return None;
    }
    // Parse wide first so that values overflowing i32 fail the narrowing
    // check instead of the textual parse.
    let wide: i64 = trimmed.parse().ok()?;
    i32::try_from(wide).ok()
}

/// Parse `text` as an `f64`.
///
/// Leading/trailing whitespace is trimmed first; the remaining text must
/// parse as a standard decimal or exponential floating-point literal
/// (`inf`/`nan` literals are accepted, as C's `strtod` accepts them).
///
/// One documented heuristic on top: Windows runtimes print infinities and
/// NaNs as `1.#INF` / `-1.#INF` / `1.#IND`. When the whole-string parse
/// fails, the longest numeric prefix is taken and, if the rest (after
/// skipping whitespace) starts with `#INF`, the result is an infinity signed
/// by that prefix (positive when the prefix is empty or zero); `#IND` yields
/// NaN. The whitespace skip means `1.  #INF` is also accepted; this matches
/// the historical behavior and is intentionally not stricter.
pub fn parse_double(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(WHITESPACE);
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }

    let (prefix, rest) = trimmed.split_at(numeric_prefix_len(trimmed));
    let value = if prefix.is_empty() {
        0.0
    } else {
        prefix.parse::<f64>().ok()?
    };
    let rest = rest.trim_start_matches(WHITESPACE);
    if rest.starts_with("#INF") {
        Some(if value < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    } else if rest.starts_with("#IND") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Length of the longest `strtod`-style numeric prefix of `text`:
/// `[+-]? digits [. digits] [eE [+-] digits]`. Returns 0 when no digit is
/// found (a bare sign or dot does not count as a conversion).
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        i += 1;
    }
    let mut saw_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return 0;
    }
    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
