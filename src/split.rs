//! Field splitting for header and data lines.
//!
//! Two splitters with very different contracts:
//!
//! - [`split_flexible`] is quote- and comment-aware with a configurable
//!   separator set. It is only ever applied to the first one or two lines of
//!   a file (header names and the inference sample), so allocation per field
//!   is acceptable.
//! - [`split_fast`] is a quote-blind single-separator token scan over a
//!   borrowed line, applied to every data line of the bulk pass. Runs of
//!   separators collapse: zero-length fields are never produced.

/// Configuration for [`split_flexible`].
#[derive(Debug, Clone, Copy)]
pub struct SplitOptions<'a> {
    /// Characters that end the current field and start a new one.
    pub separators: &'a str,
    /// Characters that open a verbatim run ending at the same character.
    pub quotes: &'a str,
    /// Characters that end the field and discard the rest of the line.
    pub comments: &'a str,
    /// Drop zero-length fields from the output entirely.
    pub ignore_empty: bool,
}

/// Split one line into fields, honoring quote and comment characters.
///
/// Scanning is left to right. A separator ends the current field. A quote
/// character opens a verbatim run consumed up to the next occurrence of the
/// *same* quote character (or end of line), with no separator or quote
/// interpretation inside. A comment character ends the current field and
/// discards the remainder of the line.
///
/// An empty line, or a line consisting only of separators, still yields one
/// empty field per gap unless `ignore_empty` is set, in which case
/// zero-length fields (leading, interior, trailing) are dropped.
///
/// ```
/// use csvcolumns::split::{split_flexible, SplitOptions};
///
/// let opts = SplitOptions {
///     separators: ",",
///     quotes: "\"'",
///     comments: "",
///     ignore_empty: false,
/// };
/// assert_eq!(split_flexible("a,'b,c',", &opts), vec!["a", "b,c", ""]);
/// ```
pub fn split_flexible(line: &str, opts: &SplitOptions<'_>) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if opts.separators.contains(c) {
            if !opts.ignore_empty || !current.is_empty() {
                fields.push(std::mem::take(&mut current));
            }
        } else if opts.quotes.contains(c) {
            // Verbatim run: everything up to the matching quote (or end of
            // line, when unterminated) is appended literally.
            for quoted in chars.by_ref() {
                if quoted == c {
                    break;
                }
                current.push(quoted);
            }
        } else if opts.comments.contains(c) {
            break;
        } else {
            current.push(c);
        }
    }

    if !opts.ignore_empty || !current.is_empty() {
        fields.push(current);
    }
    fields
}

/// Split one data line on a single separator character.
///
/// Quote-blind by design: the schema is fixed by the time this runs and the
/// bulk pass does not interpret quotes. Consecutive separators are treated
/// as one, so zero-length fields never surface; the caller must fail when
/// fewer tokens appear than the schema requires.
pub fn split_fast(line: &str, separator: char) -> impl Iterator<Item = &str> {
    line.split(separator).filter(|field| !field.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: SplitOptions<'static> = SplitOptions {
        separators: ",",
        quotes: "\"'",
        comments: "",
        ignore_empty: false,
    };

    #[test]
    fn flexible_basic_fields() {
        assert_eq!(split_flexible("a,b,c", &CSV), vec!["a", "b", "c"]);
        assert_eq!(split_flexible("a,,c", &CSV), vec!["a", "", "c"]);
        assert_eq!(split_flexible(",a", &CSV), vec!["", "a"]);
        assert_eq!(split_flexible("a,", &CSV), vec!["a", ""]);
    }

    #[test]
    fn flexible_degenerate_lines() {
        assert_eq!(split_flexible("", &CSV), vec![""]);
        assert_eq!(split_flexible(",", &CSV), vec!["", ""]);
        assert_eq!(split_flexible(",,", &CSV), vec!["", "", ""]);
    }

    #[test]
    fn flexible_quotes_are_verbatim() {
        assert_eq!(split_flexible("\"a,b\",c", &CSV), vec!["a,b", "c"]);
        assert_eq!(split_flexible("'x\"y',z", &CSV), vec!["x\"y", "z"]);
        // Quote runs splice into the surrounding field text.
        assert_eq!(split_flexible("a\"b,c\"d,e", &CSV), vec!["ab,cd", "e"]);
        // An unterminated quote runs to end of line.
        assert_eq!(split_flexible("a,\"bc", &CSV), vec!["a", "bc"]);
    }

    #[test]
    fn flexible_comment_cuts_line() {
        let opts = SplitOptions {
            comments: "#",
            ..CSV
        };
        assert_eq!(split_flexible("a,b#c,d", &opts), vec!["a", "b"]);
        assert_eq!(split_flexible("a,#c", &opts), vec!["a", ""]);
        assert_eq!(split_flexible("#c", &opts), vec![""]);
        // A comment character inside quotes is literal.
        assert_eq!(split_flexible("'a#b',c#d", &opts), vec!["a#b", "c"]);
    }

    #[test]
    fn flexible_ignore_empty_drops_all_empties() {
        let opts = SplitOptions {
            ignore_empty: true,
            ..CSV
        };
        assert_eq!(split_flexible(",a,,b,", &opts), vec!["a", "b"]);
        assert!(split_flexible("", &opts).is_empty());
        assert!(split_flexible(",,", &opts).is_empty());
    }

    #[test]
    fn fast_collapses_separator_runs() {
        let fields: Vec<&str> = split_fast("1,,3", ',').collect();
        assert_eq!(fields, vec!["1", "3"]);
        let fields: Vec<&str> = split_fast(",a,b,", ',').collect();
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(split_fast("", ',').count(), 0);
    }

    #[test]
    fn fast_keeps_line_terminator_on_last_token() {
        let fields: Vec<&str> = split_fast("1,2,x\n", ',').collect();
        assert_eq!(fields, vec!["1", "2", "x\n"]);
        // A trailing separator leaves the terminator as its own token.
        let fields: Vec<&str> = split_fast("1,2,\n", ',').collect();
        assert_eq!(fields, vec!["1", "2", "\n"]);
    }
}
