//! Line readers for the two passes over the input file.
//!
//! The unbounded [`read_line`] is used only for the first one or two lines
//! (header names and the inference sample) where field lengths are unknown.
//! The bulk pass uses [`BoundedLineReader`], which caps per-line memory at a
//! caller-configured maximum.

use std::io::{self, BufRead};

/// Read one line of unbounded length.
///
/// Consumes bytes through the next line feed (or end of stream), strips the
/// terminator and a trailing carriage return, and returns the line. Returns
/// `Ok(None)` only when zero bytes were read before end of stream, which
/// distinguishes "empty line" from "no more lines".
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Fixed-capacity line reader for the bulk pass.
///
/// Mirrors `fgets` semantics: each call reads at most `capacity - 1` bytes,
/// stopping after a line feed. The returned line *keeps* its terminator;
/// downstream consumers trim it.
///
/// **Known limitation**: a line longer than the capacity is silently
/// truncated, and its remainder surfaces as the next line. Callers must pick
/// a maximum line length with this in mind; it is preserved behavior, not an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct BoundedLineReader {
    capacity: usize,
}

impl BoundedLineReader {
    /// Create a reader that yields at most `capacity - 1` bytes per line.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Read the next (possibly truncated) line, or `Ok(None)` at end of
    /// stream.
    pub fn read_line<R: BufRead>(&self, reader: &mut R) -> io::Result<Option<String>> {
        let limit = self.capacity.saturating_sub(1);
        let mut buf: Vec<u8> = Vec::new();
        while buf.len() < limit {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            let room = limit - buf.len();
            let take = chunk.len().min(room);
            match chunk[..take].iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    buf.extend_from_slice(&chunk[..=pos]);
                    reader.consume(pos + 1);
                    break;
                }
                None => {
                    buf.extend_from_slice(&chunk[..take]);
                    reader.consume(take);
                }
            }
        }
        if buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn unbounded_strips_terminators() {
        let mut cur = Cursor::new(b"abc\r\ndef\nghi".to_vec());
        assert_eq!(read_line(&mut cur).unwrap(), Some("abc".to_string()));
        assert_eq!(read_line(&mut cur).unwrap(), Some("def".to_string()));
        assert_eq!(read_line(&mut cur).unwrap(), Some("ghi".to_string()));
        assert_eq!(read_line(&mut cur).unwrap(), None);
    }

    #[test]
    fn unbounded_distinguishes_empty_line_from_eof() {
        let mut cur = Cursor::new(b"\nx\n".to_vec());
        assert_eq!(read_line(&mut cur).unwrap(), Some(String::new()));
        assert_eq!(read_line(&mut cur).unwrap(), Some("x".to_string()));
        assert_eq!(read_line(&mut cur).unwrap(), None);
    }

    #[test]
    fn bounded_keeps_terminator() {
        let reader = BoundedLineReader::new(64);
        let mut cur = Cursor::new(b"a,b\nc,d\n".to_vec());
        assert_eq!(reader.read_line(&mut cur).unwrap(), Some("a,b\n".into()));
        assert_eq!(reader.read_line(&mut cur).unwrap(), Some("c,d\n".into()));
        assert_eq!(reader.read_line(&mut cur).unwrap(), None);
    }

    #[test]
    fn bounded_truncates_overlong_lines() {
        // Capacity 5 reads at most 4 bytes per call, fgets-style: the
        // remainder of a long line comes back as the next line.
        let reader = BoundedLineReader::new(5);
        let mut cur = Cursor::new(b"abcdefgh\n".to_vec());
        assert_eq!(reader.read_line(&mut cur).unwrap(), Some("abcd".into()));
        assert_eq!(reader.read_line(&mut cur).unwrap(), Some("efgh".into()));
        assert_eq!(reader.read_line(&mut cur).unwrap(), Some("\n".into()));
        assert_eq!(reader.read_line(&mut cur).unwrap(), None);
    }
}
