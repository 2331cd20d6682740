//! Byte offset to line/column conversion
//!
//! Line starts are computed once; each lookup is a binary search.

use crate::simplecc::token::Location;

pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based line and 0-based byte column of `byte_offset`.
    pub fn byte_to_location(&self, byte_offset: usize) -> Location {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);
        Location::new(line + 1, byte_offset - self.line_starts[line])
    }

    /// Number of lines, not counting an empty remainder after a final newline.
    pub fn line_count(&self) -> usize {
        let ends_open = self
            .line_starts
            .last()
            .is_some_and(|&start| start < self.source.len());
        let closed = self.line_starts.len() - 1;
        closed + usize::from(ends_open)
    }

    /// Text of a 1-based line without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let index = line.checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        if start > self.source.len() {
            return None;
        }
        let text = &self.source[start..end.max(start)];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_location() {
        let loc = SourceLocation::new("int a;\nchar b;\n");
        assert_eq!(loc.byte_to_location(0), Location::new(1, 0));
        assert_eq!(loc.byte_to_location(4), Location::new(1, 4));
        assert_eq!(loc.byte_to_location(7), Location::new(2, 0));
        assert_eq!(loc.byte_to_location(12), Location::new(2, 5));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("").line_count(), 0);
        assert_eq!(SourceLocation::new("a").line_count(), 1);
        assert_eq!(SourceLocation::new("a\n").line_count(), 1);
        assert_eq!(SourceLocation::new("a\nb").line_count(), 2);
        assert_eq!(SourceLocation::new("a\n\n").line_count(), 2);
    }

    #[test]
    fn test_line_text() {
        let loc = SourceLocation::new("first\r\nsecond\n");
        assert_eq!(loc.line_text(1), Some("first"));
        assert_eq!(loc.line_text(2), Some("second"));
        assert_eq!(loc.line_text(3), Some(""));
        assert_eq!(loc.line_text(0), None);
        assert_eq!(loc.line_text(4), None);
    }
}
