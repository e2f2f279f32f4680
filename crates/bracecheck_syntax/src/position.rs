//! Source positions.
//!
//! A [`Position`] is derived solely from the characters consumed so far: the number of newlines seen gives the
//! line, the number of characters since the last newline gives the column. Columns count Unicode scalar values,
//! not bytes.

use std::fmt;

/// A 1-based (line, column) location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position after consuming `c` from this position.
    #[must_use]
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Byte offset of this position within `source`, if the position names a character in it.
    ///
    /// Used by renderers that need to point at the offending brace in the original text.
    pub fn byte_offset_in(self, source: &str) -> Option<usize> {
        Self::byte_offsets_in(source, &[self]).pop().flatten()
    }

    /// Byte offsets of many positions, found in a single walk over `source`.
    ///
    /// The result is parallel to `positions`, which may be in any order.
    pub fn byte_offsets_in(source: &str, positions: &[Position]) -> Vec<Option<usize>> {
        let mut order: Vec<usize> = (0..positions.len()).collect();
        order.sort_by_key(|&i| positions[i]);

        let mut offsets = vec![None; positions.len()];
        let mut pending = order.into_iter().peekable();
        let mut cursor = Position::START;
        for (offset, c) in source.char_indices() {
            while let Some(&i) = pending.peek() {
                if positions[i] > cursor {
                    break;
                }
                // positions behind the cursor name no character (e.g. past the end of a line)
                if positions[i] == cursor {
                    offsets[i] = Some(offset);
                }
                pending.next();
            }
            if pending.peek().is_none() {
                break;
            }
            cursor = cursor.advance(c);
        }
        offsets
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} col {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_line_one_col_one() {
        assert_eq!(Position::START, Position::new(1, 1));
        assert_eq!(Position::default(), Position::START);
    }

    #[test]
    fn test_advance_plain_char_moves_column() {
        let pos = Position::START.advance('a').advance('{');
        assert_eq!(pos, Position::new(1, 3));
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let pos = Position::new(4, 17).advance('\n');
        assert_eq!(pos, Position::new(5, 1));
    }

    #[test]
    fn test_advance_counts_chars_not_bytes() {
        let pos = "é€{".chars().fold(Position::START, Position::advance);
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_carriage_return_is_an_ordinary_char() {
        let pos = "a\r\nb".chars().fold(Position::START, Position::advance);
        assert_eq!(pos, Position::new(2, 2));
    }

    #[test]
    fn test_byte_offset_in() {
        let source = "ab\n€{\n}";
        assert_eq!(Position::new(1, 1).byte_offset_in(source), Some(0));
        assert_eq!(Position::new(2, 1).byte_offset_in(source), Some(3));
        // `€` is three bytes wide
        assert_eq!(Position::new(2, 2).byte_offset_in(source), Some(6));
        assert_eq!(Position::new(3, 1).byte_offset_in(source), Some(8));
        assert_eq!(Position::new(3, 2).byte_offset_in(source), None);
        assert_eq!(Position::new(9, 1).byte_offset_in(source), None);
    }

    #[test]
    fn test_byte_offsets_in_any_order() {
        let source = "}\n  }\n}";
        let positions = [
            Position::new(3, 1),
            Position::new(1, 1),
            Position::new(1, 7),
            Position::new(2, 3),
            Position::new(1, 1),
        ];
        assert_eq!(
            Position::byte_offsets_in(source, &positions),
            vec![Some(6), Some(0), None, Some(4), Some(0)]
        );
    }

    #[test]
    fn test_byte_offsets_in_many_braces_on_one_line() {
        let source = "}".repeat(5_000);
        let positions: Vec<Position> = (1..=5_000).rev().map(|column| Position::new(1, column)).collect();
        let offsets = Position::byte_offsets_in(&source, &positions);
        assert_eq!(offsets.len(), 5_000);
        assert_eq!(offsets[0], Some(4_999));
        assert_eq!(offsets[4_999], Some(0));
        assert!(offsets.iter().all(Option::is_some));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(12, 3).to_string(), "line 12 col 3");
    }
}
