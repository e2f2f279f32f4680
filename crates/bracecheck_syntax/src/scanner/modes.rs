//! Lexical modes and their transitions
//!
//! Each mode has one transition function. A transition looks at the current character and the one after it,
//! and says which mode comes next, how many characters to consume, and whether the brace stack is touched.
//! Only `Code` ever touches the stack, so a brace inside a comment or literal can never be counted.

use crate::config::ScanConfig;

/// The scanner's current interpretation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain source; comments, literals and braces are recognised here
    Code,
    /// After `//`, up to and including the next newline
    LineComment,
    /// After `/*`, up to and including the next `*/`
    BlockComment,
    /// After an opening delimiter, up to and including the same delimiter
    Quoted(char),
}

/// What a `Code`-mode character does to the brace stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BraceOp {
    Push,
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) next: Mode,
    /// Characters consumed by this step; fewer may remain at end of input
    pub(crate) width: usize,
    pub(crate) brace: Option<BraceOp>,
}

impl Transition {
    fn stay(mode: Mode) -> Self {
        Self::to(mode, 1)
    }

    fn to(next: Mode, width: usize) -> Self {
        Self {
            next,
            width,
            brace: None,
        }
    }

    fn brace(op: BraceOp) -> Self {
        Self {
            next: Mode::Code,
            width: 1,
            brace: Some(op),
        }
    }
}

impl Mode {
    pub fn is_code(self) -> bool {
        self == Mode::Code
    }

    pub(crate) fn step(self, current: char, next: Option<char>, config: &ScanConfig) -> Transition {
        match self {
            Mode::Code => code(current, next, config),
            Mode::LineComment => line_comment(current),
            Mode::BlockComment => block_comment(current, next),
            Mode::Quoted(delimiter) => quoted(delimiter, current, config),
        }
    }
}

/// Priority: line comment, block comment, literal, `{`, `}`, anything else.
fn code(current: char, next: Option<char>, config: &ScanConfig) -> Transition {
    match (current, next) {
        ('/', Some('/')) => Transition::to(Mode::LineComment, 2),
        ('/', Some('*')) => Transition::to(Mode::BlockComment, 2),
        (c, _) if config.is_quote(c) => Transition::to(Mode::Quoted(c), 1),
        ('{', _) => Transition::brace(BraceOp::Push),
        ('}', _) => Transition::brace(BraceOp::Pop),
        _ => Transition::stay(Mode::Code),
    }
}

fn line_comment(current: char) -> Transition {
    if current == '\n' {
        Transition::to(Mode::Code, 1)
    } else {
        Transition::stay(Mode::LineComment)
    }
}

fn block_comment(current: char, next: Option<char>) -> Transition {
    match (current, next) {
        ('*', Some('/')) => Transition::to(Mode::Code, 2),
        _ => Transition::stay(Mode::BlockComment),
    }
}

fn quoted(delimiter: char, current: char, config: &ScanConfig) -> Transition {
    if current == config.escape {
        // the escaped character is never a delimiter, newline or escape in its own right
        Transition::to(Mode::Quoted(delimiter), 2)
    } else if current == delimiter {
        Transition::to(Mode::Code, 1)
    } else {
        Transition::stay(Mode::Quoted(delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(mode: Mode, current: char, next: Option<char>) -> Transition {
        mode.step(current, next, &ScanConfig::default())
    }

    #[test]
    fn test_code_line_comment_beats_block_comment_and_literal() {
        assert_eq!(step(Mode::Code, '/', Some('/')), Transition::to(Mode::LineComment, 2));
        assert_eq!(step(Mode::Code, '/', Some('*')), Transition::to(Mode::BlockComment, 2));
        assert_eq!(step(Mode::Code, '/', Some('"')), Transition::stay(Mode::Code));
        assert_eq!(step(Mode::Code, '/', None), Transition::stay(Mode::Code));
    }

    #[test]
    fn test_code_quotes_open_literal() {
        for quote in ['"', '\'', '`'] {
            assert_eq!(step(Mode::Code, quote, Some('{')), Transition::to(Mode::Quoted(quote), 1));
        }
    }

    #[test]
    fn test_code_braces() {
        assert_eq!(step(Mode::Code, '{', None).brace, Some(BraceOp::Push));
        assert_eq!(step(Mode::Code, '}', None).brace, Some(BraceOp::Pop));
        assert_eq!(step(Mode::Code, 'x', None).brace, None);
    }

    #[test]
    fn test_braces_ignored_outside_code() {
        for mode in [Mode::LineComment, Mode::BlockComment, Mode::Quoted('"')] {
            assert_eq!(step(mode, '{', None), Transition::stay(mode));
            assert_eq!(step(mode, '}', None), Transition::stay(mode));
        }
    }

    #[test]
    fn test_line_comment_ends_on_newline() {
        assert_eq!(step(Mode::LineComment, '\n', Some('{')), Transition::to(Mode::Code, 1));
        assert_eq!(step(Mode::LineComment, '*', Some('/')), Transition::stay(Mode::LineComment));
    }

    #[test]
    fn test_block_comment_ends_on_star_slash() {
        assert_eq!(step(Mode::BlockComment, '*', Some('/')), Transition::to(Mode::Code, 2));
        assert_eq!(step(Mode::BlockComment, '*', None), Transition::stay(Mode::BlockComment));
        assert_eq!(step(Mode::BlockComment, '\n', None), Transition::stay(Mode::BlockComment));
    }

    #[test]
    fn test_quoted_escape_consumes_pair() {
        assert_eq!(step(Mode::Quoted('"'), '\\', Some('"')), Transition::to(Mode::Quoted('"'), 2));
    }

    #[test]
    fn test_quoted_closes_only_on_own_delimiter() {
        assert_eq!(step(Mode::Quoted('"'), '"', None), Transition::to(Mode::Code, 1));
        assert_eq!(step(Mode::Quoted('"'), '\'', None), Transition::stay(Mode::Quoted('"')));
        assert_eq!(step(Mode::Quoted('`'), '\n', None), Transition::stay(Mode::Quoted('`')));
    }
}
