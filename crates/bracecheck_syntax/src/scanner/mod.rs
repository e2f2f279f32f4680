//! Brace-balance scanner
//!
//! Walks the source once, left to right, as a small mode machine:
//!
//! ```text
//! [Code] --"//"--> [LineComment] --'\n'--> [Code]
//! [Code] --"/*"--> [BlockComment] --"*/"--> [Code]
//! [Code] --quote q--> [Quoted(q)] --q--> [Code]      (escape + next char consumed as a pair)
//! [Code] --'{'--> push position
//! [Code] --'}'--> pop, or record an extra close
//! ```
//!
//! Every consumed character advances the line/column cursor, whatever the mode, so positions after comments
//! and literals stay exact.
//!
//! ## Module Structure
//!
//! - `modes` - `Mode` and the per-mode transition functions

mod modes;


pub use modes::Mode;

use crate::config::ScanConfig;
use crate::diagnostics::Diagnostic;
use crate::position::Position;
use crate::report::Report;
use modes::BraceOp;

/// Single-pass brace-balance scanner over a source text.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    config: &'a ScanConfig,
    position: Position,
    mode: Mode,
    /// Positions of currently unmatched `{`, oldest first
    stack: Vec<Position>,
    extra_closes: Vec<Position>,
    consumed: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, config: &'a ScanConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            config,
            position: Position::START,
            mode: Mode::Code,
            stack: Vec::new(),
            extra_closes: Vec::new(),
            consumed: 0,
        }
    }

    /// Scan the whole source and produce the report.
    pub fn run(mut self) -> Report {
        while let Some(current) = self.peek() {
            let next = self.peek_next();
            let transition = self.mode.step(current, next, self.config);

            match transition.brace {
                Some(BraceOp::Push) => self.stack.push(self.position),
                Some(BraceOp::Pop) => {
                    if self.stack.pop().is_none() {
                        tracing::trace!(at = %self.position, "extra closing brace");
                        self.extra_closes.push(self.position);
                    }
                }
                None => {}
            }

            if transition.next != self.mode {
                tracing::trace!(from = ?self.mode, to = ?transition.next, at = %self.position, "mode change");
                self.mode = transition.next;
            }

            for _ in 0..transition.width {
                if self.advance().is_none() {
                    break;
                }
            }
        }

        if !self.mode.is_code() {
            tracing::debug!(mode = ?self.mode, at = %self.position, "input ended inside a comment or literal");
        }
        tracing::debug!(
            chars = self.consumed,
            extra_closes = self.extra_closes.len(),
            unclosed_opens = self.stack.len(),
            "scan finished"
        );

        Report::new(self.extra_closes, self.stack)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        self.position = self.position.advance(c);
        self.consumed += 1;
        Some(c)
    }
}

/// Scan `source` with the given lexical rules.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan_with(source: &str, config: &ScanConfig) -> Report {
    Scanner::new(source, config).run()
}

/// Scan `source` with the default rules (`"`, `'`, `` ` `` literals, `\` escapes).
///
/// Returns every extra `}` in scan order, followed by every unclosed `{` from most recent to oldest.
pub fn scan(source: &str) -> Vec<Diagnostic> {
    scan_with(source, &ScanConfig::default()).into_diagnostics()
}
