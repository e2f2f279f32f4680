//! Scan output.
//!
//! A [`Report`] keeps the full diagnostic sequence in its canonical order: every extra close in scan order, then
//! every unclosed open from most recently pushed to least. Truncation to the most recent opens is a display
//! concern and never drops data from the report itself.

use crate::diagnostics::Diagnostic;
use crate::position::Position;

/// How many unclosed opens a renderer shows by default.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Ordered diagnostics produced by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    /// Number of leading `ExtraClose` entries
    extra_count: usize,
}

impl Report {
    /// Assemble a report from the scan's extra closes (scan order) and its remaining brace stack
    /// (push order, as left on the stack).
    pub fn new(extra_closes: Vec<Position>, open_stack: Vec<Position>) -> Self {
        let extra_count = extra_closes.len();
        let mut diagnostics = Vec::with_capacity(extra_count + open_stack.len());
        diagnostics.extend(
            extra_closes
                .into_iter()
                .map(|position| Diagnostic::ExtraClose { position }),
        );
        diagnostics.extend(
            open_stack
                .into_iter()
                .rev()
                .map(|position| Diagnostic::UnclosedOpen { position }),
        );
        Self {
            diagnostics,
            extra_count,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn extra_closes(&self) -> &[Diagnostic] {
        &self.diagnostics[..self.extra_count]
    }

    /// All unclosed opens, most recently pushed first.
    pub fn unclosed_opens(&self) -> &[Diagnostic] {
        &self.diagnostics[self.extra_count..]
    }

    pub fn unclosed_count(&self) -> usize {
        self.diagnostics.len() - self.extra_count
    }

    /// The `limit` most recent unclosed opens, most recent first.
    pub fn displayed_unclosed(&self, limit: usize) -> &[Diagnostic] {
        let unclosed = self.unclosed_opens();
        &unclosed[..limit.min(unclosed.len())]
    }

    pub fn is_balanced(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
