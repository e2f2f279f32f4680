//! Brace-balance diagnostics
//!
//! The scanner only ever reports two things: a `}` with nothing to close, and a `{` that is still open when the
//! input runs out. Unterminated comments and literals are not diagnostics.

use std::fmt;

use crate::position::Position;

/// A single brace mismatch with its source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A `}` in code with an empty brace stack
    ExtraClose { position: Position },
    /// A `{` still on the brace stack at end of input
    UnclosedOpen { position: Position },
}

impl Diagnostic {
    pub fn position(&self) -> Position {
        match self {
            Diagnostic::ExtraClose { position } | Diagnostic::UnclosedOpen { position } => *position,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::ExtraClose { .. } => DiagnosticKind::ExtraClose,
            Diagnostic::UnclosedOpen { .. } => DiagnosticKind::UnclosedOpen,
        }
    }
}

/// Canonical one-line form, e.g. `Extra } at line 3 col 1`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ExtraClose { position } => write!(f, "Extra }} at {position}"),
            Diagnostic::UnclosedOpen { position } => write!(f, "Open {{ at {position}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    ExtraClose,
    UnclosedOpen,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::ExtraClose => write!(f, "extra closing brace"),
            DiagnosticKind::UnclosedOpen => write!(f, "unclosed opening brace"),
        }
    }
}
