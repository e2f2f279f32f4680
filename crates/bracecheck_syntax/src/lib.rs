//! Lexically-aware brace-balance scanning for curly-brace languages.
//!
//! The scanner walks a source text once, left to right, and reports every `{` that is never closed and every `}`
//! that has nothing to close. Braces inside `//` line comments, `/* */` block comments and quoted literals
//! (`"..."`, `'...'`, `` `...` ``) are ignored.
//!
//! ## Notes
//! - This crate is intentionally "lexical-only": it knows about comments, literals and braces, nothing else.
//! - Scanning is total. Every input, including unterminated comments and literals, yields a [`Report`].
//! - Template literals are opaque: braces inside `${ ... }` interpolations are invisible to the balance check.
//!
//! ## Examples
//! ```rust
//! use bracecheck_syntax::{Diagnostic, Position, scan};
//!
//! let diagnostics = scan("fn main() {\n    // }\n");
//! assert_eq!(diagnostics, vec![Diagnostic::UnclosedOpen { position: Position::new(1, 11) }]);
//! ```
//!
//! ## Module Structure
//!
//! - `position` - line/column cursor and the newline rule
//! - `config` - quote delimiters and escape marker
//! - `diagnostics` - the two kinds of brace mismatch
//! - `report` - ordered scan output and the display truncation policy
//! - `scanner` - the mode machine driving it all

pub mod config;
pub mod diagnostics;
pub mod position;
pub mod report;
pub mod scanner;

pub use config::ScanConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use position::Position;
pub use report::{DEFAULT_DISPLAY_LIMIT, Report};
pub use scanner::{Mode, Scanner, scan, scan_with};
