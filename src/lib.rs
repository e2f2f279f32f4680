#![forbid(unsafe_code)]
//! bracecheck: a lexically-aware brace-balance checker
//!
//! Reports every unmatched `{` and `}` in a curly-brace source file with its line and column, ignoring braces
//! inside comments and string/template literals. The scanning core lives in `bracecheck_syntax`; this crate adds
//! the command-line tool around it: reading input, rendering reports, and exit codes.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod render;

pub use bracecheck_syntax::{
    DEFAULT_DISPLAY_LIMIT, Diagnostic, DiagnosticKind, Position, Report, ScanConfig, scan, scan_with,
};
pub use render::{OutputFormat, render_fancy, render_text};
