//! CLI module for bracecheck
//!
//! This module provides the command-line interface around the scanner.
//!
//! ## Usage
//!
//! - `bracecheck <FILE>` - Check a file (`-` reads standard input)
//! - `bracecheck -c <CODE>` - Check inline source
//!
//! ## Modules
//!
//! - `commands` - Reading input and running a check
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use bracecheck_syntax::{DEFAULT_DISPLAY_LIMIT, ScanConfig};
use clap::Parser;

use crate::render::OutputFormat;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The input was read and scanned, and has at least one brace mismatch
    pub const UNBALANCED: ExitCode = ExitCode(1);
    /// The input could not be obtained or the arguments were unusable
    pub const FAILURE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 2).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Report unmatched braces, ignoring braces in comments and string literals
#[derive(Parser, Debug)]
#[command(name = "bracecheck")]
#[command(version = VERSION)]
#[command(about = "Report unmatched braces, ignoring comments and string literals", long_about = None)]
pub struct Cli {
    /// Source file to check (`-` for standard input)
    #[arg(value_name = "FILE", required_unless_present = "command")]
    pub file: Option<PathBuf>,

    /// Check inline source code instead of a file
    #[arg(short = 'c', long = "command", value_name = "CODE", conflicts_with = "file")]
    pub command: Option<String>,

    /// Number of unclosed opening braces to display (most recent first)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub limit: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Characters that open and close string literals
    #[arg(long, value_name = "CHARS")]
    pub quotes: Option<String>,

    /// Escape marker inside string literals
    #[arg(long, value_name = "CHAR")]
    pub escape: Option<char>,
}

impl Cli {
    /// Lexical rules from `--quotes` / `--escape`, falling back to the defaults.
    pub fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new();
        if let Some(quotes) = &self.quotes {
            config = config.with_quotes(quotes.chars());
        }
        if let Some(escape) = self.escape {
            config = config.with_escape(escape);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.scan_config();
    let options = commands::CheckOptions {
        config,
        format: cli.format,
        limit: cli.limit,
    };

    if let Some(code) = cli.command {
        return commands::check_source("<command>", &code, &options);
    }

    match cli.file {
        Some(file) => commands::check_file(&file, &options),
        None => Err(CliError::failure("Error: bracecheck requires a FILE or -c \"code\"")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["bracecheck", "app.tsx"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("app.tsx")));
        assert_eq!(cli.limit, DEFAULT_DISPLAY_LIMIT);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_command() {
        let cli = Cli::try_parse_from(["bracecheck", "-c", "{ }"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("{ }"));
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_requires_file_or_command() {
        assert!(Cli::try_parse_from(["bracecheck"]).is_err());
    }

    #[test]
    fn test_cli_file_conflicts_with_command() {
        assert!(Cli::try_parse_from(["bracecheck", "a.ts", "-c", "{"]).is_err());
    }

    #[test]
    fn test_cli_parse_options() {
        let cli = Cli::try_parse_from([
            "bracecheck",
            "--limit",
            "3",
            "--format",
            "fancy",
            "--quotes",
            "\"'",
            "--escape",
            "^",
            "-",
        ])
        .unwrap();
        assert_eq!(cli.limit, 3);
        assert_eq!(cli.format, OutputFormat::Fancy);
        assert_eq!(cli.file, Some(PathBuf::from("-")));

        let config = cli.scan_config();
        assert_eq!(config.quotes, vec!['"', '\'']);
        assert_eq!(config.escape, '^');
    }

    #[test]
    fn test_scan_config_defaults() {
        let cli = Cli::try_parse_from(["bracecheck", "x.js"]).unwrap();
        assert_eq!(cli.scan_config(), ScanConfig::default());
    }

    #[test]
    fn test_execute_inline_exit_codes() {
        let cli = Cli::try_parse_from(["bracecheck", "-c", "// {\n"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_execute_missing_file_is_failure() {
        let cli = Cli::try_parse_from(["bracecheck", "/definitely/not/here.tsx"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("/definitely/not/here.tsx"));
    }
}
