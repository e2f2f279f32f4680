//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bracecheck_syntax::{DEFAULT_DISPLAY_LIMIT, ScanConfig, scan_with};
use miette::GraphicalTheme;
use thiserror::Error;

use crate::render::{self, OutputFormat};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Larger inputs are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Path that stands for standard input.
const STDIN_PATH: &str = "-";

/// Errors obtaining the source text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Cannot access file '{}': {source}", .path.display())]
    Access { path: PathBuf, source: io::Error },

    #[error("Source file '{}' is too large ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Error reading file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error reading standard input: {0}")]
    Stdin(#[source] io::Error),
}

impl From<ReadError> for CliError {
    fn from(e: ReadError) -> Self {
        CliError::failure(e.to_string())
    }
}

/// How a check is performed and shown.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub config: ScanConfig,
    pub format: OutputFormat,
    /// Unclosed opens to display
    pub limit: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
            format: OutputFormat::Text,
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read source file contents, or standard input for `-`.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read (I/O error, invalid UTF-8)
/// - The input exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    if is_stdin(path) {
        return read_stdin();
    }

    // Check file size before reading
    let metadata = fs::metadata(path).map_err(|source| ReadError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(|source| ReadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, ReadError> {
    let mut source = String::new();
    io::stdin()
        .take(MAX_SOURCE_SIZE + 1)
        .read_to_string(&mut source)
        .map_err(ReadError::Stdin)?;

    let size = source.len() as u64;
    if size > MAX_SOURCE_SIZE {
        return Err(ReadError::TooLarge {
            path: PathBuf::from(STDIN_PATH),
            size,
            max: MAX_SOURCE_SIZE,
        });
    }
    Ok(source)
}

/// Check a file (or standard input) and print its report.
pub fn check_file(path: &Path, options: &CheckOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let name = if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.to_string_lossy().to_string()
    };
    check_source(&name, &source, options)
}

/// Check in-memory source and print its report.
///
/// Text reports go to stdout, fancy reports to stderr. Returns `UNBALANCED` when any brace mismatch was found.
pub fn check_source(name: &str, source: &str, options: &CheckOptions) -> CliResult<ExitCode> {
    let report = scan_with(source, &options.config);
    tracing::info!(
        file = name,
        extra_closes = report.extra_closes().len(),
        unclosed_opens = report.unclosed_count(),
        "checked"
    );

    match options.format {
        OutputFormat::Text => print!("{}", render::render_text(&report, options.limit)),
        OutputFormat::Fancy => {
            let rendered = render::render_fancy(name, source, &report, options.limit, GraphicalTheme::default())
                .map_err(|e| CliError::failure(format!("Error rendering report: {}", e)))?;
            eprint!("{}", rendered);
        }
    }

    Ok(if report.is_balanced() {
        ExitCode::SUCCESS
    } else {
        ExitCode::UNBALANCED
    })
}
