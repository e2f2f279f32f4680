//! Report rendering
//!
//! Two presentations of the same [`Report`]:
//!
//! - `text` - the canonical line format (`Extra } at line L col C`, `Unclosed { count: N`, `Open { at ...`)
//! - `fancy` - one `miette` diagnostic per brace with the source line and a label on the brace itself
//!
//! Both show every extra close and at most `limit` unclosed opens, most recent first. The unclosed count is
//! always the true total.

use std::sync::Arc;

use bracecheck_syntax::{Diagnostic, Position, Report};
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per mismatch
    #[default]
    Text,
    /// Source snippets with labelled braces
    Fancy,
}

/// Render the canonical text form. Empty when the report is balanced.
pub fn render_text(report: &Report, limit: usize) -> String {
    let mut out = String::new();
    for diagnostic in report.extra_closes() {
        out.push_str(&format!("{diagnostic}\n"));
    }
    if report.unclosed_count() > 0 {
        out.push_str(&unclosed_summary(report));
        for diagnostic in report.displayed_unclosed(limit) {
            out.push_str(&format!("{diagnostic}\n"));
        }
    }
    out
}

fn unclosed_summary(report: &Report) -> String {
    format!("Unclosed {{ count: {}\n", report.unclosed_count())
}

/// Braces further right than this are reported as plain lines instead of snippets. The graphical handler pads
/// up to the label's visual column, and padding wider than `u16::MAX` (a tab counts up to four) is out of range.
const MAX_SNIPPET_COLUMN: usize = 16_000;

/// A single brace mismatch with its source attached, for graphical rendering.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum BraceReport {
    #[error("extra closing brace at {position}")]
    #[diagnostic(
        code(bracecheck::extra_close),
        help("remove it, or add a matching opening brace before it")
    )]
    ExtraClose {
        position: Position,
        #[source_code]
        src: NamedSource<Arc<str>>,
        #[label("nothing left to close here")]
        span: SourceSpan,
    },

    #[error("unclosed opening brace at {position}")]
    #[diagnostic(
        code(bracecheck::unclosed_open),
        help("add a matching closing brace after the block")
    )]
    UnclosedOpen {
        position: Position,
        #[source_code]
        src: NamedSource<Arc<str>>,
        #[label("opened here, never closed")]
        span: SourceSpan,
    },
}

impl BraceReport {
    /// Attach `diagnostic` to a shared source, labelling `span`.
    pub fn new(src: NamedSource<Arc<str>>, span: SourceSpan, diagnostic: &Diagnostic) -> Self {
        let position = diagnostic.position();
        match diagnostic {
            Diagnostic::ExtraClose { .. } => BraceReport::ExtraClose { position, src, span },
            Diagnostic::UnclosedOpen { .. } => BraceReport::UnclosedOpen { position, src, span },
        }
    }
}

/// Span covering the single-byte brace at `offset`, or an empty span at end of input.
fn brace_span(offset: Option<usize>, source_len: usize) -> SourceSpan {
    match offset {
        Some(offset) => (offset, 1).into(),
        None => (source_len, 0).into(),
    }
}

/// Render the report graphically with `theme`. Empty when the report is balanced.
///
/// The source is shared by every rendered diagnostic and walked once to locate all braces.
pub fn render_fancy(
    name: &str,
    source: &str,
    report: &Report,
    limit: usize,
    theme: GraphicalTheme,
) -> Result<String, std::fmt::Error> {
    let handler = GraphicalReportHandler::new_themed(theme);
    let src = NamedSource::new(name, Arc::<str>::from(source));
    let mut out = String::new();

    let shown: Vec<&Diagnostic> = report
        .extra_closes()
        .iter()
        .chain(report.displayed_unclosed(limit))
        .collect();
    let positions: Vec<Position> = shown.iter().map(|d| d.position()).collect();
    let offsets = Position::byte_offsets_in(source, &positions);

    for (diagnostic, offset) in shown.into_iter().zip(offsets) {
        if diagnostic.position().column > MAX_SNIPPET_COLUMN {
            out.push_str(&format!("{name}: {diagnostic}\n"));
            continue;
        }
        let span = brace_span(offset, source.len());
        handler.render_report(&mut out, &BraceReport::new(src.clone(), span, diagnostic))?;
    }

    let displayed = report.displayed_unclosed(limit).len();
    if report.unclosed_count() > 0 {
        out.push_str(&unclosed_summary(report));
        if displayed < report.unclosed_count() {
            out.push_str(&format!("(showing the {displayed} most recent)\n"));
        }
    }
    Ok(out)
}
