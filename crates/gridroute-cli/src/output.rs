//! Output formatting for route rendering.
//!
//! This module selects between the formatters the library offers and writes
//! the result to any [`Write`] sink (stdout in the binary, buffers in tests).

use std::io::{self, Write};

use clap::ValueEnum;

use gridroute_lib::{RouteRenderMode, RouteSummary};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `row col` per line, terminated by a `.` line.
    #[default]
    Basic,
    /// Human-readable listing with per-step costs.
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

/// Render a route summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Basic => out.write_all(summary.render(RouteRenderMode::Basic).as_bytes()),
        OutputFormat::Text => out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes()),
        OutputFormat::Json => render_json(out, summary),
    }
}

/// Render a route summary as JSON.
pub fn render_json<W: Write>(out: &mut W, summary: &RouteSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
