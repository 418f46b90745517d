//! Console output formatting.

mod json;
mod text;

pub use json::format_papers_json;
pub use text::format_papers_text;

use crate::models::FilteredPaper;

/// Console rendering of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ConsoleFormat {
    /// One mapping per line, column name to value
    #[default]
    Text,
    /// A JSON array keyed by column name
    Json,
}

/// Render `papers` in `format`.
pub fn render(papers: &[FilteredPaper], format: ConsoleFormat) -> serde_json::Result<String> {
    match format {
        ConsoleFormat::Text => Ok(format_papers_text(papers)),
        ConsoleFormat::Json => format_papers_json(papers),
    }
}
