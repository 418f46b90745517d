//! Plain-text listing.

use crate::models::FilteredPaper;

/// One paper per line, using each paper's `Display` form.
#[must_use]
pub fn format_papers_text(papers: &[FilteredPaper]) -> String {
    papers.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
