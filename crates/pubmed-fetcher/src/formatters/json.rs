//! JSON listing.

use crate::models::FilteredPaper;

/// Pretty-printed JSON array; object keys are the CSV column names.
pub fn format_papers_json(papers: &[FilteredPaper]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(papers)
}
