//! Exported result row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Year written when a record has no `PubDate/Year`.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Corresponding-author email column value; no extraction is performed.
pub const EMAIL_PLACEHOLDER: &str = "N/A";

/// Column headers, in output order.
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// A paper with at least one author at a non-academic organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredPaper {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// Publication year, or `"Unknown"`.
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Qualifying author names joined with `"; "`.
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Distinct company names joined with `"; "`, in no particular order.
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl FilteredPaper {
    /// Field values in column order.
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }
}

/// Renders as a mapping of column name to value, e.g.
/// `{'PubmedID': '1', 'Title': 'A study', ...}`.
impl fmt::Display for FilteredPaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (column, value)) in COLUMNS.iter().zip(self.values()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{column}': '{}'", value.replace('\'', "\\'"))?;
        }
        f.write_str("}")
    }
}
