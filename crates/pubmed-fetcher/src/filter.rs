//! Affiliation keyword filter.
//!
//! An author qualifies when the text of their first affiliation contains any
//! configured keyword, compared case-insensitively. The company name recorded
//! for a qualifying author is the affiliation text before its first comma.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::DEFAULT_KEYWORDS;
use crate::models::{Author, EMAIL_PLACEHOLDER, FilteredPaper, PubmedArticle};

/// Separator for multi-valued output columns.
pub const JOIN_SEPARATOR: &str = "; ";

/// Keyword-membership filter over author affiliations.
#[derive(Debug, Clone)]
pub struct AffiliationFilter {
    keywords: Vec<String>,
}

impl AffiliationFilter {
    /// Build a filter from a keyword list.
    ///
    /// Keywords are trimmed and lower-cased; blank entries are dropped, so an
    /// all-blank list matches nothing.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when `affiliation` contains any keyword, ignoring case.
    #[must_use]
    pub fn is_commercial(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// The author's first affiliation when it marks them as non-academic.
    #[must_use]
    pub fn commercial_affiliation<'a>(&self, author: &'a Author) -> Option<&'a str> {
        author.first_affiliation().filter(|a| !a.is_empty() && self.is_commercial(a))
    }

    /// Reshape one record, or `None` when no author qualifies.
    ///
    /// Records without authors never produce a row.
    #[must_use]
    pub fn filter_record(&self, article: &PubmedArticle) -> Option<FilteredPaper> {
        let authors = article.authors();
        if authors.is_empty() {
            return None;
        }

        let mut names = Vec::new();
        let mut companies = HashSet::new();

        for author in authors {
            if let Some(affiliation) = self.commercial_affiliation(author) {
                let name = author.display_name();
                debug!(pmid = article.pmid(), author = %name, affiliation, "non-academic author");
                names.push(name);
                companies.insert(company_name(affiliation));
            }
        }

        if names.is_empty() {
            return None;
        }

        Some(FilteredPaper {
            pubmed_id: article.pmid().to_string(),
            title: article.title().to_string(),
            publication_date: article.publication_year().to_string(),
            non_academic_authors: names.join(JOIN_SEPARATOR),
            company_affiliations: companies.into_iter().collect::<Vec<_>>().join(JOIN_SEPARATOR),
            corresponding_author_email: EMAIL_PLACEHOLDER.to_string(),
        })
    }

    /// Reshape every qualifying record, preserving record order.
    #[must_use]
    pub fn filter_records(&self, articles: &[PubmedArticle]) -> Vec<FilteredPaper> {
        let papers: Vec<FilteredPaper> =
            articles.iter().filter_map(|a| self.filter_record(a)).collect();

        info!(records = articles.len(), kept = papers.len(), "filtered records");
        papers
    }
}

impl Default for AffiliationFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// Text before the first comma, trimmed.
#[must_use]
pub fn company_name(affiliation: &str) -> &str {
    affiliation.split(',').next().unwrap_or_default().trim()
}
