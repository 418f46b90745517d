//! Data models for E-utilities payloads and exported results.
//!
//! Wire models use `#[serde(rename = "...")]` to match the PubMed element
//! names; every level below `MedlineCitation/Article` is optional.

mod paper;
mod record;
mod search;

pub use paper::{COLUMNS, EMAIL_PLACEHOLDER, FilteredPaper, UNKNOWN_YEAR};
pub use record::{
    AffiliationInfo, Article, Author, AuthorList, Journal, JournalIssue, MedlineCitation, Pmid,
    PubDate, PubmedArticle, PubmedArticleSet,
};
pub use search::{SearchResponse, SearchResult};
