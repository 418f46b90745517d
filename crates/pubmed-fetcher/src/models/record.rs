//! PubMed efetch XML model (`retmode=xml`).

use serde::Deserialize;

use super::paper::UNKNOWN_YEAR;

/// Root of an efetch response.
///
/// Only `PubmedArticle` children are read; book records and deletions are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticle>,
}

/// One fetched record.
#[derive(Debug, Clone, Deserialize)]
pub struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Pmid,

    #[serde(rename = "Article")]
    pub article: Article,
}

/// PMID element; the `Version` attribute is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Pmid {
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(rename = "Journal")]
    pub journal: Option<Journal>,

    #[serde(rename = "ArticleTitle")]
    pub article_title: String,

    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Journal {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PubDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    #[serde(rename = "ForeName")]
    pub fore_name: Option<String>,

    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<String>,
}

impl PubmedArticle {
    /// The record's PMID as text.
    #[must_use]
    pub fn pmid(&self) -> &str {
        self.medline_citation.pmid.value.trim()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.medline_citation.article.article_title
    }

    /// Authors in record order; empty when `AuthorList` is absent.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        self.medline_citation
            .article
            .author_list
            .as_ref()
            .map(|list| list.authors.as_slice())
            .unwrap_or_default()
    }

    /// `Journal/JournalIssue/PubDate/Year`, or `"Unknown"` when any level is missing.
    #[must_use]
    pub fn publication_year(&self) -> &str {
        self.medline_citation
            .article
            .journal
            .as_ref()
            .and_then(|j| j.journal_issue.as_ref())
            .and_then(|ji| ji.pub_date.as_ref())
            .and_then(|pd| pd.year.as_deref())
            .unwrap_or(UNKNOWN_YEAR)
    }
}

impl Author {
    /// `"{ForeName} {LastName}"` with surrounding whitespace trimmed.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.fore_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Text of the first `AffiliationInfo`; later entries are ignored.
    #[must_use]
    pub fn first_affiliation(&self) -> Option<&str> {
        self.affiliation_info.first()?.affiliation.as_deref()
    }
}
