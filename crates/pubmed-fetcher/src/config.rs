//! Configuration for the PubMed fetcher.

use std::time::Duration;

use crate::error::{Error, Result};

/// E-utilities configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for NCBI E-utilities.
    pub const EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Database queried by both endpoints.
    pub const DATABASE: &str = "pubmed";

    /// Tool name reported to NCBI.
    pub const TOOL: &str = "pubmed-fetcher";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default number of PMIDs requested from esearch.
    pub const DEFAULT_MAX_RESULTS: usize = 100;
}

/// Affiliation substrings that mark an author as non-academic.
///
/// Matched case-insensitively against the author's first affiliation.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "pfizer",
    "novartis",
    "roche",
    "merck",
    "gsk",
    "astrazeneca",
    "bayer",
    "sanofi",
    "inc",
    "ltd",
    "pharma",
    "biotech",
    "biogen",
    "amgen",
    "eli lilly",
];

/// Fetcher configuration.
///
/// Built once at startup and handed to the client and filter; nothing reads
/// credentials from process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email sent with every E-utilities request (optional).
    pub email: Option<String>,

    /// NCBI API key (optional, raises the rate limit).
    pub api_key: Option<String>,

    /// Tool name sent with every request.
    pub tool: String,

    /// esearch endpoint.
    pub esearch_url: String,

    /// efetch endpoint.
    pub efetch_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum PMIDs requested per search.
    pub max_results: usize,

    /// Lower-cased affiliation keywords.
    pub keywords: Vec<String>,
}

impl Config {
    /// Create a new configuration against the public E-utilities endpoints.
    #[must_use]
    pub fn new(email: Option<String>, api_key: Option<String>) -> Self {
        Self {
            email,
            api_key,
            tool: api::TOOL.to_string(),
            esearch_url: format!("{}/esearch.fcgi", api::EUTILS_URL),
            efetch_url: format!("{}/efetch.fcgi", api::EUTILS_URL),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_results: api::DEFAULT_MAX_RESULTS,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            email: Some("test@example.org".to_string()),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(None, None).with_eutils_url(base_url)
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `NCBI_EMAIL`, `NCBI_API_KEY`, `NCBI_EUTILS_URL` and
    /// `PUBMED_FETCHER_KEYWORDS` (comma-separated).
    pub fn from_env() -> Result<Self> {
        let email = std::env::var("NCBI_EMAIL").ok().filter(|v| !v.is_empty());
        let api_key = std::env::var("NCBI_API_KEY").ok().filter(|v| !v.is_empty());

        let mut config = Self::new(email, api_key);

        if let Ok(url) = std::env::var("NCBI_EUTILS_URL") {
            config = config.with_eutils_url(&url);
        }

        if let Ok(raw) = std::env::var("PUBMED_FETCHER_KEYWORDS") {
            config = config.with_keywords(raw.split(','))?;
        }

        Ok(config)
    }

    /// Point both endpoints at another E-utilities base URL.
    #[must_use]
    pub fn with_eutils_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.esearch_url = format!("{base}/esearch.fcgi");
        self.efetch_url = format!("{base}/efetch.fcgi");
        self
    }

    /// Replace the keyword set.
    ///
    /// Keywords are trimmed and lower-cased; blanks are dropped. An override
    /// that leaves no keywords is rejected.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(Error::config("keyword list cannot be empty"));
        }

        self.keywords = keywords;
        Ok(self)
    }

    /// Set the maximum number of PMIDs requested per search.
    pub fn with_max_results(mut self, max_results: usize) -> Result<Self> {
        if max_results == 0 {
            return Err(Error::config("max results must be at least 1"));
        }
        self.max_results = max_results;
        Ok(self)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
