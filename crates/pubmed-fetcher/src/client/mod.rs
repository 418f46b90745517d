//! NCBI E-utilities client.
//!
//! Two endpoints are used, one request each per run:
//! - `esearch.fcgi` (JSON) resolves a query to PMIDs
//! - `efetch.fcgi` (XML) returns full records for a comma-joined PMID batch
//!
//! No retries and no caching: a failed request fails the run.

mod xml;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::{Config, api};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{PubmedArticle, SearchResponse};

pub use xml::parse_article_set;

/// The two literature-database calls the pipeline depends on.
#[async_trait]
pub trait LiteratureService: Send + Sync {
    /// Resolve a query to at most `max_results` identifiers, in service order.
    async fn search(&self, query: &str, max_results: usize) -> ServiceResult<Vec<String>>;

    /// Fetch full records for a batch of identifiers in one request.
    async fn fetch(&self, ids: &[String]) -> ServiceResult<Vec<PubmedArticle>>;
}

/// E-utilities API client.
#[derive(Clone)]
pub struct EntrezClient {
    /// HTTP client.
    client: Client,

    /// esearch endpoint.
    esearch_url: String,

    /// efetch endpoint.
    efetch_url: String,

    /// Tool name reported to NCBI.
    tool: String,

    /// Contact email reported to NCBI.
    email: Option<String>,

    /// API key (optional).
    api_key: Option<String>,
}

impl EntrezClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            esearch_url: config.esearch_url,
            efetch_url: config.efetch_url,
            tool: config.tool,
            email: config.email,
            api_key: config.api_key,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed and return PMIDs.
    ///
    /// An empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, a malformed
    /// reply, or a query the service rejects.
    #[instrument(skip(self))]
    pub async fn esearch(&self, query: &str, max_results: usize) -> ServiceResult<Vec<String>> {
        let mut params = self.identity_params();
        params.push(("db", api::DATABASE.to_string()));
        params.push(("term", query.to_string()));
        params.push(("retmax", max_results.to_string()));
        params.push(("retmode", "json".to_string()));

        let response = self.client.get(&self.esearch_url).query(&params).send().await?;
        let body = Self::handle_response(response).await?.text().await?;

        let result = serde_json::from_str::<SearchResponse>(&body)?.esearchresult;
        if let Some(message) = result.error {
            return Err(ServiceError::Service(message));
        }

        debug!(count = ?result.count, returned = result.idlist.len(), "esearch returned PMIDs");
        Ok(result.idlist)
    }

    /// Fetch PubMed XML for a batch of PMIDs.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a record
    /// missing its `MedlineCitation`/`Article` containers.
    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    pub async fn efetch(&self, ids: &[String]) -> ServiceResult<Vec<PubmedArticle>> {
        let mut params = self.identity_params();
        params.push(("db", api::DATABASE.to_string()));
        params.push(("id", ids.join(",")));
        params.push(("retmode", "xml".to_string()));

        let response = self.client.get(&self.efetch_url).query(&params).send().await?;
        let body = Self::handle_response(response).await?.text().await?;

        let set = parse_article_set(&body)?;
        debug!(records = set.articles.len(), "efetch returned records");
        Ok(set.articles)
    }

    /// `tool`, `email` and `api_key` parameters sent with every request.
    fn identity_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("tool", self.tool.clone())];
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Map non-success statuses to errors.
    async fn handle_response(response: reqwest::Response) -> ServiceResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(1);

            return Err(ServiceError::rate_limited(retry_after));
        }

        let text = response.text().await.unwrap_or_default();
        Err(ServiceError::status(status.as_u16(), summarize_body(&text)))
    }
}

/// Longest error body kept, in characters.
const MAX_BODY_CHARS: usize = 200;

/// Collapse an error body onto one line and cap its length.
fn summarize_body(body: &str) -> String {
    let line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match line.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line,
    }
}

#[async_trait]
impl LiteratureService for EntrezClient {
    async fn search(&self, query: &str, max_results: usize) -> ServiceResult<Vec<String>> {
        self.esearch(query, max_results).await
    }

    async fn fetch(&self, ids: &[String]) -> ServiceResult<Vec<PubmedArticle>> {
        self.efetch(ids).await
    }
}

impl std::fmt::Debug for EntrezClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrezClient")
            .field("esearch_url", &self.esearch_url)
            .field("efetch_url", &self.efetch_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
