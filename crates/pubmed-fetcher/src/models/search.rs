//! esearch JSON envelope (`retmode=json`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub esearchresult: SearchResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    /// Total hits reported by the service (may exceed `idlist.len()`).
    #[serde(default)]
    pub count: Option<String>,

    #[serde(default)]
    pub idlist: Vec<String>,

    /// Set when the service rejects the query.
    #[serde(rename = "ERROR", default)]
    pub error: Option<String>,
}
