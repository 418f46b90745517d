//! Error types for the PubMed fetcher.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the E-utilities service layer.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by NCBI (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Non-success HTTP status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The service rejected the request (esearch `ERROR` field)
    #[error("Service rejected request: {0}")]
    Service(String),

    /// JSON parsing error (esearch)
    #[error("Failed to parse search response: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing error or missing record container (efetch)
    #[error("Failed to parse fetch response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl ServiceError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Get the HTTP status code, if the error came from one.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from writing exported results.
#[derive(thiserror::Error, Debug)]
pub enum FileSystemError {
    /// Output path could not be created or written
    #[error("Cannot write {}: {source}", path.display())]
    Io {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CSV serialization failed while writing
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl FileSystemError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Top-level error for a fetcher run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network or service failure
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Output could not be written
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// Console rendering failed
    #[error("Failed to render results: {0}")]
    Render(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, FileSystemError>;

/// Result type alias for the whole pipeline.
pub type Result<T, E = Error> = std::result::Result<T, E>;
