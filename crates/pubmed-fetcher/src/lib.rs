//! PubMed industry-affiliation fetcher
//!
//! Searches PubMed through the NCBI E-utilities API, fetches full records for
//! the matching PMIDs, and keeps only the papers with at least one author
//! whose affiliation names a pharmaceutical or biotech company.
//!
//! # Pipeline
//!
//! - **Search**: one `esearch` request returning PMIDs in service order
//! - **Fetch and filter**: one batched `efetch` request, then a keyword scan
//!   over each author's first affiliation
//! - **Export**: CSV file or console listing
//!
//! # Example
//!
//! ```no_run
//! use pubmed_fetcher::{AffiliationFilter, Config, EntrezClient, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let filter = AffiliationFilter::new(&config.keywords);
//!     let client = EntrezClient::new(config.clone())?;
//!
//!     let ids = pipeline::search(&client, "crispr cancer", config.max_results).await?;
//!     let papers = pipeline::fetch_and_filter(&client, &filter, &ids).await?;
//!     pubmed_fetcher::export::export_to_csv(&papers, "results.csv")?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatters;
pub mod models;
pub mod pipeline;

pub use client::{EntrezClient, LiteratureService};
pub use config::Config;
pub use error::{Error, FileSystemError, Result, ServiceError};
pub use filter::AffiliationFilter;
pub use models::FilteredPaper;
