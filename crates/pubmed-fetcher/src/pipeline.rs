//! Search, then fetch-and-filter.

use tracing::{debug, info};

use crate::client::LiteratureService;
use crate::error::ServiceResult;
use crate::filter::AffiliationFilter;
use crate::models::FilteredPaper;

/// Resolve `query` to at most `max_results` PMIDs.
pub async fn search<S>(service: &S, query: &str, max_results: usize) -> ServiceResult<Vec<String>>
where
    S: LiteratureService + ?Sized,
{
    let ids = service.search(query, max_results).await?;
    info!(query, found = ids.len(), "search complete");
    Ok(ids)
}

/// Fetch all `ids` in one batch and keep papers with a non-academic author.
///
/// An empty `ids` slice returns an empty result without touching the service.
pub async fn fetch_and_filter<S>(
    service: &S,
    filter: &AffiliationFilter,
    ids: &[String],
) -> ServiceResult<Vec<FilteredPaper>>
where
    S: LiteratureService + ?Sized,
{
    if ids.is_empty() {
        debug!("no identifiers, skipping fetch");
        return Ok(Vec::new());
    }

    let records = service.fetch(ids).await?;
    Ok(filter.filter_records(&records))
}
