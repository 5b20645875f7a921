use contracts::domain::search::{QuickSearchData, SearchHit};
use contracts::shared::graphql::{QueryResult, QUICK_SEARCH_QUERY};
use serde_json::json;

use crate::shared::api;

/// Run one quick search round trip
///
/// Hits come back in server ranking order and are rendered as-is.
pub async fn fetch_hits(text: &str) -> QueryResult<Vec<SearchHit>> {
    let data: QuickSearchData = api::execute(QUICK_SEARCH_QUERY, json!({ "text": text })).await?;
    Ok(data.quick_search)
}
