// src/api/pagination.rs
//! Cursor pagination over Notion list endpoints.

use super::types::{PaginatedResponse, PaginationResult};
use crate::error::AppError;

/// Fetches every page of a cursor-paginated listing, in order.
///
/// `fetch_fn` receives the continuation cursor (`None` for the first call)
/// and returns one page. The loop stops when the API reports no more
/// results or stops handing out cursors.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(cursor).await?;
        pages_fetched += 1;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }
        log::debug!("Fetching next page of results (page {})", pages_fetched + 1);
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}
