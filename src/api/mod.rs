// src/api/mod.rs
//! Notion API interaction — the ability to read a blog database.
//!
//! Business logic depends on the [`NotionRepository`] trait, never on HTTP
//! details, so the orchestrator can be driven by an in-memory repository in
//! tests.

pub mod client;
mod pagination;
pub mod parser;
pub mod query;
mod responses;
mod types;

use crate::error::AppError;
use crate::model::{Block, Database, Page};
use crate::types::{BlockId, DataSourceId, DatabaseId};

pub use client::NotionHttpClient;
pub use pagination::fetch_all_pages;
pub use query::{
    query_ready_posts, resolve_data_source, DataSourceQuery, FilterCondition, QueryFilter,
    QueryOptions, QuerySort, SortDirection,
};
pub use types::{PaginatedResponse, PaginationResult};

/// The ability to read pages and their content from a Notion workspace.
///
/// Listing calls return one page of results at a time; callers drive the
/// cursor loop through [`fetch_all_pages`].
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Retrieves a database container, including its data source references.
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Database, AppError>;

    /// Runs one page of a filtered, sorted data source query.
    async fn query_data_source(
        &self,
        id: &DataSourceId,
        query: &DataSourceQuery,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError>;

    /// Lists one page of a block's (or page's) direct children.
    async fn list_block_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError>;
}
