// tests/common/mod.rs
//! Shared fixtures for integration tests: an in-memory Notion workspace and
//! builders for pages, blocks and configurations.

#![allow(dead_code)]

use notion2hugo::{
    ApiKey, AppError, Block, BlockId, BlockKind, DataSourceId, DataSourceQuery, DataSourceRef,
    Database, DatabaseId, Page, PageId, PaginatedResponse, PropertyNames, PropertyValue,
    QueryOptions, RichTextItem, SyncConfig, TextBlockContent,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

pub const DATABASE_ID: &str = "1b2c3d4e5f604718293a4b5c6d7e8f90";
pub const DATA_SOURCE_ID: &str = "2a3b4c5d6e7f48091a2b3c4d5e6f7a8b";

type ListingKey = (String, Option<String>);

/// A Notion workspace held in memory.
///
/// Every listing call is recorded so tests can assert on request order.
#[derive(Default)]
pub struct InMemoryNotion {
    databases: HashMap<String, Database>,
    queries: HashMap<ListingKey, PaginatedResponse<Page>>,
    children: HashMap<ListingKey, PaginatedResponse<Block>>,
    broken_parents: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryNotion {
    /// A workspace whose blog database is backed by a single data source.
    pub fn with_blog_database() -> Self {
        Self::default().with_database(
            DATABASE_ID,
            vec![DataSourceRef {
                id: DataSourceId::from(DATA_SOURCE_ID),
                name: Some("Posts".to_string()),
            }],
        )
    }

    pub fn with_database(mut self, id: &str, data_sources: Vec<DataSourceRef>) -> Self {
        self.databases.insert(
            id.to_string(),
            Database {
                id: DatabaseId::from(id),
                data_sources,
            },
        );
        self
    }

    /// Serves `pages` as the single page of query results.
    pub fn with_ready_pages(self, pages: Vec<Page>) -> Self {
        self.with_query_page(None, PaginatedResponse::complete(pages))
    }

    pub fn with_query_page(
        mut self,
        cursor: Option<&str>,
        response: PaginatedResponse<Page>,
    ) -> Self {
        self.queries.insert(
            (DATA_SOURCE_ID.to_string(), cursor.map(str::to_string)),
            response,
        );
        self
    }

    /// Serves `blocks` as the complete child listing of `parent`.
    pub fn with_children(self, parent: &str, blocks: Vec<Block>) -> Self {
        self.with_children_page(parent, None, PaginatedResponse::complete(blocks))
    }

    pub fn with_children_page(
        mut self,
        parent: &str,
        cursor: Option<&str>,
        response: PaginatedResponse<Block>,
    ) -> Self {
        self.children.insert(
            (parent.to_string(), cursor.map(str::to_string)),
            response,
        );
        self
    }

    /// Makes every child listing of `parent` fail.
    pub fn with_broken_parent(mut self, parent: &str) -> Self {
        self.broken_parents.insert(parent.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl notion2hugo::NotionRepository for InMemoryNotion {
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Database, AppError> {
        self.record(format!("database {}", id));
        self.databases.get(id.as_str()).cloned().ok_or_else(|| {
            AppError::MalformedResponse(format!("unknown database {}", id))
        })
    }

    async fn query_data_source(
        &self,
        id: &DataSourceId,
        _query: &DataSourceQuery,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        self.record(format!("query {} {:?}", id, cursor));
        Ok(self
            .queries
            .get(&(id.as_str().to_string(), cursor))
            .cloned()
            .unwrap_or_else(|| PaginatedResponse::complete(Vec::new())))
    }

    async fn list_block_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        self.record(format!("children {} {:?}", parent, cursor));
        if self.broken_parents.contains(parent.as_str()) {
            return Err(AppError::MalformedResponse(format!(
                "cannot list children of {}",
                parent
            )));
        }
        Ok(self
            .children
            .get(&(parent.as_str().to_string(), cursor))
            .cloned()
            .unwrap_or_else(|| PaginatedResponse::complete(Vec::new())))
    }
}

/// A ready post page with the usual blog columns filled in.
pub fn post_page(id: &str, title: &str, date: &str, tags: &[&str]) -> Page {
    Page::new(PageId::from(id))
        .with_property("Status", PropertyValue::select("ready"))
        .with_property("Channels", PropertyValue::multi_select(&["GH"]))
        .with_property("Title", PropertyValue::title(title))
        .with_property("Date", PropertyValue::date(date))
        .with_property("Tags", PropertyValue::multi_select(tags))
}

pub fn paragraph(id: &str, text: &str) -> Block {
    Block::new(
        BlockId::from(id),
        BlockKind::Paragraph(TextBlockContent::new(vec![RichTextItem::plain_text(text)])),
    )
}

pub fn config(content_dir: &Path) -> SyncConfig {
    SyncConfig {
        database_id: DatabaseId::parse(DATABASE_ID).unwrap(),
        api_key: ApiKey::new("secret_test_token").unwrap(),
        content_dir: content_dir.to_path_buf(),
        author: None,
        dry_run: false,
        keep_going: false,
        query: QueryOptions::default(),
        properties: PropertyNames::default(),
    }
}
