// src/lib.rs
//! notion2hugo library — publishes ready Notion database pages as Hugo posts.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `SyncConfig`
//! - **Domain model** — `Page`, `Block`, `PropertyValue`, `Post`
//! - **Domain types** — `PageId`, `BlockId`, `DatabaseId`, `ApiKey`, etc.
//! - **API client** — `NotionRepository`, `NotionHttpClient`, parsers
//! - **Formatting** — `render_block`, `rich_text_to_markdown`, frontmatter
//! - **Sync** — `run_sync`, `SyncReport`

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod formatting;
pub mod metadata;
pub mod model;
pub mod output;
pub mod sync;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SyncConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BlockKind, CodeContent, DataSourceRef, Database, ImageContent, Page,
    Post, PropertyValue, TextBlockContent, ToDoContent,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DataSourceId, DatabaseId, DateValue, PageId, PropertyName,
    RichTextItem, SelectOption,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{parse_blocks_pagination, parse_database_response, parse_pages_pagination},
    query_ready_posts, resolve_data_source, DataSourceQuery, NotionHttpClient, NotionRepository,
    PaginatedResponse, QueryOptions,
};

// --- Formatting ---
pub use crate::formatting::{
    compose_document, compose_frontmatter, fetch_page_markdown, normalize_markdown,
    plain_text_of, render_block, rich_text_to_markdown,
};

// --- Metadata ---
pub use crate::metadata::{extract_metadata, has_channel, slugify, PostMetadata, PropertyNames};

// --- Sync ---
pub use crate::sync::{exit_status, run_sync, SyncReport};
