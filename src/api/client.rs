// src/api/client.rs
//! Pure HTTP client wrapper for Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to the Notion API. It handles authentication and
//! basic request/response operations; parsing lives in `parser`.

use super::query::DataSourceQuery;
use super::types::PaginatedResponse;
use crate::constants::{NOTION_API_PAGE_SIZE, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{Block, Database, Page};
use crate::types::{ApiKey, BlockId, DataSourceId, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;

const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Creates a client talking to a different API root.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL)
    /// * `query` - Query string parameters
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        log::debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "   Request body: {}",
                serde_json::to_string_pretty(body)
                    .unwrap_or_else(|_| "Failed to serialize".to_string())
            );
        }

        let response = self.client.post(&url).json(body).send().await?;
        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

/// Body of a data source query call: the query plus the page cursor.
#[derive(Serialize)]
struct QueryRequest<'a> {
    #[serde(flatten)]
    query: &'a DataSourceQuery,
    page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<String>,
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_database(&self, id: &DatabaseId) -> Result<Database, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint, &[]).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_database_response(result)
    }

    async fn query_data_source(
        &self,
        id: &DataSourceId,
        query: &DataSourceQuery,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        let endpoint = format!("data_sources/{}/query", id.to_hyphenated());
        let body = QueryRequest {
            query,
            page_size: NOTION_API_PAGE_SIZE,
            start_cursor: cursor,
        };
        let response = self.post(&endpoint, &body).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_pages_pagination(result)
    }

    async fn list_block_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let mut query = vec![("page_size", NOTION_API_PAGE_SIZE.to_string())];
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor));
        }
        let response = self.get(&endpoint, &query).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_blocks_pagination(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
