// src/api/parser.rs
//! Turns raw HTTP responses into domain values or typed API errors.

use super::client::ApiResponse;
use super::responses::{NotionErrorBody, RawBlock, ToDomain};
use super::types::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Database, Page};
use reqwest::StatusCode;

/// Parse any Notion API response, mapping error statuses to `AppError`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        parse_error(&result.data, result.status, &result.url)
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(error) = serde_json::from_str::<NotionErrorBody>(body) {
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&error.code),
            message: error.message,
            status,
        });
    }

    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

/// Parse a database response.
pub fn parse_database_response(result: ApiResponse<String>) -> Result<Database, AppError> {
    parse_api_response(result)
}

/// Parse one page of data source query results.
pub fn parse_pages_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Page>, AppError> {
    parse_api_response(result)
}

/// Parse one page of block children.
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: PaginatedResponse<RawBlock> = parse_api_response(result)?;
    let blocks = response
        .results
        .into_iter()
        .map(ToDomain::to_domain)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaginatedResponse {
        results: blocks,
        next_cursor: response.next_cursor,
        has_more: response.has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, PropertyValue};

    fn ok(body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::OK,
            url: "test_url".to_string(),
        }
    }

    #[test]
    fn test_error_body_maps_to_typed_code() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find database with ID: abc123",
            "request_id": "req_123"
        }"#;
        let response = ApiResponse {
            data: error_json.to_string(),
            status: StatusCode::NOT_FOUND,
            url: "test_url".to_string(),
        };

        match parse_database_response(response) {
            Err(AppError::NotionService { code, status, .. }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_status() {
        let response = ApiResponse {
            data: "<html>bad gateway</html>".to_string(),
            status: StatusCode::BAD_GATEWAY,
            url: "test_url".to_string(),
        };

        match parse_database_response(response) {
            Err(AppError::NotionService { code, .. }) => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_database_lists_data_sources() {
        let database = parse_database_response(ok(r#"{
            "object": "database",
            "id": "248104cd-477e-80fd-b757-e945d38000bd",
            "title": [],
            "data_sources": [
                {"id": "248104cd-477e-80af-bc30-000bd28de8f9", "name": "Posts"}
            ]
        }"#))
        .unwrap();

        assert_eq!(database.data_sources.len(), 1);
        assert_eq!(
            database.data_sources[0].id.as_str(),
            "248104cd-477e-80af-bc30-000bd28de8f9"
        );
    }

    #[test]
    fn test_block_children_page() {
        let page = parse_blocks_pagination(ok(r#"{
            "object": "list",
            "results": [
                {
                    "object": "block",
                    "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
                    "type": "heading_2",
                    "has_children": false,
                    "archived": false,
                    "heading_2": {
                        "rich_text": [{
                            "type": "text",
                            "text": {"content": "Lacinato kale", "link": null},
                            "annotations": {"bold": false, "italic": false, "strikethrough": false, "underline": false, "code": false, "color": "default"},
                            "plain_text": "Lacinato kale",
                            "href": null
                        }],
                        "color": "default",
                        "is_toggleable": false
                    }
                },
                {
                    "object": "block",
                    "id": "acc7eb06-05cd-4603-a384-5e1e4f1f4e72",
                    "type": "divider",
                    "has_children": false,
                    "divider": {}
                }
            ],
            "next_cursor": "acc7eb06-05cd-4603-a384-5e1e4f1f4e72",
            "has_more": true,
            "type": "block",
            "block": {}
        }"#))
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.results.len(), 2);
        assert!(matches!(page.results[0].kind, BlockKind::Heading2(_)));
        assert_eq!(page.results[1].kind, BlockKind::Divider);
    }

    #[test]
    fn test_query_results_keep_property_order() {
        let page = parse_pages_pagination(ok(r#"{
            "object": "list",
            "results": [{
                "object": "page",
                "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
                "url": "https://www.notion.so/My-Post-598337872cf94fdf8782e53db20768a5",
                "properties": {
                    "Status": {"id": "s", "type": "select", "select": {"id": "1", "name": "ready", "color": "green"}},
                    "Done": {"id": "d", "type": "checkbox", "checkbox": false},
                    "Name": {"id": "title", "type": "title", "title": [{"type": "text", "plain_text": "My Post"}]}
                }
            }],
            "next_cursor": null,
            "has_more": false
        }"#))
        .unwrap();

        let properties: Vec<_> = page.results[0]
            .properties
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(properties, vec!["Status", "Done", "Name"]);
        assert_eq!(
            page.results[0].property("Done"),
            Some(&PropertyValue::Unsupported)
        );
    }
}
