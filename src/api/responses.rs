// src/api/responses.rs
//! Wire shapes of Notion API responses and their conversion to the domain
//! model.
//!
//! Blocks arrive as `{"type": "<kind>", "<kind>": {...payload}}`; the payload
//! is decoded only for the kinds the renderer knows about.

use crate::error::AppError;
use crate::model::{Block, BlockCommon, BlockKind};
use crate::types::BlockId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Trait for converting wire types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, AppError>;
}

/// A block exactly as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(flatten)]
    pub payloads: Map<String, Value>,
}

impl RawBlock {
    /// Decodes the payload stored under the block's own type key.
    fn payload<T: DeserializeOwned + Default>(&mut self) -> Result<T, AppError> {
        match self.payloads.remove(&self.block_type) {
            Some(Value::Null) | None => Ok(T::default()),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                AppError::MalformedResponse(format!(
                    "Invalid {} payload in block {}: {}",
                    self.block_type, self.id, e
                ))
            }),
        }
    }
}

impl ToDomain<Block> for RawBlock {
    fn to_domain(mut self) -> Result<Block, AppError> {
        let kind = match self.block_type.as_str() {
            "paragraph" => BlockKind::Paragraph(self.payload()?),
            "heading_1" => BlockKind::Heading1(self.payload()?),
            "heading_2" => BlockKind::Heading2(self.payload()?),
            "heading_3" => BlockKind::Heading3(self.payload()?),
            "bulleted_list_item" => BlockKind::BulletedListItem(self.payload()?),
            "numbered_list_item" => BlockKind::NumberedListItem(self.payload()?),
            "quote" => BlockKind::Quote(self.payload()?),
            "callout" => BlockKind::Callout(self.payload()?),
            "code" => BlockKind::Code(self.payload()?),
            "divider" => BlockKind::Divider,
            "to_do" => BlockKind::ToDo(self.payload()?),
            "image" => BlockKind::Image(self.payload()?),
            other => BlockKind::Unsupported {
                block_type: other.to_string(),
            },
        };

        Ok(Block {
            common: BlockCommon {
                id: self.id,
                has_children: self.has_children,
                archived: self.archived,
            },
            kind,
        })
    }
}

/// Error body returned alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    pub code: String,
    pub message: String,
}
