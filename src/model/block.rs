use super::common::BlockCommon;
use crate::types::{BlockId, RichTextItem};
use serde::{Deserialize, Serialize};

/// A single unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub common: BlockCommon,
    pub kind: BlockKind,
}

/// The block kinds the publisher knows how to render.
///
/// Every other Notion block type maps to [`BlockKind::Unsupported`], which
/// renders to nothing. Adding a kind means adding a variant here and an arm
/// to the renderer's exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph(TextBlockContent),
    Heading1(TextBlockContent),
    Heading2(TextBlockContent),
    Heading3(TextBlockContent),
    BulletedListItem(TextBlockContent),
    NumberedListItem(TextBlockContent),
    Quote(TextBlockContent),
    Callout(TextBlockContent),
    Code(CodeContent),
    Divider,
    ToDo(ToDoContent),
    Image(ImageContent),
    Unsupported { block_type: String },
}

/// Text content block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: String,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
}

/// Image block. Only the caption survives; the file itself is never fetched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            common: BlockCommon::new(id),
            kind,
        }
    }

    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        &self.common.id
    }

    /// Whether the block owns nested children that must be listed separately.
    pub fn has_children(&self) -> bool {
        self.common.has_children
    }

    /// Returns the Notion API type name of this block.
    pub fn block_type(&self) -> &str {
        match &self.kind {
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::Heading1(_) => "heading_1",
            BlockKind::Heading2(_) => "heading_2",
            BlockKind::Heading3(_) => "heading_3",
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::Quote(_) => "quote",
            BlockKind::Callout(_) => "callout",
            BlockKind::Code(_) => "code",
            BlockKind::Divider => "divider",
            BlockKind::ToDo(_) => "to_do",
            BlockKind::Image(_) => "image",
            BlockKind::Unsupported { block_type } => block_type,
        }
    }
}
