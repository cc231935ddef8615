// src/formatting/block_renderer.rs
//! Block rendering engine — converts one Notion block to a Markdown fragment.
//!
//! Each fragment carries its own trailing newlines, so a document is the
//! plain concatenation of its rendered blocks. Only paragraphs, list items
//! and to-dos honour the indent; headings, quotes, code and dividers always
//! start at column zero.

use super::rich_text::{plain_text_of, rich_text_to_markdown};
use crate::model::{Block, BlockKind};

/// Renders a single block, prefixing indentable kinds with `indent` spaces.
pub fn render_block(block: &Block, indent: usize) -> String {
    let prefix = " ".repeat(indent);

    match &block.kind {
        BlockKind::Paragraph(content) => {
            let text = rich_text_to_markdown(&content.rich_text);
            if text.trim().is_empty() {
                "\n".to_string()
            } else {
                format!("{}{}\n", prefix, text)
            }
        }
        BlockKind::Heading1(content) => {
            format!("# {}\n\n", rich_text_to_markdown(&content.rich_text))
        }
        BlockKind::Heading2(content) => {
            format!("## {}\n\n", rich_text_to_markdown(&content.rich_text))
        }
        BlockKind::Heading3(content) => {
            format!("### {}\n\n", rich_text_to_markdown(&content.rich_text))
        }
        BlockKind::BulletedListItem(content) => {
            format!("{}- {}\n", prefix, rich_text_to_markdown(&content.rich_text))
        }
        // Markdown renumbers ordered lists, so every item is "1."
        BlockKind::NumberedListItem(content) => {
            format!("{}1. {}\n", prefix, rich_text_to_markdown(&content.rich_text))
        }
        BlockKind::Quote(content) | BlockKind::Callout(content) => {
            format!("> {}\n\n", rich_text_to_markdown(&content.rich_text))
        }
        BlockKind::Code(code) => {
            format!(
                "```{}\n{}\n```\n\n",
                code.language,
                plain_text_of(&code.rich_text)
            )
        }
        BlockKind::Divider => "\n---\n\n".to_string(),
        BlockKind::ToDo(todo) => {
            let mark = if todo.checked { "x" } else { " " };
            format!(
                "{}- [{}] {}\n",
                prefix,
                mark,
                rich_text_to_markdown(&todo.rich_text)
            )
        }
        BlockKind::Image(image) => {
            format!(
                "\n<!-- image omitted: {} -->\n\n",
                rich_text_to_markdown(&image.caption)
            )
        }
        BlockKind::Unsupported { block_type } => {
            log::debug!("Skipping unsupported block type '{}'", block_type);
            String::new()
        }
    }
}
