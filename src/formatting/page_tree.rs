// src/formatting/page_tree.rs
//! Turns a page's block tree into one Markdown document.
//!
//! Top-level blocks are listed in full, and each block that owns children
//! gets exactly one more listing. Grandchildren are never fetched.

use super::block_renderer::render_block;
use crate::api::{fetch_all_pages, NotionRepository};
use crate::constants::{CHARS_PER_BLOCK_ESTIMATE, INDENT_SPACES};
use crate::error::AppError;
use crate::model::Block;
use crate::types::{BlockId, PageId};
use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{4,}").expect("valid newline regex"));

/// Fetches a page's content and renders it to normalized Markdown.
pub async fn fetch_page_markdown(
    repo: &dyn NotionRepository,
    page: &PageId,
) -> Result<String, AppError> {
    let blocks = list_all_children(repo, &page.as_block_id()).await?;
    let mut markdown = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);

    for block in &blocks {
        markdown.push_str(&render_block(block, 0));

        if block.has_children() {
            log::debug!(
                "Listing children of {} block {}",
                block.block_type(),
                block.id()
            );
            let children = list_all_children(repo, block.id()).await?;
            if !children.is_empty() {
                for child in &children {
                    markdown.push_str(&render_block(child, INDENT_SPACES));
                }
                markdown.push('\n');
            }
        }
    }

    Ok(normalize_markdown(&markdown))
}

/// Collapses runs of four or more newlines to three, trims the document and
/// ends it with exactly one newline.
pub fn normalize_markdown(markdown: &str) -> String {
    let collapsed = EXCESS_NEWLINES.replace_all(markdown, "\n\n\n");
    format!("{}\n", collapsed.trim())
}

async fn list_all_children(
    repo: &dyn NotionRepository,
    parent: &BlockId,
) -> Result<Vec<Block>, AppError> {
    let result = fetch_all_pages(move |cursor| repo.list_block_children(parent, cursor)).await?;
    log::debug!(
        "Listed {} child blocks of {} in {} request(s)",
        result.items.len(),
        parent,
        result.pages_fetched
    );
    Ok(result.items)
}
