// src/formatting/mod.rs
//! Renders Notion data structures into Markdown and assembles post files.

pub mod block_renderer;
pub mod frontmatter;
pub mod page_tree;
pub mod rich_text;

pub use block_renderer::render_block;
pub use frontmatter::{compose_document, compose_frontmatter};
pub use page_tree::{fetch_page_markdown, normalize_markdown};
pub use rich_text::{plain_text_of, rich_text_to_markdown};
