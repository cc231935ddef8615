// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Property names mirror the columns of the blog database; the publishing
//! defaults can be overridden from the command line.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// API version that exposes data sources behind databases.
pub const NOTION_VERSION: &str = "2025-09-03";

// ---------------------------------------------------------------------------
// Blog database schema
// ---------------------------------------------------------------------------

pub const PROP_TITLE: &str = "Title";
pub const PROP_SLUG: &str = "Slug";
pub const PROP_STATUS: &str = "Status";
pub const PROP_CHANNELS: &str = "Channels";
pub const PROP_TAGS: &str = "Tags";
pub const PROP_TYPE: &str = "Type";
pub const PROP_DATE: &str = "Date";

/// Status value marking a post as ready to publish.
pub const READY_STATUS: &str = "ready";

/// Channel a post must be tagged with to be published here.
pub const DEFAULT_CHANNEL: &str = "GH";

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Hugo content directory the posts are written into.
pub const DEFAULT_CONTENT_DIR: &str = "site/content/posts";

/// Slug used when a title slugifies to nothing.
pub const UNTITLED_SLUG: &str = "untitled";

/// Number of spaces nested child blocks are indented by.
pub const INDENT_SPACES: usize = 2;

/// How many characters of a post a dry run prints.
pub const DRY_RUN_PREVIEW_CHARS: usize = 800;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
