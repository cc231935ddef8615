// src/metadata/mod.rs
//! Post metadata pulled from a page's properties.
//!
//! Every field has a fallback except the title: a page without one is not a
//! post and the caller skips it.

mod slug;

pub use slug::slugify;

use crate::constants::{PROP_CHANNELS, PROP_DATE, PROP_SLUG, PROP_TAGS, PROP_TITLE, PROP_TYPE};
use crate::formatting::plain_text_of;
use crate::model::{Page, Post, PropertyValue};
use crate::types::PageId;
use chrono::{NaiveDate, Utc};

/// Names of the database columns metadata is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub tags: String,
    pub post_type: String,
    pub channels: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: PROP_TITLE.to_string(),
            slug: PROP_SLUG.to_string(),
            date: PROP_DATE.to_string(),
            tags: PROP_TAGS.to_string(),
            post_type: PROP_TYPE.to_string(),
            channels: PROP_CHANNELS.to_string(),
        }
    }
}

/// Everything the frontmatter needs, minus the body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMetadata {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub post_type: Option<String>,
}

impl PostMetadata {
    pub fn into_post(self, page_id: PageId, body: String) -> Post {
        Post {
            page_id,
            title: self.title,
            slug: self.slug,
            date: self.date,
            tags: self.tags,
            post_type: self.post_type,
            body,
        }
    }
}

/// Extracts post metadata, or `None` when the page has no usable title.
pub fn extract_metadata(page: &Page, names: &PropertyNames) -> Option<PostMetadata> {
    let title = extract_title(page, &names.title)?;
    let slug = extract_slug(page, &names.slug).unwrap_or_else(|| slugify(&title));

    Some(PostMetadata {
        slug,
        date: extract_date(page, &names.date),
        tags: extract_tags(page, &names.tags),
        post_type: extract_select(page, &names.post_type),
        title,
    })
}

/// Whether the page's channel multi-select includes `channel`.
pub fn has_channel(page: &Page, channels_property: &str, channel: &str) -> bool {
    match page.property(channels_property) {
        Some(PropertyValue::MultiSelect { multi_select }) => {
            multi_select.iter().any(|option| option.name == channel)
        }
        _ => false,
    }
}

/// The named title property, else the first title-typed property.
fn extract_title(page: &Page, title_property: &str) -> Option<String> {
    let spans = match page.property(title_property) {
        Some(PropertyValue::Title { title }) => Some(title),
        _ => page.properties.values().find_map(|value| match value {
            PropertyValue::Title { title } => Some(title),
            _ => None,
        }),
    }?;

    let title = plain_text_of(spans).trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn extract_slug(page: &Page, slug_property: &str) -> Option<String> {
    match page.property(slug_property) {
        Some(PropertyValue::RichText { rich_text }) => {
            let raw = plain_text_of(rich_text);
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                Some(slugify(raw))
            }
        }
        _ => None,
    }
}

fn extract_date(page: &Page, date_property: &str) -> NaiveDate {
    let start = match page.property(date_property) {
        Some(PropertyValue::Date { date: Some(date) }) => date.start.as_str(),
        _ => return today(),
    };

    let day = start.get(..10).unwrap_or(start);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date,
        Err(e) => {
            log::warn!(
                "Unparseable date '{}' on page {}: {}; using today",
                start,
                page.id,
                e
            );
            today()
        }
    }
}

fn extract_tags(page: &Page, tags_property: &str) -> Vec<String> {
    match page.property(tags_property) {
        Some(PropertyValue::MultiSelect { multi_select }) => multi_select
            .iter()
            .filter(|option| !option.name.is_empty())
            .map(|option| option.name.clone())
            .collect(),
        _ => Vec::new(),
    }
}

fn extract_select(page: &Page, property: &str) -> Option<String> {
    match page.property(property) {
        Some(PropertyValue::Select {
            select: Some(option),
        }) if !option.name.is_empty() => Some(option.name.clone()),
        _ => None,
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
