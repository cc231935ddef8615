// src/types/rich_text.rs
//! Rich text spans and the small value types carried by page properties.

use serde::{Deserialize, Serialize};

/// Rich text item with formatting annotations.
///
/// Only the rendered `plain_text`, the annotation set and the optional
/// hyperlink are kept; mention and equation payloads collapse into their
/// plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create an unstyled span.
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            annotations: Annotations::default(),
            href: None,
        }
    }

    /// Returns the span with the given annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns the span pointing at `href`.
    pub fn with_link(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// Select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

impl SelectOption {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

/// Date property value as sent by the API.
///
/// `start` is either `YYYY-MM-DD` or a full ISO 8601 timestamp; the
/// time-of-day part is discarded by the metadata extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn starting(start: &str) -> Self {
        Self {
            start: start.to_string(),
            end: None,
            time_zone: None,
        }
    }
}
