use crate::types::*;
use serde::{Deserialize, Serialize};

/// A typed page property value, tagged by the API's `type` field.
///
/// Property types the publisher never reads deserialize into
/// [`PropertyValue::Unsupported`] instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichTextItem>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextItem>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    pub fn title(text: &str) -> Self {
        PropertyValue::Title {
            title: vec![RichTextItem::plain_text(text)],
        }
    }

    pub fn rich_text(text: &str) -> Self {
        PropertyValue::RichText {
            rich_text: vec![RichTextItem::plain_text(text)],
        }
    }

    pub fn select(name: &str) -> Self {
        PropertyValue::Select {
            select: Some(SelectOption::named(name)),
        }
    }

    pub fn multi_select(names: &[&str]) -> Self {
        PropertyValue::MultiSelect {
            multi_select: names.iter().map(|name| SelectOption::named(name)).collect(),
        }
    }

    pub fn date(start: &str) -> Self {
        PropertyValue::Date {
            date: Some(DateValue::starting(start)),
        }
    }
}
