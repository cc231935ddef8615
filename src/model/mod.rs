mod block;
pub mod common;
mod post;
mod property_value;

pub use block::{Block, BlockKind, CodeContent, ImageContent, TextBlockContent, ToDoContent};
pub use common::*;
pub use post::Post;
pub use property_value::PropertyValue;

use crate::types::{DataSourceId, DatabaseId, PageId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion page returned by a data source query.
///
/// Properties keep the order the API sent them in, which is the order the
/// title fallback scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PropertyValue>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Page {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            properties: IndexMap::new(),
            url: None,
        }
    }

    /// Returns the page with an extra property appended.
    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(PropertyName::from(name), value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// A Notion database container and the data sources backing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    #[serde(default)]
    pub data_sources: Vec<DataSourceRef>,
}

/// Reference to a queryable data source inside a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub id: DataSourceId,
    #[serde(default)]
    pub name: Option<String>,
}
