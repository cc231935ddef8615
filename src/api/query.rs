// src/api/query.rs
//! Finding the posts that are ready to publish.
//!
//! Databases are containers; the rows live in data sources. A database is
//! resolved to its first data source, which is then queried with the
//! "ready + channel" filter, newest first.

use super::pagination::fetch_all_pages;
use super::NotionRepository;
use crate::constants::{
    DEFAULT_CHANNEL, PROP_CHANNELS, PROP_DATE, PROP_STATUS, READY_STATUS,
};
use crate::error::AppError;
use crate::model::Page;
use crate::types::{DataSourceId, DatabaseId};
use serde::Serialize;

/// A data source query body: compound filter plus sort order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSourceQuery {
    pub filter: QueryFilter,
    pub sorts: Vec<QuerySort>,
}

/// Property filter, serialized in the shape the query endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryFilter {
    And {
        and: Vec<QueryFilter>,
    },
    Select {
        property: String,
        select: FilterCondition,
    },
    MultiSelect {
        property: String,
        multi_select: FilterCondition,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    Equals(String),
    Contains(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySort {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl DataSourceQuery {
    /// `status == ready AND channels contains channel`, sorted by date, newest first.
    pub fn ready_posts(
        status_property: &str,
        ready_status: &str,
        channels_property: &str,
        channel: &str,
        date_property: &str,
    ) -> Self {
        Self {
            filter: QueryFilter::And {
                and: vec![
                    QueryFilter::Select {
                        property: status_property.to_string(),
                        select: FilterCondition::Equals(ready_status.to_string()),
                    },
                    QueryFilter::MultiSelect {
                        property: channels_property.to_string(),
                        multi_select: FilterCondition::Contains(channel.to_string()),
                    },
                ],
            },
            sorts: vec![QuerySort {
                property: date_property.to_string(),
                direction: SortDirection::Descending,
            }],
        }
    }
}

/// Which posts count as publishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub ready_status: String,
    pub channel: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            ready_status: READY_STATUS.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl QueryOptions {
    pub fn to_query(&self) -> DataSourceQuery {
        DataSourceQuery::ready_posts(
            PROP_STATUS,
            &self.ready_status,
            PROP_CHANNELS,
            &self.channel,
            PROP_DATE,
        )
    }
}

/// Resolves a database to the first data source backing it.
pub async fn resolve_data_source(
    repo: &dyn NotionRepository,
    database_id: &DatabaseId,
) -> Result<DataSourceId, AppError> {
    let database = repo.retrieve_database(database_id).await?;

    if database.data_sources.len() > 1 {
        log::warn!(
            "Database {} has {} data sources; using the first one",
            database_id,
            database.data_sources.len()
        );
    }

    database
        .data_sources
        .into_iter()
        .next()
        .map(|source| {
            log::debug!(
                "Resolved database {} to data source {} ({})",
                database_id,
                source.id,
                source.name.as_deref().unwrap_or("unnamed")
            );
            source.id
        })
        .ok_or_else(|| AppError::NoDataSource {
            database_id: database_id.to_string(),
        })
}

/// Queries every page that is ready to publish on the configured channel,
/// following the result cursor to the end.
pub async fn query_ready_posts(
    repo: &dyn NotionRepository,
    database_id: &DatabaseId,
    options: &QueryOptions,
) -> Result<Vec<Page>, AppError> {
    let data_source = resolve_data_source(repo, database_id).await?;
    let query = options.to_query();

    let (data_source, query) = (&data_source, &query);
    let result =
        fetch_all_pages(move |cursor| repo.query_data_source(data_source, query, cursor)).await?;

    log::debug!(
        "Query returned {} page(s) in {} request(s)",
        result.items.len(),
        result.pages_fetched
    );
    Ok(result.items)
}
