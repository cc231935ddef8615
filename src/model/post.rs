use crate::types::PageId;
use chrono::NaiveDate;

/// A page ready to be published: extracted metadata plus its Markdown body.
///
/// Built once per qualifying page and consumed immediately by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub page_id: PageId,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub post_type: Option<String>,
    pub body: String,
}

impl Post {
    /// File name the post is written under.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}
