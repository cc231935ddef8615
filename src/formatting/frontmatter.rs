// src/formatting/frontmatter.rs
//! YAML frontmatter for Hugo posts.
//!
//! Fields are always emitted in the same order; optional fields are left out
//! entirely rather than written empty.

use crate::error::AppError;
use crate::model::Post;
use std::fmt::{self, Write};

/// Builds the frontmatter block, including the blank line that separates it
/// from the body.
pub fn compose_frontmatter(post: &Post, author: Option<&str>) -> Result<String, AppError> {
    let mut out = String::from("---\n");
    write_fields(&mut out, post, author)?;
    out.push_str("---\n\n");
    Ok(out)
}

/// The full file contents: frontmatter followed by the Markdown body.
pub fn compose_document(post: &Post, author: Option<&str>) -> Result<String, AppError> {
    let mut document = compose_frontmatter(post, author)?;
    document.push_str(&post.body);
    Ok(document)
}

fn write_fields(out: &mut String, post: &Post, author: Option<&str>) -> fmt::Result {
    writeln!(out, "title: {}", quote(&post.title))?;
    writeln!(out, "date: {}", post.date.format("%Y-%m-%d"))?;
    writeln!(out, "draft: false")?;

    if let Some(author) = author {
        writeln!(out, "author: {}", quote(author))?;
    }
    if let Some(post_type) = &post.post_type {
        writeln!(out, "type: {}", quote(post_type))?;
    }

    let tags: Vec<String> = post.tags.iter().map(|tag| quote(tag)).collect();
    writeln!(out, "tags: [{}]", tags.join(", "))?;
    writeln!(out, "slug: {}", quote(&post.slug))
}

/// Double-quoted YAML scalar with backslashes and quotes escaped.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageId;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn post() -> Post {
        Post {
            page_id: PageId::from("page-1"),
            title: "My Post".to_string(),
            slug: "my-post".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            tags: vec!["go".to_string(), "infra".to_string()],
            post_type: None,
            body: "Hello\n".to_string(),
        }
    }

    #[test]
    fn test_minimal_frontmatter() {
        let expected = "---\n\
                        title: \"My Post\"\n\
                        date: 2024-01-05\n\
                        draft: false\n\
                        tags: [\"go\", \"infra\"]\n\
                        slug: \"my-post\"\n\
                        ---\n\n";
        assert_eq!(compose_frontmatter(&post(), None).unwrap(), expected);
    }

    #[test]
    fn test_optional_fields_keep_their_position() {
        let post = Post {
            post_type: Some("note".to_string()),
            tags: Vec::new(),
            ..post()
        };
        let expected = "---\n\
                        title: \"My Post\"\n\
                        date: 2024-01-05\n\
                        draft: false\n\
                        author: \"Jane\"\n\
                        type: \"note\"\n\
                        tags: []\n\
                        slug: \"my-post\"\n\
                        ---\n\n";
        assert_eq!(compose_frontmatter(&post, Some("Jane")).unwrap(), expected);
    }

    #[test]
    fn test_quotes_and_backslashes_are_escaped() {
        let post = Post {
            title: r#"Say "hi" \ bye"#.to_string(),
            ..post()
        };
        let frontmatter = compose_frontmatter(&post, None).unwrap();
        assert!(frontmatter.contains(r#"title: "Say \"hi\" \\ bye""#));
    }

    #[test]
    fn test_document_appends_body() {
        let document = compose_document(&post(), None).unwrap();
        assert!(document.starts_with("---\n"));
        assert!(document.ends_with("---\n\nHello\n"));
    }
}
