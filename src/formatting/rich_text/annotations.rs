// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.
//!
//! Styles are applied innermost first: code, bold, italic, strikethrough,
//! and finally the link wrapping everything else.

use crate::types::Annotations;

/// The inline styles a span renders with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: Option<String>,
}

/// Converts model annotations to text style.
///
/// Underline has no Markdown form and is dropped.
pub fn annotations_to_style(annotations: &Annotations, href: Option<&str>) -> TextStyle {
    TextStyle {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        code: annotations.code,
        link: href.filter(|url| !url.is_empty()).map(str::to_string),
    }
}

/// Renderer for text styles to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Applies styles to text content for Markdown output.
    ///
    /// Markdown-significant characters in `content` are passed through
    /// unescaped.
    pub fn apply_styles(content: &str, style: &TextStyle) -> String {
        let mut result = content.to_string();

        if style.code {
            result = format!("`{}`", result);
        }

        if style.bold {
            result = format!("**{}**", result);
        }

        if style.italic {
            result = format!("*{}*", result);
        }

        if style.strikethrough {
            result = format!("~~{}~~", result);
        }

        if let Some(url) = &style.link {
            result = format!("[{}]({})", result, url);
        }

        result
    }
}
