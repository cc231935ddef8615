// src/formatting/rich_text/mod.rs
//! Handles formatting of Notion RichTextItem arrays into inline Markdown.

mod annotations;

pub use annotations::{annotations_to_style, MarkdownStyleRenderer, TextStyle};

use crate::types::RichTextItem;

/// Formats an array of RichTextItems into Markdown, span by span.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(render_span).collect()
}

/// Concatenates the raw text of every span, ignoring all styling.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

fn render_span(item: &RichTextItem) -> String {
    let style = annotations_to_style(&item.annotations, item.href.as_deref());
    MarkdownStyleRenderer::apply_styles(&item.plain_text, &style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Annotations;
    use pretty_assertions::assert_eq;

    fn styled(text: &str, annotations: Annotations) -> RichTextItem {
        RichTextItem::plain_text(text).with_annotations(annotations)
    }

    fn render_one(item: RichTextItem) -> String {
        rich_text_to_markdown(&[item])
    }

    #[test]
    fn test_plain_text_formatting() {
        let items = vec![RichTextItem::plain_text("Hello World")];
        assert_eq!(rich_text_to_markdown(&items), "Hello World");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(rich_text_to_markdown(&[]), "");
        assert_eq!(plain_text_of(&[]), "");
    }

    #[test]
    fn test_single_annotations() {
        let bold = Annotations {
            bold: true,
            ..Default::default()
        };
        let italic = Annotations {
            italic: true,
            ..Default::default()
        };
        let strike = Annotations {
            strikethrough: true,
            ..Default::default()
        };
        let code = Annotations {
            code: true,
            ..Default::default()
        };

        assert_eq!(render_one(styled("hi", bold)), "**hi**");
        assert_eq!(render_one(styled("hi", italic)), "*hi*");
        assert_eq!(render_one(styled("hi", strike)), "~~hi~~");
        assert_eq!(render_one(styled("hi", code)), "`hi`");
        assert_eq!(
            render_one(RichTextItem::plain_text("hi").with_link("https://example.com")),
            "[hi](https://example.com)"
        );
    }

    #[test]
    fn test_pairwise_annotations_nest_in_fixed_order() {
        let cases = [
            ((true, false, false, true), "**`hi`**"),
            ((false, true, false, true), "*`hi`*"),
            ((false, false, true, true), "~~`hi`~~"),
            ((true, true, false, false), "***hi***"),
            ((true, false, true, false), "~~**hi**~~"),
            ((false, true, true, false), "~~*hi*~~"),
        ];

        for ((bold, italic, strikethrough, code), expected) in cases {
            let annotations = Annotations {
                bold,
                italic,
                strikethrough,
                code,
                ..Default::default()
            };
            assert_eq!(render_one(styled("hi", annotations)), expected);
        }
    }

    #[test]
    fn test_link_wraps_every_other_style() {
        let bold = Annotations {
            bold: true,
            ..Default::default()
        };
        assert_eq!(
            render_one(styled("hi", bold).with_link("https://example.com")),
            "[**hi**](https://example.com)"
        );

        let everything = Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            code: true,
            underline: true,
        };
        assert_eq!(
            render_one(styled("hi", everything).with_link("https://example.com")),
            "[~~***`hi`***~~](https://example.com)"
        );
    }

    #[test]
    fn test_spans_concatenate_in_order() {
        let bold = Annotations {
            bold: true,
            ..Default::default()
        };
        let items = vec![
            RichTextItem::plain_text("Hello, "),
            styled("world", bold),
            RichTextItem::plain_text("!"),
        ];

        assert_eq!(rich_text_to_markdown(&items), "Hello, **world**!");
        assert_eq!(plain_text_of(&items), "Hello, world!");
    }

    #[test]
    fn test_markdown_characters_are_not_escaped() {
        let items = vec![RichTextItem::plain_text("2 * 3 _is_ [six]")];
        assert_eq!(rich_text_to_markdown(&items), "2 * 3 _is_ [six]");
    }
}
