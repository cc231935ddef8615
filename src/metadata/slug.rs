// src/metadata/slug.rs
//! File-name-safe slugs that keep non-Latin scripts intact.

use crate::constants::UNTITLED_SLUG;
use unicode_normalization::UnicodeNormalization;

/// Converts text into a lowercase, hyphen-separated slug.
///
/// The text is NFKC-normalized and lowercased. Unicode letters and digits
/// are kept; every run of anything else (whitespace, punctuation, `_`,
/// apostrophes, dashes) becomes a single `-`. A comma between two digits is
/// dropped so `1,000` stays one word. The result never starts or ends with
/// `-` and falls back to `untitled` when nothing is left. Slugifying a slug
/// returns it unchanged.
pub fn slugify(input: &str) -> String {
    let lowered = input.nfkc().collect::<String>().to_lowercase();
    let chars: Vec<char> = lowered.nfkc().collect();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' && is_digit_grouping(&chars, i) {
            continue;
        }

        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug
    }
}

/// Whether the character at `i` sits between two digits.
fn is_digit_grouping(chars: &[char], i: usize) -> bool {
    i > 0
        && chars[i - 1].is_numeric()
        && chars.get(i + 1).is_some_and(|next| next.is_numeric())
}
