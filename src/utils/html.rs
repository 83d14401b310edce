//! Markup escaping and text shaping.
//!
//! - `escape()` - HTML entity escaping for text and attribute values
//! - `escape_xml()` - XML entity escaping (sitemap values)
//! - `truncate_description()` - clamp meta descriptions to a character budget
//! - `non_empty()` - the optional-field rule shared by every formatter

use std::borrow::Cow;

/// Maximum length of a meta description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 160;

const ELLIPSIS: &str = "...";

/// Characters that require escaping in both HTML and XML.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn html_entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

#[inline]
fn xml_entity(c: char) -> Option<&'static str> {
    match c {
        '\'' => Some("&apos;"),
        c => html_entity(c),
    }
}

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("it's"), "it&#039;s");
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, html_entity)
}

/// Escape XML special characters (`'` becomes `&apos;`).
///
/// Not idempotent: call it exactly once per raw value.
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    escape_with(s, xml_entity)
}

#[inline]
fn escape_with(s: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match entity(c) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Clamp `text` to at most `max_len` characters.
///
/// Text that already fits is returned unchanged (no ellipsis). Longer text
/// keeps its first `max_len - 3` characters followed by `...`, so the
/// result never exceeds `max_len` characters.
pub fn truncate_description(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }

    let cut_at = |n: usize| text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx);

    // No room for the ellipsis itself.
    if max_len <= ELLIPSIS.len() {
        return Cow::Borrowed(&text[..cut_at(max_len)]);
    }

    let cut = cut_at(max_len - ELLIPSIS.len());
    let mut out = String::with_capacity(cut + ELLIPSIS.len());
    out.push_str(&text[..cut]);
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Treat an optional string as absent when it is empty after trimming.
#[inline]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
