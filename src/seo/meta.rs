//! `<head>` meta tags: basic SEO, Open Graph, and Twitter Card.
//!
//! Every value that comes from configuration goes through
//! [`escape`](crate::utils::html::escape); literal tag syntax never does.
//! Optional values that are missing or blank are omitted entirely.

use crate::utils::html::{DESCRIPTION_MAX_LEN, escape, non_empty, truncate_description};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

const CHARSET_TAG: &str = r#"<meta charset="UTF-8">"#;
const VIEWPORT_TAG: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

/// Page-level SEO metadata.
#[derive(Debug, Clone, Default)]
pub struct MetaTagsConfig {
    pub title: String,
    /// Any length; truncated to 160 characters on output.
    pub description: String,
    pub canonical_url: String,
    pub keywords: Option<Vec<String>>,
    pub author: Option<String>,
    /// Robots directive, e.g. `index, follow`.
    pub robots: Option<String>,
}

/// Social preview metadata.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphTags {
    pub og_title: String,
    pub og_description: String,
    /// Should reference an image of at least 1200x630.
    pub og_image: String,
    pub og_type: String,
    pub og_url: String,
    pub og_site_name: Option<String>,
    pub og_locale: Option<String>,
}

/// `twitter:card` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for TwitterCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Twitter preview metadata.
#[derive(Debug, Clone, Default)]
pub struct TwitterCardTags {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub image: String,
    /// `@handle` of the site.
    pub site: Option<String>,
    /// `@handle` of the content author.
    pub creator: Option<String>,
}

/// Compose the full meta block: basic tags, then Open Graph, then Twitter.
pub fn generate_meta_tags(
    meta: &MetaTagsConfig,
    og: Option<&OpenGraphTags>,
    twitter: Option<&TwitterCardTags>,
) -> String {
    let mut blocks = vec![basic_meta_tags(meta)];
    if let Some(og) = og {
        blocks.push(open_graph_tags(og));
    }
    if let Some(twitter) = twitter {
        blocks.push(twitter_card_tags(twitter));
    }
    blocks.join("\n\n")
}

/// Charset, viewport, title, description, keywords, author, robots, canonical.
pub fn basic_meta_tags(meta: &MetaTagsConfig) -> String {
    let mut tags = TagWriter::default();

    tags.raw(CHARSET_TAG);
    tags.raw(VIEWPORT_TAG);
    tags.line(format_args!("<title>{}</title>", escape(&meta.title)));

    let description = truncate_description(&meta.description, DESCRIPTION_MAX_LEN);
    tags.named("description", &description);

    if let Some(keywords) = join_keywords(meta.keywords.as_deref()) {
        tags.named("keywords", &keywords);
    }
    if let Some(author) = non_empty(meta.author.as_deref()) {
        tags.named("author", author);
    }
    if let Some(robots) = non_empty(meta.robots.as_deref()) {
        tags.named("robots", robots);
    }

    tags.line(format_args!(
        r#"<link rel="canonical" href="{}">"#,
        escape(&meta.canonical_url)
    ));
    tags.finish()
}

/// The five required `og:*` properties plus optional site name and locale.
pub fn open_graph_tags(og: &OpenGraphTags) -> String {
    let mut tags = TagWriter::default();

    tags.property("og:title", &og.og_title);
    tags.property("og:description", &og.og_description);
    tags.property("og:image", &og.og_image);
    tags.property("og:type", &og.og_type);
    tags.property("og:url", &og.og_url);

    if let Some(site_name) = non_empty(og.og_site_name.as_deref()) {
        tags.property("og:site_name", site_name);
    }
    if let Some(locale) = non_empty(og.og_locale.as_deref()) {
        tags.property("og:locale", locale);
    }
    tags.finish()
}

/// The four required `twitter:*` tags plus optional site and creator handles.
pub fn twitter_card_tags(twitter: &TwitterCardTags) -> String {
    let mut tags = TagWriter::default();

    tags.named("twitter:card", twitter.card.as_str());
    tags.named("twitter:title", &twitter.title);
    tags.named("twitter:description", &twitter.description);
    tags.named("twitter:image", &twitter.image);

    if let Some(site) = non_empty(twitter.site.as_deref()) {
        tags.named("twitter:site", site);
    }
    if let Some(creator) = non_empty(twitter.creator.as_deref()) {
        tags.named("twitter:creator", creator);
    }
    tags.finish()
}

/// Comma-join non-blank keywords; `None` when nothing is left.
fn join_keywords(keywords: Option<&[String]>) -> Option<String> {
    let joined = keywords?
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}

/// Line-oriented tag accumulator.
#[derive(Default)]
struct TagWriter {
    out: String,
}

impl TagWriter {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(args);
    }

    fn raw(&mut self, tag: &str) {
        self.line(format_args!("{tag}"));
    }

    /// `<meta name="..." content="...">`
    fn named(&mut self, name: &str, content: &str) {
        self.line(format_args!(
            r#"<meta name="{name}" content="{}">"#,
            escape(content)
        ));
    }

    /// `<meta property="..." content="...">`
    fn property(&mut self, property: &str, content: &str) {
        self.line(format_args!(
            r#"<meta property="{property}" content="{}">"#,
            escape(content)
        ));
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> MetaTagsConfig {
        MetaTagsConfig {
            title: "Jane Doe | Engineer".into(),
            description: "Backend engineer building search.".into(),
            canonical_url: "https://example.com/".into(),
            keywords: Some(vec!["rust".into(), "search".into()]),
            author: Some("Jane Doe".into()),
            robots: None,
        }
    }

    fn og() -> OpenGraphTags {
        OpenGraphTags {
            og_title: "Jane Doe".into(),
            og_description: "Portfolio".into(),
            og_image: "https://example.com/og.png".into(),
            og_type: "website".into(),
            og_url: "https://example.com/".into(),
            og_site_name: None,
            og_locale: None,
        }
    }

    fn twitter() -> TwitterCardTags {
        TwitterCardTags {
            card: TwitterCard::SummaryLargeImage,
            title: "Jane Doe".into(),
            description: "Portfolio".into(),
            image: "https://example.com/og.png".into(),
            site: None,
            creator: None,
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_required_tags_appear_once() {
        let html = generate_meta_tags(&meta(), Some(&og()), Some(&twitter()));
        assert_eq!(count(&html, "<title>"), 1);
        assert_eq!(count(&html, r#"<meta name="description""#), 1);
        assert_eq!(count(&html, r#"<meta name="viewport""#), 1);
        assert_eq!(count(&html, r#"<link rel="canonical""#), 1);
        assert_eq!(count(&html, r#"<meta charset="UTF-8">"#), 1);
    }

    #[test]
    fn test_title_and_canonical_are_escaped() {
        let mut m = meta();
        m.title = "Tom & Jerry <3".into();
        m.canonical_url = "https://example.com/?a=1&b=2".into();
        let html = basic_meta_tags(&m);
        assert!(html.contains("<title>Tom &amp; Jerry &lt;3</title>"));
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_long_description_truncated() {
        let mut m = meta();
        m.description = "A".repeat(161);
        let html = basic_meta_tags(&m);
        let expected = format!(r#"<meta name="description" content="{}...">"#, "A".repeat(157));
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_description_at_limit_kept_verbatim() {
        let mut m = meta();
        m.description = "B".repeat(160);
        let html = basic_meta_tags(&m);
        assert!(html.contains(&format!(r#"content="{}">"#, "B".repeat(160))));
        assert!(!html.contains("..."));
    }

    #[test]
    fn test_description_truncated_before_escaping() {
        let mut m = meta();
        m.description = format!("{}&&&&&", "C".repeat(155));
        let html = basic_meta_tags(&m);
        // 160 raw characters fit, so all five ampersands survive escaping.
        assert_eq!(count(&html, "&amp;"), 5);
    }

    #[test]
    fn test_keywords_joined_and_escaped() {
        let mut m = meta();
        m.keywords = Some(vec!["C++".into(), "R&D".into()]);
        let html = basic_meta_tags(&m);
        assert!(html.contains(r#"<meta name="keywords" content="C++, R&amp;D">"#));
    }

    #[test]
    fn test_empty_keywords_omitted() {
        let mut m = meta();
        m.keywords = Some(vec![]);
        assert!(!basic_meta_tags(&m).contains(r#"name="keywords""#));

        m.keywords = None;
        assert!(!basic_meta_tags(&m).contains(r#"name="keywords""#));

        m.keywords = Some(vec![" ".into(), String::new()]);
        assert!(!basic_meta_tags(&m).contains(r#"name="keywords""#));
    }

    #[test]
    fn test_author_omitted_when_absent() {
        let mut m = meta();
        m.author = None;
        assert!(!basic_meta_tags(&m).contains(r#"name="author""#));
    }

    #[test]
    fn empty_author_is_omitted() {
        // Blank optional strings count as absent for every tag, author included.
        let mut m = meta();
        m.author = Some(String::new());
        assert!(!basic_meta_tags(&m).contains(r#"name="author""#));
        m.author = Some("  ".into());
        assert!(!basic_meta_tags(&m).contains(r#"name="author""#));
    }

    #[test]
    fn test_robots_tag_optional() {
        let mut m = meta();
        assert!(!basic_meta_tags(&m).contains(r#"name="robots""#));
        m.robots = Some("index, follow".into());
        assert!(basic_meta_tags(&m).contains(r#"<meta name="robots" content="index, follow">"#));
    }

    #[test]
    fn test_open_graph_required_tags() {
        let html = open_graph_tags(&og());
        for prop in ["og:title", "og:description", "og:image", "og:type", "og:url"] {
            assert_eq!(count(&html, &format!(r#"property="{prop}""#)), 1, "{prop}");
        }
        assert_eq!(count(&html, "<meta property=\"og:"), 5);
        assert!(!html.contains("og:site_name"));
    }

    #[test]
    fn test_open_graph_site_name_iff_present() {
        let mut tags = og();
        tags.og_site_name = Some("Jane's Site".into());
        let html = open_graph_tags(&tags);
        assert!(html.contains(r#"<meta property="og:site_name" content="Jane&#039;s Site">"#));

        tags.og_site_name = Some(String::new());
        assert!(!open_graph_tags(&tags).contains("og:site_name"));
    }

    #[test]
    fn test_open_graph_locale_iff_present() {
        let mut tags = og();
        assert!(!open_graph_tags(&tags).contains("og:locale"));
        tags.og_locale = Some("en_US".into());
        assert!(open_graph_tags(&tags).contains(r#"<meta property="og:locale" content="en_US">"#));
    }

    #[test]
    fn test_twitter_required_tags() {
        let html = twitter_card_tags(&twitter());
        assert_eq!(count(&html, "<meta name=\"twitter:"), 4);
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(!html.contains("twitter:site"));
        assert!(!html.contains("twitter:creator"));
    }

    #[test]
    fn test_twitter_handles_independent() {
        let mut tags = twitter();
        tags.creator = Some("@jane".into());
        let html = twitter_card_tags(&tags);
        assert!(html.contains(r#"<meta name="twitter:creator" content="@jane">"#));
        assert!(!html.contains("twitter:site"));

        tags.site = Some("@janesite".into());
        tags.creator = None;
        let html = twitter_card_tags(&tags);
        assert!(html.contains(r#"<meta name="twitter:site" content="@janesite">"#));
        assert!(!html.contains("twitter:creator"));
    }

    #[test]
    fn test_twitter_card_serde_names() {
        let card: TwitterCard = serde_json::from_str("\"summary\"").unwrap();
        assert_eq!(card, TwitterCard::Summary);
        assert_eq!(TwitterCard::Player.to_string(), "player");
    }

    #[test]
    fn test_compose_without_social_blocks() {
        let html = generate_meta_tags(&meta(), None, None);
        assert!(!html.contains("og:"));
        assert!(!html.contains("twitter:"));
    }
}
