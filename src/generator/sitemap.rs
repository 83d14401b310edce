//! Sitemap generation.
//!
//! Renders the sitemap.xml document served for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00.000Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1</priority>
//!   </url>
//! </urlset>
//! ```

use crate::config::SeoConfig;
use crate::utils::{date::DateTimeUtc, html::escape_xml};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority used when a value is not a number.
const DEFAULT_PRIORITY: f64 = 0.5;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One crawlable page entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// Absolute URL without query string or fragment.
    pub loc: String,
    /// ISO 8601 timestamp.
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    /// Clamped to `[0, 1]` on output.
    pub priority: f64,
}

impl SitemapUrl {
    /// Priority clamped to `[0, 1]`; NaN falls back to the protocol default.
    pub fn clamped_priority(&self) -> f64 {
        if self.priority.is_nan() {
            DEFAULT_PRIORITY
        } else {
            self.priority.clamp(0.0, 1.0)
        }
    }
}

/// Render a complete sitemap document. Only `<loc>` is escaped; the other
/// children are enum, number, or timestamp values.
pub fn generate_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::with_capacity(128 + urls.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.changefreq.as_str());
        xml.push_str("</changefreq>\n    <priority>");
        // f64 Display is shortest-form: 1.0 -> "1", 0.8 -> "0.8"
        xml.push_str(&entry.clamped_priority().to_string());
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Entries served at `/sitemap.xml`: the canonical root page.
pub fn site_sitemap_urls(config: &SeoConfig, now: DateTimeUtc) -> Vec<SitemapUrl> {
    vec![SitemapUrl {
        loc: config.canonical_url(),
        lastmod: now.to_iso8601(),
        changefreq: ChangeFreq::Weekly,
        priority: 1.0,
    }]
}
