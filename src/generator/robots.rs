//! robots.txt generation.
//!
//! Allows every crawler on every path and points at the sitemap. Per-path
//! disallow rules are not supported.

/// Render the robots.txt body for an absolute sitemap URL.
pub fn generate_robots_txt(sitemap_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap_url}")
}
