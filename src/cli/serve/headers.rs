//! Cache and security headers applied to every response.

use crate::utils::mime;
use std::path::Path;

pub const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";
pub const CACHE_REVALIDATE: &str = "public, max-age=0, must-revalidate";
pub const CACHE_DAILY: &str = "public, max-age=86400";
pub const CACHE_NONE: &str = "no-cache";

/// Headers sent with every response regardless of route.
pub const SECURITY_HEADERS: [(&str, &str); 2] = [
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "SAMEORIGIN"),
];

/// `Cache-Control` for a request path (query string already stripped).
///
/// | Path                            | Policy                  |
/// |---------------------------------|-------------------------|
/// | image, font, `.css`, `.js`      | one year, immutable     |
/// | `/`, `/index.html`              | always revalidate       |
/// | `/sitemap.xml`, `/robots.txt`   | one day                 |
/// | anything else                   | `no-cache`              |
pub fn cache_control(path: &str) -> &'static str {
    match path {
        "/" | "/index.html" => CACHE_REVALIDATE,
        "/sitemap.xml" | "/robots.txt" => CACHE_DAILY,
        _ if has_static_extension(path) => CACHE_IMMUTABLE,
        _ => CACHE_NONE,
    }
}

fn has_static_extension(path: &str) -> bool {
    let path = Path::new(path);
    path.extension().is_some() && mime::is_static_asset(mime::from_path(path))
}
