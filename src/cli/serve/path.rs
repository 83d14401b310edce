//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request path to a file under `serve_root`.
///
/// Directories resolve to their `index.html`. Anything that escapes
/// `serve_root` (via `..`, encoded sequences or symlinks) is rejected.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.is_empty() || clean.contains("..") || clean.contains('\0') {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Request path without query string or fragment, e.g. `/a/b.png?v=1` -> `/a/b.png`.
pub fn request_path(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    match &url[..end] {
        "" => "/",
        path => path,
    }
}

/// Normalize URL: strip query string, decode, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(request_path(url))
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    decoded.trim_matches('/').to_string()
}
