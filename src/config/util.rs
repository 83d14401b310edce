//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the host component from a URL string
///
/// Returns `None` if the URL is invalid or has no host
///
/// # Examples
/// ```ignore
/// extract_url_host("https://example.com/blog")    -> Some("example.com")
/// extract_url_host("https://www.example.com:8080") -> Some("www.example.com")
/// extract_url_host("invalid")                      -> None
/// ```
pub fn extract_url_host(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    parsed.host_str().map(str::to_string)
}

/// Resolve `href` against `base`, leaving absolute URLs untouched
///
/// Falls back to plain concatenation when `base` does not parse.
pub fn absolute_url(base: &str, href: &str) -> String {
    if url::Url::parse(href).is_ok() {
        return href.to_string();
    }
    match url::Url::parse(base).and_then(|b| b.join(href)) {
        Ok(joined) => joined.into(),
        Err(_) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            href.trim_start_matches('/')
        ),
    }
}

/// Normalize a site URL to a page URL without query string or fragment
///
/// The root path always ends with `/`
pub fn page_url(url_str: &str) -> String {
    match url::Url::parse(url_str) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.into()
        }
        Err(_) => format!("{}/", url_str.trim_end_matches('/')),
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/static/img/  ← cwd
/// /home/user/site/folio.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
