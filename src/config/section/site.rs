//! `[site]` section configuration.
//!
//! Site identity and page-level SEO defaults. Every field falls back to a
//! built-in literal when missing or blank, and `SITE_URL` / `SITE_DOMAIN`
//! from the environment take precedence over this section.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Jane Doe"
//! url = "https://janedoe.dev"
//! title = "Jane Doe | Software Engineer"
//! description = "Portfolio of Jane Doe."
//! keywords = ["software engineer", "rust"]
//! og_image = "/og-image.png"
//! twitter_handle = "@janedoe"
//! ```

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_NAME: &str = "Sandeep Kommineni";
pub const DEFAULT_SITE_URL: &str = "https://sandeepkommineni.me";
pub const DEFAULT_SITE_DOMAIN: &str = "sandeepkommineni.me";
pub const DEFAULT_AUTHOR: &str = "Sandeep Kommineni";
pub const DEFAULT_TITLE: &str = "Sandeep Kommineni | Software Engineer";
pub const DEFAULT_DESCRIPTION: &str = "Software engineer building reliable backend systems, \
     distributed services, and developer tooling. Experience, projects, and contact details.";
pub const DEFAULT_KEYWORDS: [&str; 5] = [
    "Sandeep Kommineni",
    "software engineer",
    "backend engineer",
    "distributed systems",
    "portfolio",
];
pub const DEFAULT_OG_IMAGE: &str = "/og-image.png";

/// Site identity and SEO defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name, used for og:site_name.
    pub name: String,

    /// Absolute, protocol-qualified site URL.
    pub url: String,

    /// Bare domain; derived from `url` when blank.
    pub domain: String,

    pub author: String,

    /// Document `<title>`.
    pub title: String,

    pub description: String,

    pub keywords: Vec<String>,

    /// Social preview image, absolute or relative to `url`.
    pub og_image: String,

    /// Twitter `@handle` for twitter:site and twitter:creator.
    pub twitter_handle: Option<String>,

    /// Open Graph locale, e.g. `en_US`. Also sets `<html lang>`.
    pub locale: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.into(),
            url: DEFAULT_SITE_URL.into(),
            domain: String::new(),
            author: DEFAULT_AUTHOR.into(),
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            og_image: DEFAULT_OG_IMAGE.into(),
            twitter_handle: None,
            locale: None,
        }
    }
}

impl SiteSection {
    /// `url` must be absolute http(s) with a host. Blank falls back to the default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Ok(());
        }
        validate_site_url(&self.url)
    }
}

/// Check that `raw` is an absolute http(s) URL with a host.
pub fn validate_site_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| ConfigError::Validation(format!("site.url `{raw}` is invalid: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Validation(format!(
            "site.url scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::Validation(
            "site.url must have a valid host".into(),
        ));
    }
    Ok(())
}
