//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [serve] and [site] definitions
//! ├── env.rs     # layered environment lookup
//! ├── error.rs   # ConfigError
//! ├── util.rs    # URL helpers, config file discovery
//! └── mod.rs     # SiteConfig, SeoConfig (this file)
//! ```
//!
//! `SiteConfig` is the parsed file, loaded once at startup. `SeoConfig` is
//! resolved from it plus the environment for every request and handed to
//! the formatters.
//!
//! # Precedence
//!
//! | Layer                         | Example                       |
//! |-------------------------------|-------------------------------|
//! | runtime bindings              | `folio serve --env SITE_URL=…`|
//! | process environment           | `SITE_URL=… folio serve`      |
//! | `folio.toml`                  | `[site] url = "…"`            |
//! | built-in literals             | `DEFAULT_SITE_URL`            |

pub mod env;
mod error;
pub mod section;
mod util;

pub use env::{EnvBindings, EnvResolver, EnvSource, Environment, ProcessEnv, keys, parse_binding};
pub use error::ConfigError;
pub use section::{ServeConfig, SiteSection};

use section::site::{DEFAULT_SITE_DOMAIN, DEFAULT_SITE_URL};
use util::{absolute_url, extract_url_host, find_config_file, page_url};

use crate::{
    debug, log,
    profile::{EducationData, ExperienceData, PersonData, ProjectData},
    utils::html::non_empty,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (empty when running on defaults)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Site identity and SEO defaults
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub person: PersonData,

    #[serde(default)]
    pub experience: Vec<ExperienceData>,

    #[serde(default)]
    pub projects: Vec<ProjectData>,

    #[serde(default)]
    pub education: Vec<EducationData>,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error: the built-in defaults are used and
    /// relative paths resolve against the current directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let mut config = match find_config_file(config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                log!("config"; "{} not found, using built-in defaults", config_name.display());
                let mut config = Self::default();
                config.root = std::env::current_dir()
                    .context("Failed to get current working directory")?;
                config
            }
        };

        config.validate()?;
        config.serve.static_dir = config.root.join(&config.serve.static_dir);
        debug!("config"; "static files from {}", config.serve.static_dir.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Validate values that cannot be fixed up by falling back to defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()
    }

    /// Apply `serve` command overrides.
    pub fn apply_serve_options(&mut self, interface: Option<std::net::IpAddr>, port: Option<u16>) {
        if let Some(interface) = interface {
            self.serve.interface = interface;
        }
        if let Some(port) = port {
            self.serve.port = port;
        }
    }
}

// ============================================================================
// resolved per-request configuration
// ============================================================================

/// Global site identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    /// Absolute, protocol-qualified.
    pub url: String,
    pub domain: String,
    pub author: String,
    pub description: String,
}

/// Page-level metadata defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub keywords: Vec<String>,
    /// Absolute image URL.
    pub og_image: String,
    pub twitter_handle: Option<String>,
    /// Only set when configured; no built-in fallback.
    pub locale: Option<String>,
}

/// Third-party identifiers, read from the environment only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub ga_measurement_id: Option<String>,
    pub gsc_verification_id: Option<String>,
}

/// Everything a formatter needs for one response.
#[derive(Debug, Clone)]
pub struct SeoConfig {
    pub site: SiteInfo,
    pub meta: PageMeta,
    pub person: PersonData,
    pub analytics: AnalyticsConfig,
    pub environment: Environment,
}

impl SeoConfig {
    /// Merge environment overrides with the file and built-in defaults.
    pub fn resolve(env: &EnvResolver<'_>, file: &SiteConfig) -> Self {
        let site = &file.site;
        let defaults = SiteSection::default();

        let url = env
            .get(keys::SITE_URL)
            .unwrap_or_else(|| or_default(&site.url, DEFAULT_SITE_URL));
        let domain = env
            .get(keys::SITE_DOMAIN)
            .or_else(|| non_empty(Some(site.domain.as_str())).map(str::to_string))
            .or_else(|| extract_url_host(&url))
            .unwrap_or_else(|| DEFAULT_SITE_DOMAIN.to_string());

        let author = or_default(&site.author, &defaults.author);
        let mut person = file.person.clone();
        if person.name.trim().is_empty() {
            person.name.clone_from(&author);
        }

        let og_image = absolute_url(&url, &or_default(&site.og_image, &defaults.og_image));

        Self {
            site: SiteInfo {
                name: or_default(&site.name, &defaults.name),
                domain,
                author,
                description: or_default(&site.description, &defaults.description),
                url,
            },
            meta: PageMeta {
                title: or_default(&site.title, &defaults.title),
                keywords: site.keywords.clone(),
                og_image,
                twitter_handle: non_empty(site.twitter_handle.as_deref()).map(str::to_string),
                locale: non_empty(site.locale.as_deref()).map(str::to_string),
            },
            person,
            analytics: AnalyticsConfig {
                ga_measurement_id: env.get(keys::GA_MEASUREMENT_ID),
                gsc_verification_id: env.get(keys::GSC_VERIFICATION_ID),
            },
            environment: Environment::from_value(env.get(keys::ENVIRONMENT).as_deref()),
        }
    }

    /// Site URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    /// Canonical URL of the root page (no query string or fragment).
    pub fn canonical_url(&self) -> String {
        page_url(&self.site.url)
    }

    /// Absolute URL of the sitemap.
    pub fn sitemap_url(&self) -> String {
        format!("{}/sitemap.xml", self.base_url())
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let file = SiteConfig {
            site: SiteSection {
                url: "https://example.com".into(),
                name: "Example".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let empty = EnvBindings::default();
        Self::resolve(&EnvResolver::new(&empty, &empty), &file)
    }
}

/// `value` unless it is blank.
fn or_default(value: &str, default: &str) -> String {
    non_empty(Some(value)).unwrap_or(default).to_string()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use section::site::{DEFAULT_AUTHOR, DEFAULT_TITLE};

    fn bindings(pairs: &[(&str, &str)]) -> EnvBindings {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn resolve(runtime: &[(&str, &str)], process: &[(&str, &str)], file: &SiteConfig) -> SeoConfig {
        let runtime = bindings(runtime);
        let process = bindings(process);
        SeoConfig::resolve(&EnvResolver::new(&runtime, &process), file)
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = resolve(&[], &[], &SiteConfig::default());
        assert_eq!(config.site.url, DEFAULT_SITE_URL);
        assert_eq!(config.site.domain, DEFAULT_SITE_DOMAIN);
        assert_eq!(config.site.author, DEFAULT_AUTHOR);
        assert_eq!(config.meta.title, DEFAULT_TITLE);
        assert_eq!(config.meta.og_image, "https://sandeepkommineni.me/og-image.png");
        assert_eq!(config.analytics, AnalyticsConfig::default());
        assert_eq!(config.environment, Environment::Production);
        // person falls back to the author
        assert_eq!(config.person.name, DEFAULT_AUTHOR);
    }

    #[test]
    fn test_precedence_runtime_process_file() {
        let file = test_parse_config("[site]\nurl = \"https://file.test\"");

        let config = resolve(
            &[(keys::SITE_URL, "https://runtime.test")],
            &[(keys::SITE_URL, "https://process.test")],
            &file,
        );
        assert_eq!(config.site.url, "https://runtime.test");

        let config = resolve(&[], &[(keys::SITE_URL, "https://process.test")], &file);
        assert_eq!(config.site.url, "https://process.test");

        let config = resolve(&[(keys::SITE_URL, "")], &[], &file);
        assert_eq!(config.site.url, "https://file.test");
    }

    #[test]
    fn test_blank_file_values_fall_back() {
        let file = test_parse_config("[site]\nurl = \"\"\ntitle = \"  \"");
        let config = resolve(&[], &[], &file);
        assert_eq!(config.site.url, DEFAULT_SITE_URL);
        assert_eq!(config.meta.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_domain_derived_from_url() {
        let config = resolve(&[(keys::SITE_URL, "https://www.jane.dev/")], &[], &SiteConfig::default());
        assert_eq!(config.site.domain, "www.jane.dev");

        let config = resolve(
            &[(keys::SITE_URL, "https://www.jane.dev/")],
            &[(keys::SITE_DOMAIN, "jane.dev")],
            &SiteConfig::default(),
        );
        assert_eq!(config.site.domain, "jane.dev");
    }

    #[test]
    fn test_analytics_and_environment_from_env() {
        let config = resolve(
            &[(keys::ENVIRONMENT, "development")],
            &[
                (keys::GA_MEASUREMENT_ID, "G-ABC"),
                (keys::GSC_VERIFICATION_ID, ""),
            ],
            &SiteConfig::default(),
        );
        assert_eq!(config.analytics.ga_measurement_id.as_deref(), Some("G-ABC"));
        assert_eq!(config.analytics.gsc_verification_id, None);
        assert!(config.environment.is_development());
    }

    #[test]
    fn test_urls() {
        let config = resolve(&[(keys::SITE_URL, "https://example.com/")], &[], &SiteConfig::default());
        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.canonical_url(), "https://example.com/");
        assert_eq!(config.sitemap_url(), "https://example.com/sitemap.xml");
    }

    #[test]
    fn test_locale_only_when_configured() {
        assert_eq!(resolve(&[], &[], &SiteConfig::default()).meta.locale, None);

        let file = test_parse_config("[site]\nlocale = \" \"");
        assert_eq!(resolve(&[], &[], &file).meta.locale, None);

        let file = test_parse_config("[site]\nlocale = \"de_DE\"");
        assert_eq!(resolve(&[], &[], &file).meta.locale.as_deref(), Some("de_DE"));
    }

    #[test]
    fn test_twitter_handle_blank_is_absent() {
        let file = test_parse_config("[site]\ntwitter_handle = \"\"");
        assert_eq!(resolve(&[], &[], &file).meta.twitter_handle, None);
    }

    #[test]
    fn test_profile_tables_parse() {
        let config = test_parse_config(
            r#"
            [person]
            name = "Jane Doe"

            [[experience]]
            company = "Acme"
            role = "Engineer"

            [[projects]]
            name = "folio"

            [[education]]
            institution = "State University"
            "#,
        );
        assert_eq!(config.person.name, "Jane Doe");
        assert_eq!(config.experience.len(), 1);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.education.len(), 1);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[site]\nnmae = \"typo\"\n[extra]\nx = 1").unwrap();
        assert!(ignored.contains(&"site.nmae".to_string()));
        assert!(ignored.iter().any(|f| f.starts_with("extra")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SiteConfig::from_str("[site\nurl = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[site]\nurl = \"https://jane.dev\"\n[serve]\nport = 9000").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site.url, "https://jane.dev");
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.root, dir.path());
        assert_eq!(config.serve.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_load_rejects_relative_site_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[site]\nurl = \"jane.dev\"").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_serve_options() {
        let mut config = SiteConfig::default();
        config.apply_serve_options(None, Some(8080));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.interface, ServeConfig::default().interface);
    }
}
