//! Layered environment lookup.
//!
//! Each key is looked up in order:
//!
//! 1. runtime bindings supplied by the caller (`--env KEY=VALUE`)
//! 2. the process environment
//! 3. the caller's default
//!
//! The first value that is non-empty after trimming wins. An empty string is
//! indistinguishable from an unset variable.

use rustc_hash::FxHashMap;
use std::fmt;

/// Recognised environment keys.
pub mod keys {
    pub const SITE_URL: &str = "SITE_URL";
    pub const SITE_DOMAIN: &str = "SITE_DOMAIN";
    pub const GA_MEASUREMENT_ID: &str = "GA_MEASUREMENT_ID";
    pub const GSC_VERIFICATION_ID: &str = "GSC_VERIFICATION_ID";
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// A read-only source of environment values.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Caller-supplied runtime bindings.
pub type EnvBindings = FxHashMap<String, String>;

impl EnvSource for EnvBindings {
    fn get(&self, key: &str) -> Option<String> {
        FxHashMap::get(self, key).cloned()
    }
}

/// Resolves keys across runtime bindings and the process environment.
pub struct EnvResolver<'a> {
    runtime: &'a dyn EnvSource,
    process: &'a dyn EnvSource,
}

impl<'a> EnvResolver<'a> {
    pub fn new(runtime: &'a dyn EnvSource, process: &'a dyn EnvSource) -> Self {
        Self { runtime, process }
    }

    /// First non-empty value, trimmed.
    pub fn get(&self, key: &str) -> Option<String> {
        [self.runtime, self.process].into_iter().find_map(|source| {
            source
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    }

    /// First non-empty value, or `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Deployment environment; gates debug-only behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// `development` (any case) selects development; anything else is production.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `KEY=VALUE` binding (clap value parser).
pub fn parse_binding(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
