//! Third-party script and verification tags.
//!
//! Google Analytics and Search Console are consumed only as opaque tag
//! injections. Both are omitted when their identifiers are not configured.

use crate::config::{AnalyticsConfig, Environment};
use crate::utils::html::{escape, non_empty};

const GTAG_SRC: &str = "https://www.googletagmanager.com/gtag/js";

/// `<meta name="google-site-verification">`, if a verification ID is set.
pub fn verification_meta(analytics: &AnalyticsConfig) -> Option<String> {
    let id = non_empty(analytics.gsc_verification_id.as_deref())?;
    Some(format!(
        r#"<meta name="google-site-verification" content="{}">"#,
        escape(id)
    ))
}

/// The gtag.js loader and config call, if a measurement ID is set.
///
/// In development the config call enables `debug_mode`, which routes hits
/// to the GA DebugView instead of production reports.
pub fn analytics_snippet(analytics: &AnalyticsConfig, environment: Environment) -> Option<String> {
    let id = non_empty(analytics.ga_measurement_id.as_deref())?;
    // The ID lands in both an attribute and a JS string literal.
    let attr_id = escape(id);
    let js_id = serde_json::to_string(id).ok()?.replace("</", "<\\/");
    let config = if environment.is_development() {
        "{ debug_mode: true }"
    } else {
        "{}"
    };

    Some(format!(
        "<script async src=\"{GTAG_SRC}?id={attr_id}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', {js_id}, {config});\n\
         </script>"
    ))
}
