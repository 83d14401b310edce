//! Embedded static resources for folio.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `page` - HTML documents served by the site (index.html, not_found.html)
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{NOT_FOUND_HTML, NotFoundVars};
//!
//! let html = NOT_FOUND_HTML.render(&NotFoundVars { path: "/missing".into() });
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod page {
    use super::{Template, TemplateVars, fill};

    /// Variables for index.html. `head` and `body` are inserted verbatim
    /// and must already be escaped.
    pub struct IndexVars {
        pub lang: String,
        pub head: String,
        pub body: String,
    }

    impl TemplateVars for IndexVars {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__FOLIO_LANG__", self.lang.as_str()),
                    ("__FOLIO_HEAD__", self.head.as_str()),
                    ("__FOLIO_BODY__", self.body.as_str()),
                ],
            )
        }
    }

    /// Root document shell.
    pub const INDEX_HTML: Template<IndexVars> = Template::new(include_str!("page/index.html"));

    /// Variables for not_found.html.
    pub struct NotFoundVars {
        /// Request path, escaped by `apply`.
        pub path: String,
    }

    impl TemplateVars for NotFoundVars {
        fn apply(&self, content: &str) -> String {
            let path = crate::utils::html::escape(&self.path);
            fill(content, &[("__FOLIO_PATH__", &*path)])
        }
    }

    /// 404 page.
    pub const NOT_FOUND_HTML: Template<NotFoundVars> =
        Template::new(include_str!("page/not_found.html"));
}
