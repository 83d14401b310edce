//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                          |
//! |---------|--------------|----------------------------------|
//! | `serve` | `[serve]`    | HTTP server                      |
//! | `site`  | `[site]`     | Site identity and SEO defaults   |
//!
//! Profile content (`[person]`, `[[experience]]`, ...) is described in
//! [`crate::profile`].

mod serve;
pub mod site;

pub use serve::ServeConfig;
pub use site::SiteSection;
