//! Documents served by the site.
//!
//! - **Page**: the root HTML document with SEO head and profile body
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Robots**: crawler directives (`robots.txt`)
//!
//! All generators are pure functions of a resolved [`SeoConfig`](crate::config::SeoConfig)
//! and the loaded profile, rendered fresh for each request.

pub mod page;
pub mod robots;
pub mod sitemap;
