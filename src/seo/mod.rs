//! SEO metadata generation.
//!
//! - `meta` - basic, Open Graph and Twitter Card `<head>` tags
//! - `schema` - JSON-LD structured data
//! - `analytics` - Google Analytics / Search Console tag injection
//!
//! Everything here is a pure function from typed records to markup.

pub mod analytics;
pub mod meta;
pub mod schema;

pub use meta::{MetaTagsConfig, OpenGraphTags, TwitterCard, TwitterCardTags, generate_meta_tags};
pub use schema::{
    generate_creative_work_schema, generate_education_schema, generate_person_schema,
    generate_work_experience_schema, json_ld_script,
};
