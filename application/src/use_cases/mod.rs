//! Use cases
//!
//! - [`submit_form`]: bot verification then relay delivery
//! - [`query_content`]: listings, lookups, related items and taxonomy

pub mod query_content;
pub mod submit_form;
