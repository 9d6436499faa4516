//! Content collections: blog posts and work projects.
//!
//! - [`entities`]: the immutable records and the [`ContentItem`](entities::ContentItem) view
//! - [`sort`]: deterministic ordering
//! - [`query`]: filtering and lookups
//! - [`related`]: relevance-scored related items
//! - [`search`]: free-text search

pub mod entities;
pub mod query;
pub mod related;
pub mod search;
pub mod sort;
