//! Content store port
//!
//! Defines the interface for loading the blog and work collections.

use agency_domain::{BlogPost, DomainError, WorkProject};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a collection
#[derive(Error, Debug)]
pub enum ContentStoreError {
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Invalid front matter in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid collection: {0}")]
    Invalid(#[from] DomainError),
}

/// Source of published content
///
/// Collections are returned unfiltered and unsorted; drafts included.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentStoreError>;

    async fn work_projects(&self) -> Result<Vec<WorkProject>, ContentStoreError>;
}
