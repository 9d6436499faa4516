//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Content item has an empty slug (title: {0:?})")]
    EmptySlug(String),

    #[error("Content item '{0}' has an empty title")]
    EmptyTitle(String),

    #[error("Duplicate slug in collection: {0}")]
    DuplicateSlug(String),
}

impl DomainError {
    /// Slug of the offending item, when one is known.
    pub fn slug(&self) -> Option<&str> {
        match self {
            DomainError::EmptySlug(_) => None,
            DomainError::EmptyTitle(slug) | DomainError::DuplicateSlug(slug) => Some(slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slug_display() {
        let error = DomainError::DuplicateSlug("hello-world".to_string());
        assert_eq!(error.to_string(), "Duplicate slug in collection: hello-world");
        assert_eq!(error.slug(), Some("hello-world"));
    }

    #[test]
    fn test_empty_slug_has_no_slug() {
        assert_eq!(DomainError::EmptySlug("Title".to_string()).slug(), None);
    }
}
