//! Domain layer for agency-site
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Content
//!
//! Blog posts and work projects are immutable records loaded once per
//! request. Everything derived from them (taxonomy, related items, search
//! hits, pages) is recomputed on demand and never stored.
//!
//! ## Service-request wizard
//!
//! A four-step form (services, project details, contact, review) driven by
//! [`ServiceRequestWizard`]. Each step validates before the next one opens,
//! and pricing-page links can pre-fill it through a [`PrefillContext`].
//!
//! ## Submission
//!
//! A submitted form is a [`FormPayload`] tagged with a [`FormType`]; the
//! visitor-facing result is a [`SubmissionOutcome`].

pub mod config;
pub mod content;
pub mod core;
pub mod form;
pub mod pagination;
pub mod submission;
pub mod taxonomy;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use content::{
    entities::{BlogPost, ContentItem, ProjectStat, Testimonial, WorkProject},
    sort::{BlogSortKey, SortOrder, WorkSortKey},
};
pub use core::error::DomainError;
pub use form::{
    Budget, PackageKind, PackageSelection, PrefillContext, ReviewSummary, ServiceKind,
    ServiceRequestForm, ServiceRequestWizard, StepTransition, Timeline, UpdateType,
    ValidationResult, WizardError, WizardStep,
};
pub use pagination::{Paginated, PaginationUrls};
pub use submission::{FormPayload, FormType, OutcomeKind, SubmissionOutcome};
pub use taxonomy::{TaxonomyGroup, TaxonomyItem, TaxonomyKind};
