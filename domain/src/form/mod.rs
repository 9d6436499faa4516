//! Service-request wizard and form validation.
//!
//! - [`catalog`]: services, packages, budgets and timelines
//! - [`state`]: the values entered so far
//! - [`validation`]: per-step and per-form checks
//! - [`prefill`]: selections carried in from pricing-page links
//! - [`wizard`]: the step state machine
//! - [`review`]: recap for the final step
//! - [`sanitize`]: scrubbing before anything leaves the site

pub mod catalog;
pub mod prefill;
pub mod review;
pub mod sanitize;
pub mod state;
pub mod validation;
pub mod wizard;

pub use catalog::{Budget, PackageKind, PackageSelection, ServiceKind, Timeline, UpdateType};
pub use prefill::PrefillContext;
pub use review::ReviewSummary;
pub use state::{ServiceRequestField, ServiceRequestForm};
pub use validation::{ValidationResult, validate_payload, validate_step};
pub use wizard::{ServiceRequestWizard, StepTransition, WizardError, WizardStep};
