//! Submission values shared by the orchestrator and the wizard.

pub mod form_type;
pub mod outcome;
pub mod payload;

pub use form_type::FormType;
pub use outcome::{OutcomeKind, SubmissionOutcome};
pub use payload::FormPayload;
