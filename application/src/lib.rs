//! Application layer for agency-site
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ContentParams, ServerParams, SiteConfig};
pub use ports::{
    bot_verifier::{BotVerifier, VerificationError},
    content_store::{ContentStore, ContentStoreError},
    form_relay::{FormRelay, RelayError, RelayReply},
};
pub use use_cases::query_content::{BlogQuery, QueryContentError, QueryContentUseCase, WorkQuery};
pub use use_cases::submit_form::{SubmitFormError, SubmitFormInput, SubmitFormUseCase};
