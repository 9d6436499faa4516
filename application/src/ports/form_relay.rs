//! Form relay port
//!
//! Defines the interface for delivering a submitted form to the relay
//! service that emails it on the site's behalf.

use agency_domain::{FormPayload, FormType};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur before the relay produces an HTTP answer
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No relay access key configured for form type '{0}'")]
    MissingKey(FormType),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,
}

/// What the relay answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    /// Parsed JSON body, or `Null` when the body was not JSON.
    pub body: Value,
}

impl RelayReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The relay's own `message` field, if it sent one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// Relay for submitted forms
///
/// Implementations resolve the access key for each [`FormType`] and post
/// the payload exactly once.
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Whether an access key exists for this form type.
    fn is_configured(&self, form_type: FormType) -> bool;

    async fn submit(
        &self,
        form_type: FormType,
        payload: &FormPayload,
    ) -> Result<RelayReply, RelayError>;
}
