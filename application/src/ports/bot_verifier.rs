//! Bot verification port
//!
//! Defines the interface for checking a challenge token posted with a form.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the verification service
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Verifier secret is not configured")]
    NotConfigured,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Verification service returned status {0}")]
    BadStatus(u16),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Verifier for bot-check challenge tokens
///
/// `Ok(false)` means the service answered and rejected the token; `Err` means
/// no answer could be obtained.
#[async_trait]
pub trait BotVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<bool, VerificationError>;
}
