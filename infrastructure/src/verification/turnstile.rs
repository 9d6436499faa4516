//! Cloudflare Turnstile verifier.
//!
//! Posts `{secret, response}` to the siteverify endpoint and reads the
//! `success` flag from the JSON answer.

use agency_application::{BotVerifier, VerificationError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize)]
struct SiteverifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
}

#[derive(Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// [`BotVerifier`] backed by the Turnstile siteverify API.
pub struct TurnstileVerifier {
    client: reqwest::Client,
    endpoint: String,
    secret: Option<String>,
}

impl TurnstileVerifier {
    /// `secret` is `None` when no key is configured; every verification then
    /// fails with [`VerificationError::NotConfigured`].
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            secret: secret.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

fn transport_error(e: reqwest::Error) -> VerificationError {
    if e.is_timeout() {
        VerificationError::Timeout
    } else {
        VerificationError::ConnectionError(e.to_string())
    }
}

#[async_trait]
impl BotVerifier for TurnstileVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerificationError> {
        let Some(secret) = self.secret.as_deref() else {
            return Err(VerificationError::NotConfigured);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SiteverifyRequest {
                secret,
                response: token,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerificationError::BadStatus(status.as_u16()));
        }

        let body: SiteverifyResponse = response
            .json()
            .await
            .map_err(|e| VerificationError::InvalidResponse(e.to_string()))?;

        if body.success {
            debug!("Turnstile token accepted");
        } else {
            warn!("Turnstile token rejected: {:?}", body.error_codes);
        }
        Ok(body.success)
    }
}
