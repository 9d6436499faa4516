//! Bot verification configuration from TOML (`[turnstile]` section)
//!
//! The secret normally comes from `CF_TURNSTILE_SECRET_KEY`; see
//! [`ConfigLoader`](crate::config::ConfigLoader).

use serde::{Deserialize, Serialize};

pub const DEFAULT_TURNSTILE_ENDPOINT: &str =
    "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Raw Turnstile configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTurnstileConfig {
    /// Siteverify endpoint
    pub endpoint: String,
    /// Server-side secret
    pub secret_key: Option<String>,
}

impl Default for FileTurnstileConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TURNSTILE_ENDPOINT.to_string(),
            secret_key: None,
        }
    }
}

impl FileTurnstileConfig {
    /// The secret, treating a blank value as unset.
    pub fn secret(&self) -> Option<&str> {
        self.secret_key.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
