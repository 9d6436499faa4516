//! Site configuration container.
//!
//! [`SiteConfig`] groups the configuration slices the binary hands out to
//! use cases and the HTTP layer. Use cases receive only the slice they need.

use crate::config::ContentParams;
use agency_domain::form::prefill::DEFAULT_PREFILL_TTL_MINUTES;
use chrono::TimeDelta;
use std::net::SocketAddr;
use std::time::Duration;

/// Default address the form endpoint listens on.
pub const DEFAULT_BIND: &str = "127.0.0.1:4321";

/// Parameters for the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerParams {
    pub bind: SocketAddr,
    /// Upper bound for each outbound call (verifier, relay).
    pub request_timeout: Duration,
}

impl Default for ServerParams {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 4321)),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    content: ContentParams,
    server: ServerParams,
    prefill_ttl: TimeDelta,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: ContentParams::default(),
            server: ServerParams::default(),
            prefill_ttl: TimeDelta::minutes(DEFAULT_PREFILL_TTL_MINUTES),
        }
    }
}

impl SiteConfig {
    pub fn new(content: ContentParams, server: ServerParams, prefill_ttl: TimeDelta) -> Self {
        Self {
            content,
            server,
            prefill_ttl,
        }
    }

    // ==================== Accessors ====================

    pub fn content(&self) -> &ContentParams {
        &self.content
    }

    pub fn server(&self) -> &ServerParams {
        &self.server
    }

    /// Lifetime of a pre-fill context built from a pricing-page link.
    pub fn prefill_ttl(&self) -> TimeDelta {
        self.prefill_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_matches_constant() {
        let config = SiteConfig::default();
        assert_eq!(config.server().bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.prefill_ttl(), TimeDelta::minutes(30));
        assert_eq!(config.content().items_per_page, 6);
    }
}
