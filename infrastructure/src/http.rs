//! Shared HTTP client construction for the outbound adapters.

use std::time::Duration;

const USER_AGENT: &str = concat!("agency-site/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by the verifier and the relay.
///
/// `timeout` bounds every request end to end.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
