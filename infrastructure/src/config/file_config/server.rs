//! Server configuration from TOML (`[server]` section)

use agency_application::ServerParams;
use agency_application::config::DEFAULT_BIND;
use agency_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// `host:port` the form endpoint listens on
    pub bind: String,
    /// Timeout in seconds for outbound verifier and relay calls
    pub request_timeout_secs: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl FileServerConfig {
    pub fn to_server_params(&self) -> (ServerParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let defaults = ServerParams::default();
        let bind = match self.bind.parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(_) => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidBindAddress,
                    format!(
                        "server.bind: '{}' is not a socket address, falling back to '{}'",
                        self.bind, DEFAULT_BIND
                    ),
                ));
                defaults.bind
            }
        };
        let params = ServerParams {
            bind,
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        };
        (params, issues)
    }
}
