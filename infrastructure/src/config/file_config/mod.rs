//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! with any problems reported as [`ConfigIssue`]s.

mod content;
mod logging;
mod prefill;
mod relay;
mod server;
mod verification;

pub use content::{FileContentConfig, FilePaginationConfig};
pub use logging::FileLoggingConfig;
pub use prefill::FilePrefillConfig;
pub use relay::{DEFAULT_WEB3FORMS_ENDPOINT, FileWeb3FormsConfig};
pub use server::FileServerConfig;
pub use verification::{DEFAULT_TURNSTILE_ENDPOINT, FileTurnstileConfig};

use agency_application::SiteConfig;
use agency_domain::{ConfigIssue, ConfigIssueCode, FormType};
use serde::{Deserialize, Serialize};

const REDACTED: &str = "********";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Content location, drafts and sort orders
    pub content: FileContentConfig,
    /// Listing page size
    pub pagination: FilePaginationConfig,
    /// Bot verification
    pub turnstile: FileTurnstileConfig,
    /// Form relay
    pub web3forms: FileWeb3FormsConfig,
    /// Pricing-page pre-fill
    pub prefill: FilePrefillConfig,
    /// Optional log file output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Bind address and timeouts
    /// 2. Enum parse failures for sort keys and orders, page size
    /// 3. Pre-fill lifetime
    /// 4. Missing verification secret and relay keys
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_site_config().1
    }

    /// Convert into the application's configuration, collecting issues
    /// for every value that fell back to a default.
    pub fn to_site_config(&self) -> (SiteConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (server, server_issues) = self.server.to_server_params();
        issues.extend(server_issues);

        let (content, content_issues) = self.content.to_content_params(&self.pagination);
        issues.extend(content_issues);

        let (ttl, ttl_issues) = self.prefill.to_ttl();
        issues.extend(ttl_issues);

        if self.turnstile.secret().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingVerifierSecret,
                "turnstile.secret_key is not set (CF_TURNSTILE_SECRET_KEY); every form submission will fail verification",
            ));
        }
        for form_type in FormType::ALL {
            if self.web3forms.key_for(form_type).is_none() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::MissingRelayKey(form_type),
                    format!(
                        "web3forms: no access key for '{}' forms; those submissions will be refused",
                        form_type
                    ),
                ));
            }
        }

        (SiteConfig::new(content, server, ttl), issues)
    }

    /// Copy safe to print: secrets are masked.
    pub fn redacted(&self) -> Self {
        let mask = |v: &Option<String>| v.as_ref().map(|_| REDACTED.to_string());
        let mut copy = self.clone();
        copy.turnstile.secret_key = mask(&self.turnstile.secret_key);
        copy.web3forms.contact_key = mask(&self.web3forms.contact_key);
        copy.web3forms.service_request_key = mask(&self.web3forms.service_request_key);
        copy.web3forms.solution_request_key = mask(&self.web3forms.solution_request_key);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9000"
request_timeout_secs = 5

[content]
root = "content"
work_order = "desc"

[pagination]
items_per_page = 9

[turnstile]
secret_key = "secret"

[web3forms]
contact_key = "c"
service_request_key = "s"
solution_request_key = "o"

[prefill]
ttl_minutes = 15

[logging]
dir = "/var/log/agency-site"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (site, issues) = config.to_site_config();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
        assert_eq!(site.server().bind.port(), 9000);
        assert_eq!(site.content().items_per_page, 9);
        assert_eq!(site.prefill_ttl(), chrono::TimeDelta::minutes(15));
        assert!(config.logging.dir.is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_secrets_are_warnings() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::MissingVerifierSecret));
        assert!(issues
            .iter()
            .any(|i| i.code == ConfigIssueCode::MissingRelayKey(FormType::SolutionRequest)));
    }

    #[test]
    fn test_redacted_masks_only_set_secrets() {
        let mut config = FileConfig::default();
        config.turnstile.secret_key = Some("real-secret".to_string());
        let shown = config.redacted();
        assert_eq!(shown.turnstile.secret_key.as_deref(), Some(REDACTED));
        assert_eq!(shown.web3forms.contact_key, None);
        assert_eq!(shown.server, config.server);
    }
}
