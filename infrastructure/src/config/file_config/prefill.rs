//! Pre-fill configuration from TOML (`[prefill]` section)

use agency_domain::form::prefill::DEFAULT_PREFILL_TTL_MINUTES;
use agency_domain::{ConfigIssue, ConfigIssueCode};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Raw pre-fill configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePrefillConfig {
    /// Minutes a stored pricing-page selection stays valid
    pub ttl_minutes: i64,
}

impl Default for FilePrefillConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_PREFILL_TTL_MINUTES,
        }
    }
}

impl FilePrefillConfig {
    pub fn to_ttl(&self) -> (TimeDelta, Vec<ConfigIssue>) {
        if self.ttl_minutes > 0 {
            return (TimeDelta::minutes(self.ttl_minutes), vec![]);
        }
        let issue = ConfigIssue::warning(
            ConfigIssueCode::NonPositivePrefillTtl,
            format!(
                "prefill.ttl_minutes: {} is not positive, falling back to {}",
                self.ttl_minutes, DEFAULT_PREFILL_TTL_MINUTES
            ),
        );
        (TimeDelta::minutes(DEFAULT_PREFILL_TTL_MINUTES), vec![issue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_ttl_falls_back() {
        let (ttl, issues) = FilePrefillConfig { ttl_minutes: 0 }.to_ttl();
        assert_eq!(ttl, TimeDelta::minutes(30));
        assert_eq!(issues[0].code, ConfigIssueCode::NonPositivePrefillTtl);

        let (ttl, issues) = FilePrefillConfig { ttl_minutes: 5 }.to_ttl();
        assert_eq!(ttl, TimeDelta::minutes(5));
        assert!(issues.is_empty());
    }
}
