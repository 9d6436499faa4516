//! Structured configuration problems.
//!
//! Loaders report issues instead of failing outright so that a site with,
//! say, no contact-form key can still serve content.

use crate::submission::FormType;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: something will be unavailable or fall back to a default.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// No bot-verification secret; every submission will be rejected.
    MissingVerifierSecret,
    /// No relay access key for this form family.
    MissingRelayKey(FormType),
    /// A string field did not parse into its enum; the default is used.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `items_per_page` is zero.
    ZeroPageSize,
    /// Bind address is not a `host:port` socket address.
    InvalidBindAddress,
    /// Pre-fill lifetime is zero or negative.
    NonPositivePrefillTtl,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
