//! Result of one submission attempt, as shown to the visitor.

use crate::form::validation::ValidationResult;
use serde::{Deserialize, Serialize};

pub const MSG_SUBMITTED: &str = "Form submitted successfully.";
pub const MSG_TOKEN_MISSING: &str = "Turnstile token is missing. Please confirm you are not a bot.";
pub const MSG_TOKEN_REJECTED: &str =
    "Turnstile verification failed. Please confirm you are not a bot.";
pub const MSG_VERIFICATION_ERROR: &str = "An error occurred during token verification.";
pub const MSG_RELAY_REJECTED: &str = "Failed to submit the form. Please try again later.";
pub const MSG_RELAY_UNAVAILABLE: &str =
    "An error occurred while submitting the form. Please try again later.";
pub const MSG_INVALID_FIELDS: &str = "Please correct the highlighted fields and try again.";

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The relay accepted the form.
    Submitted,
    /// Server-side field validation failed; nothing was sent anywhere.
    Invalid,
    /// No bot-verification token was supplied.
    VerificationMissing,
    /// The verifier rejected the token or could not be reached.
    VerificationFailed,
    /// The relay answered with a non-success status.
    RelayRejected,
    /// The relay could not be reached.
    RelayUnavailable,
}

impl OutcomeKind {
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeKind::Submitted)
    }

    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            OutcomeKind::VerificationMissing | OutcomeKind::VerificationFailed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub kind: OutcomeKind,
    pub message: String,
    /// Field errors, only for [`OutcomeKind::Invalid`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationResult>,
}

impl SubmissionOutcome {
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
        }
    }

    pub fn invalid(errors: ValidationResult) -> Self {
        Self {
            kind: OutcomeKind::Invalid,
            message: MSG_INVALID_FIELDS.to_string(),
            errors: Some(errors),
        }
    }

    pub fn submitted() -> Self {
        Self::new(OutcomeKind::Submitted, MSG_SUBMITTED)
    }

    pub fn verification_missing() -> Self {
        Self::new(OutcomeKind::VerificationMissing, MSG_TOKEN_MISSING)
    }

    pub fn verification_rejected() -> Self {
        Self::new(OutcomeKind::VerificationFailed, MSG_TOKEN_REJECTED)
    }

    pub fn verification_error() -> Self {
        Self::new(OutcomeKind::VerificationFailed, MSG_VERIFICATION_ERROR)
    }

    /// Relay refused the form; its own message is surfaced when present.
    pub fn relay_rejected(relay_message: Option<&str>) -> Self {
        let message = relay_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(MSG_RELAY_REJECTED);
        Self::new(OutcomeKind::RelayRejected, message)
    }

    pub fn relay_unavailable() -> Self {
        Self::new(OutcomeKind::RelayUnavailable, MSG_RELAY_UNAVAILABLE)
    }

    pub fn success(&self) -> bool {
        self.kind.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_rejected_prefers_relay_message() {
        let outcome = SubmissionOutcome::relay_rejected(Some("Invalid access key"));
        assert_eq!(outcome.message, "Invalid access key");
        assert!(!outcome.success());

        let fallback = SubmissionOutcome::relay_rejected(Some("   "));
        assert_eq!(fallback.message, MSG_RELAY_REJECTED);
        assert_eq!(SubmissionOutcome::relay_rejected(None).message, MSG_RELAY_REJECTED);
    }

    #[test]
    fn test_invalid_carries_errors() {
        let mut errors = ValidationResult::new();
        errors.add_error("email", "Email address is required.");
        let outcome = SubmissionOutcome::invalid(errors);
        assert!(!outcome.success());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "invalid");
        assert_eq!(json["errors"]["email"][0], "Email address is required.");
        assert!(serde_json::to_value(SubmissionOutcome::submitted()).unwrap().get("errors").is_none());
    }

    #[test]
    fn test_outcome_kinds() {
        assert!(SubmissionOutcome::submitted().success());
        assert!(SubmissionOutcome::verification_missing().kind.is_verification_failure());
        assert!(SubmissionOutcome::verification_error().kind.is_verification_failure());
        assert!(!SubmissionOutcome::relay_unavailable().kind.is_verification_failure());
    }
}
