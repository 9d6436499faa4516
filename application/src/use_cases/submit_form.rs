//! Submit Form use case
//!
//! Sequences bot verification and relay delivery for one posted form.
//!
//! Configuration problems (unknown form type, missing relay key) are errors
//! and are raised before any network call. Everything the visitor can fix
//! or retry comes back as a [`SubmissionOutcome`].

use crate::ports::bot_verifier::BotVerifier;
use crate::ports::form_relay::{FormRelay, RelayError};
use agency_domain::form::validate_payload;
use agency_domain::{FormPayload, FormType, SubmissionOutcome};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that stop a submission path entirely
#[derive(Error, Debug)]
pub enum SubmitFormError {
    #[error("Unknown form type: {0:?}")]
    UnknownFormType(String),

    #[error("No relay access key configured for form type '{0}'")]
    MissingRelayKey(FormType),
}

/// Input for the SubmitForm use case
#[derive(Debug, Clone)]
pub struct SubmitFormInput {
    /// Form family as posted; parsed by the use case
    pub form_type: String,
    /// Raw posted fields, token included
    pub payload: FormPayload,
}

impl SubmitFormInput {
    pub fn new(form_type: impl Into<String>, payload: FormPayload) -> Self {
        Self {
            form_type: form_type.into(),
            payload,
        }
    }

    /// Take the form type from the payload's own `formType` field.
    pub fn from_payload(payload: FormPayload) -> Self {
        let form_type = payload.form_type().unwrap_or_default().to_string();
        Self { form_type, payload }
    }
}

/// Use case for submitting a public form
pub struct SubmitFormUseCase<V: BotVerifier + 'static, R: FormRelay + 'static> {
    verifier: Arc<V>,
    relay: Arc<R>,
    validate: bool,
}

impl<V: BotVerifier + 'static, R: FormRelay + 'static> SubmitFormUseCase<V, R> {
    pub fn new(verifier: Arc<V>, relay: Arc<R>) -> Self {
        Self {
            verifier,
            relay,
            validate: true,
        }
    }

    /// Skip server-side field validation.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    pub async fn execute(
        &self,
        input: SubmitFormInput,
    ) -> Result<SubmissionOutcome, SubmitFormError> {
        let form_type: FormType = input
            .form_type
            .parse()
            .map_err(|_| SubmitFormError::UnknownFormType(input.form_type.clone()))?;

        if !self.relay.is_configured(form_type) {
            error!("No relay access key configured for '{}'", form_type);
            return Err(SubmitFormError::MissingRelayKey(form_type));
        }

        // Step 1: token presence
        let Some(token) = input.payload.token().map(str::to_string) else {
            info!("Rejecting '{}' submission without a verification token", form_type);
            return Ok(SubmissionOutcome::verification_missing());
        };

        let mut payload = input.payload.sanitized();

        if self.validate {
            let errors = validate_payload(form_type, &payload);
            if !errors.is_valid() {
                debug!(
                    "'{}' submission failed validation on {} field(s)",
                    form_type,
                    errors.fields().count()
                );
                return Ok(SubmissionOutcome::invalid(errors));
            }
        }

        // Step 2: verification
        match self.verifier.verify(&token).await {
            Ok(true) => debug!("Verification token accepted"),
            Ok(false) => {
                warn!("Verification token rejected for '{}' submission", form_type);
                return Ok(SubmissionOutcome::verification_rejected());
            }
            Err(e) => {
                error!("Turnstile verification error: {}", e);
                return Ok(SubmissionOutcome::verification_error());
            }
        }

        // Step 3: relay
        payload.strip_control_fields();
        match self.relay.submit(form_type, &payload).await {
            Ok(reply) if reply.is_success() => {
                info!("'{}' form submitted ({} fields)", form_type, payload.len());
                Ok(SubmissionOutcome::submitted())
            }
            Ok(reply) => {
                warn!(
                    "Relay rejected '{}' submission with status {}",
                    form_type, reply.status
                );
                Ok(SubmissionOutcome::relay_rejected(reply.message()))
            }
            Err(RelayError::MissingKey(t)) => Err(SubmitFormError::MissingRelayKey(t)),
            Err(e) => {
                warn!("Relay unavailable for '{}' submission: {}", form_type, e);
                Ok(SubmissionOutcome::relay_unavailable())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::bot_verifier::VerificationError;
    use crate::ports::form_relay::RelayReply;
    use agency_domain::OutcomeKind;
    use agency_domain::submission::payload::{FORM_TYPE_FIELD, TOKEN_FIELD, TOKEN_FIELD_ALIAS};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockVerifier {
        answers: Mutex<VecDeque<Result<bool, VerificationError>>>,
        tokens: Mutex<Vec<String>>,
    }

    impl MockVerifier {
        fn new(answers: Vec<Result<bool, VerificationError>>) -> Self {
            Self {
                answers: Mutex::new(VecDeque::from(answers)),
                tokens: Mutex::new(Vec::new()),
            }
        }

        fn accepting() -> Self {
            Self::new(vec![Ok(true)])
        }

        fn calls(&self) -> usize {
            self.tokens.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl BotVerifier for MockVerifier {
        async fn verify(&self, token: &str) -> Result<bool, VerificationError> {
            self.tokens.lock().unwrap().push(token.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(VerificationError::Timeout))
        }
    }

    struct MockRelay {
        configured: Vec<FormType>,
        replies: Mutex<VecDeque<Result<RelayReply, RelayError>>>,
        submitted: Mutex<Vec<(FormType, FormPayload)>>,
    }

    impl MockRelay {
        fn new(replies: Vec<Result<RelayReply, RelayError>>) -> Self {
            Self {
                configured: FormType::ALL.to_vec(),
                replies: Mutex::new(VecDeque::from(replies)),
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn ok() -> Self {
            Self::new(vec![Ok(RelayReply::new(200, json!({"success": true})))])
        }

        fn without(mut self, form_type: FormType) -> Self {
            self.configured.retain(|t| *t != form_type);
            self
        }

        fn calls(&self) -> usize {
            self.submitted.lock().unwrap().len()
        }

        fn last_payload(&self) -> FormPayload {
            self.submitted.lock().unwrap().last().unwrap().1.clone()
        }
    }

    #[async_trait]
    impl FormRelay for MockRelay {
        fn is_configured(&self, form_type: FormType) -> bool {
            self.configured.contains(&form_type)
        }

        async fn submit(
            &self,
            form_type: FormType,
            payload: &FormPayload,
        ) -> Result<RelayReply, RelayError> {
            self.submitted
                .lock()
                .unwrap()
                .push((form_type, payload.clone()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(RelayError::Timeout))
        }
    }

    fn contact_payload() -> FormPayload {
        FormPayload::from_value(json!({
            "formType": "contact",
            "cf-turnstile-response": "token-123",
            "name": "<b>Jane</b>",
            "email": "Jane@Example.com",
            "subject": "general",
            "message": "Hello there"
        }))
        .unwrap()
    }

    fn use_case(
        verifier: MockVerifier,
        relay: MockRelay,
    ) -> (
        SubmitFormUseCase<MockVerifier, MockRelay>,
        Arc<MockVerifier>,
        Arc<MockRelay>,
    ) {
        let verifier = Arc::new(verifier);
        let relay = Arc::new(relay);
        (
            SubmitFormUseCase::new(Arc::clone(&verifier), Arc::clone(&relay)),
            verifier,
            relay,
        )
    }

    // ==================== Configuration errors ====================

    #[tokio::test]
    async fn test_unknown_form_type_is_an_error() {
        let (uc, verifier, relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let err = uc
            .execute(SubmitFormInput::new("newsletter", contact_payload()))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitFormError::UnknownFormType(t) if t == "newsletter"));
        assert_eq!(verifier.calls(), 0);
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_relay_key_before_any_call() {
        let (uc, verifier, relay) = use_case(
            MockVerifier::accepting(),
            MockRelay::ok().without(FormType::Contact),
        );
        let err = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitFormError::MissingRelayKey(FormType::Contact)));
        assert_eq!(verifier.calls(), 0);
        assert_eq!(relay.calls(), 0);
    }

    // ==================== Verification ====================

    #[tokio::test]
    async fn test_missing_token_never_reaches_relay() {
        let (uc, verifier, relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let mut payload = contact_payload();
        payload.remove(TOKEN_FIELD);

        let outcome = uc
            .execute(SubmitFormInput::from_payload(payload))
            .await
            .unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.kind, OutcomeKind::VerificationMissing);
        assert_eq!(verifier.calls(), 0);
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_alias_token_is_accepted() {
        let (uc, verifier, _relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let mut payload = contact_payload();
        payload.remove(TOKEN_FIELD);
        payload.insert(TOKEN_FIELD_ALIAS, "alias-token");

        let outcome = uc
            .execute(SubmitFormInput::from_payload(payload))
            .await
            .unwrap();
        assert!(outcome.success());
        assert_eq!(verifier.tokens.lock().unwrap()[0], "alias-token");
    }

    #[tokio::test]
    async fn test_rejected_token() {
        let (uc, _verifier, relay) = use_case(MockVerifier::new(vec![Ok(false)]), MockRelay::ok());
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::VerificationFailed);
        assert_eq!(
            outcome.message,
            "Turnstile verification failed. Please confirm you are not a bot."
        );
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_verifier_error_becomes_failed_outcome() {
        let (uc, _verifier, relay) = use_case(
            MockVerifier::new(vec![Err(VerificationError::ConnectionError(
                "refused".to_string(),
            ))]),
            MockRelay::ok(),
        );
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::VerificationFailed);
        assert_eq!(outcome.message, "An error occurred during token verification.");
        assert_eq!(relay.calls(), 0);
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_invalid_fields_stop_before_verification() {
        let (uc, verifier, relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let mut payload = contact_payload();
        payload.insert("email", "not-an-email");

        let outcome = uc
            .execute(SubmitFormInput::from_payload(payload))
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Invalid);
        assert!(outcome.errors.unwrap().errors_for("email").is_some());
        assert_eq!(verifier.calls(), 0);
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_without_validation_forwards_anything() {
        let (uc, _verifier, relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let uc = uc.without_validation();
        let payload = FormPayload::new()
            .with(FORM_TYPE_FIELD, "solution-request")
            .with(TOKEN_FIELD, "t");

        let outcome = uc
            .execute(SubmitFormInput::from_payload(payload))
            .await
            .unwrap();
        assert!(outcome.success());
        assert_eq!(relay.calls(), 1);
    }

    // ==================== Relay ====================

    #[tokio::test]
    async fn test_success_forwards_sanitised_fields_without_token() {
        let (uc, _verifier, relay) = use_case(MockVerifier::accepting(), MockRelay::ok());
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();

        assert!(outcome.success());
        assert_eq!(outcome.message, "Form submitted successfully.");

        let sent = relay.last_payload();
        assert!(!sent.contains_key(TOKEN_FIELD));
        assert!(!sent.contains_key(FORM_TYPE_FIELD));
        assert_eq!(sent.get_str("name"), Some("Jane"));
        assert_eq!(sent.get_str("email"), Some("jane@example.com"));
        assert_eq!(relay.submitted.lock().unwrap()[0].0, FormType::Contact);
    }

    #[tokio::test]
    async fn test_relay_rejection_surfaces_relay_message() {
        let relay = MockRelay::new(vec![Ok(RelayReply::new(
            400,
            json!({"success": false, "message": "Invalid access key"}),
        ))]);
        let (uc, _verifier, relay) = use_case(MockVerifier::accepting(), relay);
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::RelayRejected);
        assert_eq!(outcome.message, "Invalid access key");
        assert_eq!(relay.calls(), 1);
    }

    #[tokio::test]
    async fn test_relay_rejection_without_message_uses_fallback() {
        let relay = MockRelay::new(vec![Ok(RelayReply::new(500, serde_json::Value::Null))]);
        let (uc, _verifier, _relay) = use_case(MockVerifier::accepting(), relay);
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();
        assert_eq!(
            outcome.message,
            "Failed to submit the form. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_single_attempt() {
        let relay = MockRelay::new(vec![Err(RelayError::ConnectionError("reset".to_string()))]);
        let (uc, _verifier, relay) = use_case(MockVerifier::accepting(), relay);
        let outcome = uc
            .execute(SubmitFormInput::from_payload(contact_payload()))
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::RelayUnavailable);
        assert_eq!(
            outcome.message,
            "An error occurred while submitting the form. Please try again later."
        );
        assert_eq!(relay.calls(), 1);
    }
}
