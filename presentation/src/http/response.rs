//! Mapping of submission results onto HTTP responses.

use agency_application::SubmitFormError;
use agency_domain::{OutcomeKind, SubmissionOutcome};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const MSG_INVALID_FORM_TYPE: &str = "Invalid form type";
pub const MSG_NOT_CONFIGURED: &str = "This form is not available right now. Please try again later.";

#[must_use]
pub fn outcome_status(kind: OutcomeKind) -> StatusCode {
    match kind {
        OutcomeKind::Submitted => StatusCode::OK,
        OutcomeKind::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        OutcomeKind::VerificationMissing | OutcomeKind::VerificationFailed => {
            StatusCode::BAD_REQUEST
        }
        OutcomeKind::RelayRejected | OutcomeKind::RelayUnavailable => StatusCode::BAD_GATEWAY,
    }
}

#[must_use]
pub fn outcome_response(outcome: &SubmissionOutcome) -> Response {
    (outcome_status(outcome.kind), Json(outcome)).into_response()
}

#[must_use]
pub fn submission_error_response(err: &SubmitFormError) -> Response {
    let (status, message) = match err {
        SubmitFormError::UnknownFormType(_) => (StatusCode::BAD_REQUEST, MSG_INVALID_FORM_TYPE),
        SubmitFormError::MissingRelayKey(_) => (StatusCode::INTERNAL_SERVER_ERROR, MSG_NOT_CONFIGURED),
    };
    message_response(status, message)
}

#[must_use]
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::FormType;

    #[test]
    fn test_outcome_status_mapping() {
        assert_eq!(outcome_status(OutcomeKind::Submitted), StatusCode::OK);
        assert_eq!(outcome_status(OutcomeKind::Invalid), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(outcome_status(OutcomeKind::VerificationMissing), StatusCode::BAD_REQUEST);
        assert_eq!(outcome_status(OutcomeKind::VerificationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(outcome_status(OutcomeKind::RelayRejected), StatusCode::BAD_GATEWAY);
        assert_eq!(outcome_status(OutcomeKind::RelayUnavailable), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_configuration_errors() {
        let resp = submission_error_response(&SubmitFormError::UnknownFormType("x".into()));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = submission_error_response(&SubmitFormError::MissingRelayKey(FormType::Contact));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
