//! Field validation for the public forms.
//!
//! Every pass builds a fresh [`ValidationResult`]; nothing carries over
//! between steps or submissions.

use super::state::{ServiceRequestField, ServiceRequestForm};
use super::wizard::WizardStep;
use crate::submission::{FormPayload, FormType};
use regex::Regex;
use serde::Serialize;
use serde::ser::SerializeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum digits in an accepted phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

pub const MSG_SERVICES_REQUIRED: &str = "Please select at least one service.";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Project description is required.";
pub const MSG_BUDGET_REQUIRED: &str = "Please select a budget range.";
pub const MSG_TIMELINE_REQUIRED: &str = "Please select a desired timeline.";
pub const MSG_URL_INVALID: &str = "Please enter a valid URL (e.g., https://example.com).";
pub const MSG_FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const MSG_LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_EMAIL_REQUIRED: &str = "Email address is required.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_PHONE_INVALID: &str = "Please enter a valid 10-digit phone number.";
pub const MSG_SUBJECT_REQUIRED: &str = "Please select a subject.";
pub const MSG_MESSAGE_REQUIRED: &str = "Message is required.";

/// Field errors in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<(String, Vec<String>)>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.errors.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((field, vec![message])),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for(&self, field: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(f, _)| f.as_str())
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|(_, m)| m.len()).sum()
    }

    /// All messages, field order then message order, joined by `separator`.
    pub fn formatted(&self, separator: &str) -> String {
        self.messages().collect::<Vec<_>>().join(separator)
    }

    pub fn merge(&mut self, other: ValidationResult) {
        for (field, messages) in other.errors {
            for message in messages {
                self.add_error(field.clone(), message);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, messages) in &self.errors {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

// ==================== Field rules ====================

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// At least [`MIN_PHONE_DIGITS`] digits once punctuation is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Absolute URL with a scheme, as a browser's `URL` constructor would accept.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value.trim()).is_ok()
}

fn require(result: &mut ValidationResult, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        result.add_error(field, message);
    }
}

fn check_email(result: &mut ValidationResult, value: &str) {
    if value.trim().is_empty() {
        result.add_error("email", MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(value) {
        result.add_error("email", MSG_EMAIL_INVALID);
    }
}

fn check_optional_phone(result: &mut ValidationResult, value: &str) {
    if !value.trim().is_empty() && !is_valid_phone(value) {
        result.add_error("phone", MSG_PHONE_INVALID);
    }
}

// ==================== Service request ====================

/// Checks for one wizard step. The review step has none.
pub fn validate_step(step: WizardStep, form: &ServiceRequestForm) -> ValidationResult {
    let mut result = ValidationResult::new();
    match step {
        WizardStep::Services => {
            if !form.has_any_service() {
                result.add_error(ServiceRequestField::Services.key(), MSG_SERVICES_REQUIRED);
            }
        }
        WizardStep::Details => {
            require(
                &mut result,
                ServiceRequestField::ProjectDescription.key(),
                &form.project_description,
                MSG_DESCRIPTION_REQUIRED,
            );
            if form.budget().is_none() {
                result.add_error(ServiceRequestField::Budget.key(), MSG_BUDGET_REQUIRED);
            }
            if form.timeline().is_none() {
                result.add_error(ServiceRequestField::Timeline.key(), MSG_TIMELINE_REQUIRED);
            }
            if !form.website_url.trim().is_empty() && !is_valid_url(&form.website_url) {
                result.add_error(ServiceRequestField::WebsiteUrl.key(), MSG_URL_INVALID);
            }
        }
        WizardStep::Contact => {
            require(
                &mut result,
                ServiceRequestField::FirstName.key(),
                &form.first_name,
                MSG_FIRST_NAME_REQUIRED,
            );
            require(
                &mut result,
                ServiceRequestField::LastName.key(),
                &form.last_name,
                MSG_LAST_NAME_REQUIRED,
            );
            check_email(&mut result, &form.email);
            check_optional_phone(&mut result, &form.phone);
        }
        WizardStep::Review => {}
    }
    result
}

/// Every step's checks at once, for forms that arrive already complete.
pub fn validate_service_request(form: &ServiceRequestForm) -> ValidationResult {
    let mut result = ValidationResult::new();
    for step in WizardStep::ALL {
        result.merge(validate_step(step, form));
    }
    result
}

// ==================== Contact / solution request ====================

pub fn validate_contact(payload: &FormPayload) -> ValidationResult {
    let mut result = ValidationResult::new();
    require(&mut result, "name", &payload.text("name"), MSG_NAME_REQUIRED);
    check_email(&mut result, &payload.text("email"));
    check_optional_phone(&mut result, &payload.text("phone"));
    require(&mut result, "subject", &payload.text("subject"), MSG_SUBJECT_REQUIRED);
    require(&mut result, "message", &payload.text("message"), MSG_MESSAGE_REQUIRED);
    result
}

pub fn validate_solution_request(payload: &FormPayload) -> ValidationResult {
    let mut result = ValidationResult::new();
    require(&mut result, "name", &payload.text("name"), MSG_NAME_REQUIRED);
    check_email(&mut result, &payload.text("email"));
    check_optional_phone(&mut result, &payload.text("phone"));
    result
}

/// Server-side checks for a posted form of the given family.
pub fn validate_payload(form_type: FormType, payload: &FormPayload) -> ValidationResult {
    match form_type {
        FormType::Contact => validate_contact(payload),
        FormType::ServiceRequest => {
            validate_service_request(&ServiceRequestForm::from_payload(payload))
        }
        FormType::SolutionRequest => validate_solution_request(payload),
    }
}
