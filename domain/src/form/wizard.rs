//! Four-step service-request wizard.
//!
//! ```text
//! Services ──next──▶ Details ──next──▶ Contact ──next──▶ Review ──submit──▶ done
//!     ◀──previous──      ◀──previous──     ◀──previous──
//! ```
//!
//! `next` only moves forward when the current step validates. Submission is
//! only possible from the review step, and only one submission may be in
//! flight at a time.

use super::catalog::ServiceKind;
use super::prefill::PrefillContext;
use super::review::ReviewSummary;
use super::state::ServiceRequestForm;
use super::validation::{ValidationResult, validate_step};
use crate::submission::{FormPayload, FormType, SubmissionOutcome, payload::FORM_TYPE_FIELD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wizard steps, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Services,
    Details,
    Contact,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Services,
        WizardStep::Details,
        WizardStep::Contact,
        WizardStep::Review,
    ];

    pub const COUNT: u8 = 4;

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Services => 1,
            WizardStep::Details => 2,
            WizardStep::Contact => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        WizardStep::ALL.into_iter().find(|s| s.number() == n)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Services => "Services",
            WizardStep::Details => "Project Details",
            WizardStep::Contact => "Contact Info",
            WizardStep::Review => "Review",
        }
    }

    /// Following step; the last step is its own successor.
    pub fn next(&self) -> Self {
        WizardStep::from_number(self.number() + 1).unwrap_or(*self)
    }

    /// Preceding step; the first step is its own predecessor.
    pub fn previous(&self) -> Self {
        WizardStep::from_number(self.number().saturating_sub(1)).unwrap_or(*self)
    }

    pub fn is_first(&self) -> bool {
        *self == WizardStep::Services
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStep::Review
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::Services => write!(f, "services"),
            WizardStep::Details => write!(f, "details"),
            WizardStep::Contact => write!(f, "contact"),
            WizardStep::Review => write!(f, "review"),
        }
    }
}

impl std::str::FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.trim().parse::<u8>() {
            return WizardStep::from_number(n).ok_or_else(|| format!("Invalid step: {}", s));
        }
        match s.trim().to_lowercase().as_str() {
            "services" => Ok(WizardStep::Services),
            "details" => Ok(WizardStep::Details),
            "contact" => Ok(WizardStep::Contact),
            "review" => Ok(WizardStep::Review),
            _ => Err(format!("Invalid step: {}", s)),
        }
    }
}

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTransition {
    Advanced(WizardStep),
    /// The current step failed validation; the step is unchanged.
    Blocked(ValidationResult),
    /// Already on the review step; submit instead.
    AtReview,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Submission is only possible from the review step (currently on step {0})")]
    NotAtReview(u8),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("This request has already been submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone)]
pub struct ServiceRequestWizard {
    step: WizardStep,
    form: ServiceRequestForm,
    prefill: PrefillContext,
    last_errors: Option<ValidationResult>,
    review: Option<ReviewSummary>,
    submitting: bool,
    submitted: bool,
    last_outcome: Option<SubmissionOutcome>,
}

impl ServiceRequestWizard {
    /// Start on step 1, applying the pre-fill context unless it has expired.
    pub fn new(mut prefill: PrefillContext, now: DateTime<Utc>) -> Self {
        if prefill.is_expired(now) {
            prefill.clear();
        }

        let mut form = ServiceRequestForm::new();
        if let Some(service) = prefill.service {
            form.select_service(service);
        }
        form.package = prefill.selected_package.clone();
        form.update_type = prefill.update_type.clone();
        if prefill.managed_hosting {
            form.set_managed_hosting(true);
        }

        Self {
            step: WizardStep::Services,
            form,
            prefill,
            last_errors: None,
            review: None,
            submitting: false,
            submitted: false,
            last_outcome: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &ServiceRequestForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ServiceRequestForm {
        &mut self.form
    }

    pub fn prefill(&self) -> &PrefillContext {
        &self.prefill
    }

    pub fn last_errors(&self) -> Option<&ValidationResult> {
        self.last_errors.as_ref()
    }

    pub fn review(&self) -> Option<&ReviewSummary> {
        self.review.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Toggle a service card. Selecting a hosting-capable service picks up a
    /// stored hosting preference.
    pub fn toggle_service(&mut self, service: ServiceKind) -> bool {
        let selected = self.form.toggle_service(service);
        if selected && service.offers_managed_hosting() && self.prefill.managed_hosting {
            self.form.set_managed_hosting(true);
        }
        selected
    }

    pub fn next(&mut self) -> StepTransition {
        if self.step.is_last() {
            return StepTransition::AtReview;
        }

        let result = validate_step(self.step, &self.form);
        if !result.is_valid() {
            self.last_errors = Some(result.clone());
            return StepTransition::Blocked(result);
        }

        self.last_errors = None;
        self.step = self.step.next();
        if self.step.is_last() {
            self.review = Some(ReviewSummary::from_form(&self.form));
        }
        StepTransition::Advanced(self.step)
    }

    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.last_errors = None;
        self.step
    }

    /// Sanitised field map tagged with its form type. Review step only.
    pub fn submission_payload(&self) -> Result<FormPayload, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotAtReview(self.step.number()));
        }
        Ok(self
            .form
            .to_payload()
            .with(FORM_TYPE_FIELD, FormType::ServiceRequest.as_str())
            .sanitized())
    }

    /// Mark a submission as in flight and hand out its payload.
    pub fn begin_submit(&mut self) -> Result<FormPayload, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.submitting {
            return Err(WizardError::AlreadySubmitting);
        }
        let payload = self.submission_payload()?;
        self.submitting = true;
        Ok(payload)
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success resets the form and forgets the pre-fill context; failure
    /// keeps every entered value so the visitor can retry.
    pub fn complete(&mut self, outcome: SubmissionOutcome) {
        self.submitting = false;
        if outcome.success() {
            self.form = ServiceRequestForm::new();
            self.prefill.clear();
            self.review = None;
            self.submitted = true;
        }
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::catalog::{Budget, PackageKind, PackageSelection, Timeline};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn wizard(query: &str) -> ServiceRequestWizard {
        let ctx = PrefillContext::from_query(query, now(), Duration::minutes(30));
        ServiceRequestWizard::new(ctx, now())
    }

    fn fill_to_review(w: &mut ServiceRequestWizard) {
        w.toggle_service(ServiceKind::SeoAnalytics);
        assert_eq!(w.next(), StepTransition::Advanced(WizardStep::Details));

        let form = w.form_mut();
        form.project_description = "Audit our site".to_string();
        form.set_budget(Budget::UnderOneThousand);
        form.set_timeline(Timeline::OneToThreeWeeks);
        assert_eq!(w.next(), StepTransition::Advanced(WizardStep::Contact));

        let form = w.form_mut();
        form.first_name = "Jane".to_string();
        form.last_name = "<b>Doe</b>".to_string();
        form.email = "Jane@Example.com".to_string();
        assert_eq!(w.next(), StepTransition::Advanced(WizardStep::Review));
    }

    // ==================== Steps ====================

    #[test]
    fn test_step_numbering_clamps() {
        assert_eq!(WizardStep::Services.previous(), WizardStep::Services);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!("3".parse::<WizardStep>(), Ok(WizardStep::Contact));
        assert_eq!("review".parse::<WizardStep>(), Ok(WizardStep::Review));
    }

    #[test]
    fn test_next_blocked_by_validation() {
        let mut w = wizard("");
        match w.next() {
            StepTransition::Blocked(errors) => {
                assert!(errors.errors_for("services").is_some());
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(w.step(), WizardStep::Services);
        assert!(w.last_errors().is_some());
    }

    #[test]
    fn test_previous_clears_errors_and_clamps() {
        let mut w = wizard("");
        let _ = w.next();
        assert_eq!(w.previous(), WizardStep::Services);
        assert!(w.last_errors().is_none());
    }

    #[test]
    fn test_reaching_review_builds_summary() {
        let mut w = wizard("package=audit");
        fill_to_review(&mut w);
        let review = w.review().unwrap();
        assert_eq!(review.services, vec!["SEO & Analytics"]);
        assert_eq!(review.package.as_deref(), Some("SEO Audit"));
        assert_eq!(w.next(), StepTransition::AtReview);
    }

    // ==================== Pre-fill ====================

    #[test]
    fn test_prefill_selects_service_and_hosting() {
        let w = wizard("service=website-design-development&hosting=true&package=pro");
        assert!(w.form().has_service(ServiceKind::WebsiteDesignDevelopment));
        assert!(w.form().managed_hosting());
        assert_eq!(
            w.form().package,
            Some(PackageSelection::Known(PackageKind::Pro))
        );
    }

    #[test]
    fn test_stored_hosting_applies_when_web_design_selected_later() {
        let mut w = wizard("hosting=true");
        assert!(!w.form().managed_hosting());
        w.toggle_service(ServiceKind::WebsiteDesignDevelopment);
        assert!(w.form().managed_hosting());
    }

    #[test]
    fn test_expired_prefill_applies_nothing() {
        let ctx = PrefillContext::from_query(
            "service=seo-analytics&package=pro",
            now() - Duration::hours(2),
            Duration::minutes(30),
        );
        let w = ServiceRequestWizard::new(ctx, now());
        assert!(!w.form().has_any_service());
        assert!(w.form().package.is_none());
        assert!(w.prefill().is_empty());
    }

    // ==================== Submission ====================

    #[test]
    fn test_payload_only_from_review() {
        let w = wizard("");
        assert_eq!(w.submission_payload(), Err(WizardError::NotAtReview(1)));
    }

    #[test]
    fn test_payload_is_sanitised_and_tagged() {
        let mut w = wizard("");
        fill_to_review(&mut w);
        let payload = w.submission_payload().unwrap();
        assert_eq!(payload.form_type(), Some("service-request"));
        assert_eq!(payload.get_str("last-name"), Some("Doe"));
        assert_eq!(payload.get_str("email"), Some("jane@example.com"));
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut w = wizard("");
        fill_to_review(&mut w);
        assert!(w.begin_submit().is_ok());
        assert!(w.is_submitting());
        assert_eq!(w.begin_submit(), Err(WizardError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut w = wizard("package=pro");
        fill_to_review(&mut w);
        w.begin_submit().unwrap();
        w.complete(SubmissionOutcome::relay_unavailable());

        assert!(!w.is_submitting());
        assert!(!w.is_submitted());
        assert_eq!(w.form().first_name, "Jane");
        assert!(w.prefill().selected_package.is_some());
        assert!(w.begin_submit().is_ok());
    }

    #[test]
    fn test_success_resets_form_and_prefill() {
        let mut w = wizard("package=pro&hosting=true");
        fill_to_review(&mut w);
        w.begin_submit().unwrap();
        w.complete(SubmissionOutcome::submitted());

        assert!(w.is_submitted());
        assert!(!w.is_submitting());
        assert_eq!(w.form(), &ServiceRequestForm::new());
        assert!(w.prefill().is_empty());
        assert_eq!(w.begin_submit(), Err(WizardError::AlreadySubmitted));
    }
}
