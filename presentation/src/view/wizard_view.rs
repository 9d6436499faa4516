//! What the service-request wizard should display.
//!
//! A pure projection of [`ServiceRequestWizard`]: which step indicators are
//! completed, which buttons show, whether the managed-hosting option is
//! offered and what toast (if any) to raise. It holds no state of its own.

use agency_domain::{ServiceRequestWizard, WizardStep};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub number: u8,
    pub title: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Toast {
    Success(String),
    Error(String),
}

impl Toast {
    pub fn message(&self) -> &str {
        match self {
            Toast::Success(m) | Toast::Error(m) => m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub current_step: u8,
    pub steps: Vec<StepIndicator>,
    /// Progress lines between indicators that are filled in.
    pub completed_lines: usize,
    pub show_previous: bool,
    pub show_next: bool,
    pub show_submit: bool,
    /// Submit is disabled while a submission is in flight.
    pub submit_enabled: bool,
    pub show_hosting_option: bool,
    pub toast: Option<Toast>,
}

impl WizardView {
    pub fn from_wizard(wizard: &ServiceRequestWizard) -> Self {
        let current = wizard.step();
        let done = wizard.is_submitted();

        let steps = WizardStep::ALL
            .iter()
            .map(|step| StepIndicator {
                number: step.number(),
                title: step.title(),
                state: if done || step.number() < current.number() {
                    StepState::Completed
                } else if *step == current {
                    StepState::Active
                } else {
                    StepState::Upcoming
                },
            })
            .collect();

        let completed_lines = if done {
            usize::from(WizardStep::COUNT - 1)
        } else {
            usize::from(current.number() - 1)
        };

        let toast = match (wizard.last_outcome(), wizard.last_errors()) {
            (_, Some(errors)) => Some(Toast::Error(errors.formatted("\n"))),
            (Some(outcome), None) if outcome.success() => {
                Some(Toast::Success(outcome.message.clone()))
            }
            (Some(outcome), None) => Some(Toast::Error(outcome.message.clone())),
            (None, None) => None,
        };

        Self {
            current_step: current.number(),
            steps,
            completed_lines,
            show_previous: !done && !current.is_first(),
            show_next: !done && !current.is_last(),
            show_submit: !done && current.is_last(),
            submit_enabled: !wizard.is_submitting(),
            show_hosting_option: wizard.form().managed_hosting_available(),
            toast,
        }
    }
}

impl From<&ServiceRequestWizard> for WizardView {
    fn from(wizard: &ServiceRequestWizard) -> Self {
        Self::from_wizard(wizard)
    }
}
