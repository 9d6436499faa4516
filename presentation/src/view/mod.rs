//! Render-ready views of domain state

mod wizard_view;

pub use wizard_view::{StepIndicator, StepState, Toast, WizardView};
