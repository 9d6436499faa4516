//! Presentation layer for agency-site
//!
//! This crate contains CLI definitions, the HTTP form endpoint,
//! render-ready wizard views and console output formatting.

pub mod cli;
pub mod http;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Collection, Command, ContentArgs};
pub use http::{build_router, serve};
pub use output::console::ConsoleFormatter;
pub use view::{StepIndicator, StepState, Toast, WizardView};
