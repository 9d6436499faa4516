//! Form relay configuration from TOML (`[web3forms]` section)
//!
//! Access keys normally come from the `WEB3FORMS_*_FORM_KEY` environment
//! variables; see [`ConfigLoader`](crate::config::ConfigLoader).

use agency_domain::FormType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Raw Web3Forms configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWeb3FormsConfig {
    /// Submit endpoint
    pub endpoint: String,
    pub contact_key: Option<String>,
    pub service_request_key: Option<String>,
    pub solution_request_key: Option<String>,
}

impl Default for FileWeb3FormsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEB3FORMS_ENDPOINT.to_string(),
            contact_key: None,
            service_request_key: None,
            solution_request_key: None,
        }
    }
}

impl FileWeb3FormsConfig {
    /// Access key for a form family, treating a blank value as unset.
    pub fn key_for(&self, form_type: FormType) -> Option<&str> {
        let raw = match form_type {
            FormType::Contact => &self.contact_key,
            FormType::ServiceRequest => &self.service_request_key,
            FormType::SolutionRequest => &self.solution_request_key,
        };
        raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
