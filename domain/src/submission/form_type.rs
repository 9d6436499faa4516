//! Which public form a submission came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form families accepted by the submission endpoint. Each maps to its own
/// relay access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    Contact,
    ServiceRequest,
    SolutionRequest,
}

impl FormType {
    pub const ALL: [FormType; 3] = [
        FormType::Contact,
        FormType::ServiceRequest,
        FormType::SolutionRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Contact => "contact",
            FormType::ServiceRequest => "service-request",
            FormType::SolutionRequest => "solution-request",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contact" => Ok(FormType::Contact),
            "service-request" | "service_request" => Ok(FormType::ServiceRequest),
            "solution-request" | "solution_request" => Ok(FormType::SolutionRequest),
            _ => Err(format!("Invalid form type: {}", s)),
        }
    }
}
