//! Read-only recap shown on the final wizard step.

use super::state::ServiceRequestForm;
use serde::Serialize;

/// Review-list label for the hosting add-on.
pub const MANAGED_HOSTING_LABEL: &str = "Managed Hosting (Add-On)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    /// Selected service display names, hosting add-on last.
    pub services: Vec<String>,
    pub description: String,
    pub budget: String,
    pub timeline: String,
    pub website_url: Option<String>,
    pub package: Option<String>,
    pub update_type: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ReviewSummary {
    pub fn from_form(form: &ServiceRequestForm) -> Self {
        let mut services: Vec<String> = form
            .services()
            .map(|s| s.display_name().to_string())
            .collect();
        if form.managed_hosting() {
            services.push(MANAGED_HOSTING_LABEL.to_string());
        }

        Self {
            services,
            description: form.project_description.trim().to_string(),
            budget: form.budget().map(|b| b.label()).unwrap_or_default().to_string(),
            timeline: form.timeline().map(|t| t.label()).unwrap_or_default().to_string(),
            website_url: non_blank(&form.website_url),
            package: form.package.as_ref().map(|p| p.display_name()),
            update_type: form.update_type.as_ref().map(|t| t.display_name()),
            name: form.full_name(),
            email: form.email.trim().to_string(),
            phone: non_blank(&form.phone),
            company: non_blank(&form.company),
        }
    }
}
