//! Values held by the service-request wizard between steps.

use super::catalog::{Budget, PackageSelection, ServiceKind, Timeline, UpdateType};
use crate::submission::FormPayload;
use std::collections::BTreeSet;
use std::fmt;

/// Fields of the service-request form. The key doubles as the payload field
/// name and the validation error key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceRequestField {
    Services,
    ProjectDescription,
    Budget,
    Timeline,
    WebsiteUrl,
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Package,
    ManagedHosting,
    UpdateType,
}

impl ServiceRequestField {
    pub fn key(&self) -> &'static str {
        match self {
            ServiceRequestField::Services => "services",
            ServiceRequestField::ProjectDescription => "project-description",
            ServiceRequestField::Budget => "budget",
            ServiceRequestField::Timeline => "timeline",
            ServiceRequestField::WebsiteUrl => "website-url",
            ServiceRequestField::FirstName => "first-name",
            ServiceRequestField::LastName => "last-name",
            ServiceRequestField::Email => "email",
            ServiceRequestField::Phone => "phone",
            ServiceRequestField::Company => "company",
            ServiceRequestField::Package => "package",
            ServiceRequestField::ManagedHosting => "managed-hosting",
            ServiceRequestField::UpdateType => "update-type",
        }
    }
}

impl fmt::Display for ServiceRequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Everything the visitor has entered so far.
///
/// Budget and timeline stay `None` until a listed option is chosen; a raw
/// value outside the catalog is remembered separately so validation can
/// report it instead of silently dropping it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRequestForm {
    services: BTreeSet<ServiceKind>,
    pub project_description: String,
    budget: Option<Budget>,
    timeline: Option<Timeline>,
    budget_raw: String,
    timeline_raw: String,
    pub website_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub package: Option<PackageSelection>,
    managed_hosting: bool,
    pub update_type: Option<UpdateType>,
}

impl ServiceRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Services ====================

    pub fn services(&self) -> impl Iterator<Item = ServiceKind> + '_ {
        self.services.iter().copied()
    }

    pub fn has_service(&self, service: ServiceKind) -> bool {
        self.services.contains(&service)
    }

    pub fn has_any_service(&self) -> bool {
        !self.services.is_empty()
    }

    pub fn select_service(&mut self, service: ServiceKind) {
        self.services.insert(service);
    }

    /// Deselecting the last hosting-capable service drops the add-on.
    pub fn deselect_service(&mut self, service: ServiceKind) {
        self.services.remove(&service);
        if !self.managed_hosting_available() {
            self.managed_hosting = false;
        }
    }

    /// Returns whether the service is selected afterwards.
    pub fn toggle_service(&mut self, service: ServiceKind) -> bool {
        if self.has_service(service) {
            self.deselect_service(service);
            false
        } else {
            self.select_service(service);
            true
        }
    }

    // ==================== Managed hosting ====================

    pub fn managed_hosting_available(&self) -> bool {
        self.services.iter().any(ServiceKind::offers_managed_hosting)
    }

    pub fn managed_hosting(&self) -> bool {
        self.managed_hosting
    }

    /// Enabling is ignored while no hosting-capable service is selected.
    /// Returns the resulting flag.
    pub fn set_managed_hosting(&mut self, enabled: bool) -> bool {
        self.managed_hosting = enabled && self.managed_hosting_available();
        self.managed_hosting
    }

    // ==================== Budget / timeline ====================

    pub fn budget(&self) -> Option<Budget> {
        self.budget
    }

    pub fn timeline(&self) -> Option<Timeline> {
        self.timeline
    }

    pub fn set_budget(&mut self, budget: Budget) {
        self.budget = Some(budget);
        self.budget_raw = budget.value().to_string();
    }

    pub fn set_timeline(&mut self, timeline: Timeline) {
        self.timeline = Some(timeline);
        self.timeline_raw = timeline.value().to_string();
    }

    /// Record a submitted option value, listed or not.
    pub fn set_budget_value(&mut self, value: &str) {
        self.budget = Budget::from_value(value);
        self.budget_raw = value.trim().to_string();
    }

    pub fn set_timeline_value(&mut self, value: &str) {
        self.timeline = Timeline::from_value(value);
        self.timeline_raw = value.trim().to_string();
    }

    pub fn budget_raw(&self) -> &str {
        &self.budget_raw
    }

    pub fn timeline_raw(&self) -> &str {
        &self.timeline_raw
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    // ==================== Payload conversion ====================

    /// Rebuild the form from posted fields. Unknown service values are
    /// ignored; hosting is only honoured alongside a hosting-capable service.
    pub fn from_payload(payload: &FormPayload) -> Self {
        let mut form = Self::new();
        for value in payload.strings(ServiceRequestField::Services.key()) {
            if let Ok(service) = value.parse::<ServiceKind>() {
                form.select_service(service);
            }
        }
        form.project_description = payload.text(ServiceRequestField::ProjectDescription.key());
        form.set_budget_value(&payload.text(ServiceRequestField::Budget.key()));
        form.set_timeline_value(&payload.text(ServiceRequestField::Timeline.key()));
        form.website_url = payload.text(ServiceRequestField::WebsiteUrl.key());
        form.first_name = payload.text(ServiceRequestField::FirstName.key());
        form.last_name = payload.text(ServiceRequestField::LastName.key());
        form.email = payload.text(ServiceRequestField::Email.key());
        form.phone = payload.text(ServiceRequestField::Phone.key());
        form.company = payload.text(ServiceRequestField::Company.key());
        form.package = PackageSelection::parse(&payload.text(ServiceRequestField::Package.key()));
        form.set_managed_hosting(payload.flag(ServiceRequestField::ManagedHosting.key()));
        form.update_type = UpdateType::new(payload.text(ServiceRequestField::UpdateType.key()));
        form
    }

    /// Field map as forwarded to the relay. Optional fields are omitted
    /// when blank.
    pub fn to_payload(&self) -> FormPayload {
        let services: Vec<&str> = self.services.iter().map(ServiceKind::value).collect();
        let mut payload = FormPayload::new()
            .with(ServiceRequestField::Services.key(), services)
            .with(
                ServiceRequestField::ProjectDescription.key(),
                self.project_description.as_str(),
            )
            .with(ServiceRequestField::Budget.key(), self.budget_raw.as_str())
            .with(ServiceRequestField::Timeline.key(), self.timeline_raw.as_str())
            .with(ServiceRequestField::FirstName.key(), self.first_name.as_str())
            .with(ServiceRequestField::LastName.key(), self.last_name.as_str())
            .with(ServiceRequestField::Email.key(), self.email.as_str());

        let optional = [
            (ServiceRequestField::WebsiteUrl, self.website_url.as_str()),
            (ServiceRequestField::Phone, self.phone.as_str()),
            (ServiceRequestField::Company, self.company.as_str()),
        ];
        for (field, value) in optional {
            if !value.trim().is_empty() {
                payload.insert(field.key(), value);
            }
        }
        if let Some(package) = &self.package {
            payload.insert(ServiceRequestField::Package.key(), package.value());
        }
        if self.managed_hosting {
            payload.insert(ServiceRequestField::ManagedHosting.key(), true);
        }
        if let Some(update_type) = &self.update_type {
            payload.insert(ServiceRequestField::UpdateType.key(), update_type.value());
        }
        payload
    }
}
