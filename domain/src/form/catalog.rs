//! Fixed option catalogs for the service-request form.
//!
//! Each catalog is an enum so an unknown service, package, budget or
//! timeline can only appear at the parsing boundary, never inside the
//! wizard state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Services offered on the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    WebsiteDesignDevelopment,
    SeoAnalytics,
    BrandLogoDesign,
    EcommerceSolutions,
    BusinessSystemsSetup,
    WebsiteUpdatesAddOns,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::WebsiteDesignDevelopment,
        ServiceKind::SeoAnalytics,
        ServiceKind::BrandLogoDesign,
        ServiceKind::EcommerceSolutions,
        ServiceKind::BusinessSystemsSetup,
        ServiceKind::WebsiteUpdatesAddOns,
    ];

    /// Form value / URL parameter value.
    pub fn value(&self) -> &'static str {
        match self {
            ServiceKind::WebsiteDesignDevelopment => "website-design-development",
            ServiceKind::SeoAnalytics => "seo-analytics",
            ServiceKind::BrandLogoDesign => "brand-logo-design",
            ServiceKind::EcommerceSolutions => "ecommerce-solutions",
            ServiceKind::BusinessSystemsSetup => "business-systems-setup",
            ServiceKind::WebsiteUpdatesAddOns => "website-updates-add-ons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::WebsiteDesignDevelopment => "Website Design & Development",
            ServiceKind::SeoAnalytics => "SEO & Analytics",
            ServiceKind::BrandLogoDesign => "Brand & Logo Design",
            ServiceKind::EcommerceSolutions => "E-Commerce Solutions",
            ServiceKind::BusinessSystemsSetup => "Business Systems Setup",
            ServiceKind::WebsiteUpdatesAddOns => "Website Updates & Add-Ons",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServiceKind::WebsiteDesignDevelopment => {
                "Custom websites built for performance and conversions."
            }
            ServiceKind::SeoAnalytics => "Get found online and track your success.",
            ServiceKind::BrandLogoDesign => "Create a memorable brand identity.",
            ServiceKind::EcommerceSolutions => {
                "Sell your products online with secure, user-friendly stores."
            }
            ServiceKind::BusinessSystemsSetup => {
                "CRM, project management, accounting, and workflow automation."
            }
            ServiceKind::WebsiteUpdatesAddOns => {
                "Ongoing updates, additional pages or new features."
            }
        }
    }

    /// Whether the managed-hosting add-on can be attached to this service.
    pub fn offers_managed_hosting(&self) -> bool {
        matches!(self, ServiceKind::WebsiteDesignDevelopment)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl std::str::FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ServiceKind::ALL
            .into_iter()
            .find(|k| k.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid service: {}", s))
    }
}

/// Named packages linked from the pricing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    Starter,
    Pro,
    Custom,
    Audit,
    OneTime,
    Bundle,
    LogoOnly,
    FullBrand,
    BrandMaterials,
    SimpleStore,
    GrowingStore,
    CustomStore,
    ContentUpdate,
    NewFeature,
    BugFix,
    Performance,
}

impl PackageKind {
    pub const ALL: [PackageKind; 16] = [
        PackageKind::Starter,
        PackageKind::Pro,
        PackageKind::Custom,
        PackageKind::Audit,
        PackageKind::OneTime,
        PackageKind::Bundle,
        PackageKind::LogoOnly,
        PackageKind::FullBrand,
        PackageKind::BrandMaterials,
        PackageKind::SimpleStore,
        PackageKind::GrowingStore,
        PackageKind::CustomStore,
        PackageKind::ContentUpdate,
        PackageKind::NewFeature,
        PackageKind::BugFix,
        PackageKind::Performance,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PackageKind::Starter => "starter",
            PackageKind::Pro => "pro",
            PackageKind::Custom => "custom",
            PackageKind::Audit => "audit",
            PackageKind::OneTime => "one-time",
            PackageKind::Bundle => "bundle",
            PackageKind::LogoOnly => "logo-only",
            PackageKind::FullBrand => "full-brand",
            PackageKind::BrandMaterials => "brand-materials",
            PackageKind::SimpleStore => "simple-store",
            PackageKind::GrowingStore => "growing-store",
            PackageKind::CustomStore => "custom-store",
            PackageKind::ContentUpdate => "content-update",
            PackageKind::NewFeature => "new-feature",
            PackageKind::BugFix => "bug-fix",
            PackageKind::Performance => "performance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageKind::Starter => "Starter Package",
            PackageKind::Pro => "Pro Package",
            PackageKind::Custom => "Custom Package",
            PackageKind::Audit => "SEO Audit",
            PackageKind::OneTime => "One-Time SEO Setup",
            PackageKind::Bundle => "SEO Bundle",
            PackageKind::LogoOnly => "Logo Design Only",
            PackageKind::FullBrand => "Full Brand Identity",
            PackageKind::BrandMaterials => "Brand Materials",
            PackageKind::SimpleStore => "Simple Store",
            PackageKind::GrowingStore => "Growing Store",
            PackageKind::CustomStore => "Custom E-commerce",
            PackageKind::ContentUpdate => "Content Update",
            PackageKind::NewFeature => "New Feature Addition",
            PackageKind::BugFix => "Bug Fix",
            PackageKind::Performance => "Performance Optimization",
        }
    }
}

/// `"new-landing-page"` → `"New Landing Page"`.
pub(crate) fn title_case_slug(value: &str) -> String {
    value
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A package chosen on a pricing page. Ids outside the catalog are kept
/// verbatim so they still reach the relay, and are shown title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageSelection {
    Known(PackageKind),
    Other(String),
}

impl PackageSelection {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(
            PackageKind::ALL
                .into_iter()
                .find(|k| k.value().eq_ignore_ascii_case(value))
                .map(PackageSelection::Known)
                .unwrap_or_else(|| PackageSelection::Other(value.to_string())),
        )
    }

    pub fn value(&self) -> &str {
        match self {
            PackageSelection::Known(kind) => kind.value(),
            PackageSelection::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            PackageSelection::Known(kind) => kind.display_name().to_string(),
            PackageSelection::Other(raw) => title_case_slug(raw),
        }
    }
}

impl Serialize for PackageSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for PackageSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PackageSelection::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom("package must not be empty"))
    }
}

/// Kind of website update requested (`?type=` on the update pages).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateType(String);

impl UpdateType {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        (!value.is_empty()).then_some(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> String {
        title_case_slug(&self.0)
    }
}

/// Project budget ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "1k")]
    UnderOneThousand,
    #[serde(rename = "1k-5k")]
    OneToFiveThousand,
    #[serde(rename = "5k-15k")]
    FiveToFifteenThousand,
    #[serde(rename = "15k-50k")]
    FifteenToFiftyThousand,
    #[serde(rename = "50k+")]
    OverFiftyThousand,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::UnderOneThousand,
        Budget::OneToFiveThousand,
        Budget::FiveToFifteenThousand,
        Budget::FifteenToFiftyThousand,
        Budget::OverFiftyThousand,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Budget::UnderOneThousand => "1k",
            Budget::OneToFiveThousand => "1k-5k",
            Budget::FiveToFifteenThousand => "5k-15k",
            Budget::FifteenToFiftyThousand => "15k-50k",
            Budget::OverFiftyThousand => "50k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::UnderOneThousand => "< $1,000",
            Budget::OneToFiveThousand => "$1,000 - $5,000",
            Budget::FiveToFifteenThousand => "$5,000 - $15,000",
            Budget::FifteenToFiftyThousand => "$15,000 - $50,000",
            Budget::OverFiftyThousand => "$50,000+",
        }
    }

    /// Parse a submitted option value; the blank placeholder yields `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Budget::ALL.into_iter().find(|b| b.value() == value.trim())
    }
}

/// Desired delivery timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "1-3w")]
    OneToThreeWeeks,
    #[serde(rename = "1-2m")]
    OneToTwoMonths,
    #[serde(rename = "3-6m")]
    ThreeToSixMonths,
    #[serde(rename = "6m+")]
    OverSixMonths,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::OneToThreeWeeks,
        Timeline::OneToTwoMonths,
        Timeline::ThreeToSixMonths,
        Timeline::OverSixMonths,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Timeline::OneToThreeWeeks => "1-3w",
            Timeline::OneToTwoMonths => "1-2m",
            Timeline::ThreeToSixMonths => "3-6m",
            Timeline::OverSixMonths => "6m+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::OneToThreeWeeks => "1 - 3 Weeks",
            Timeline::OneToTwoMonths => "1 - 2 Months",
            Timeline::ThreeToSixMonths => "3 - 6 Months",
            Timeline::OverSixMonths => "6+ Months",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Timeline::ALL.into_iter().find(|t| t.value() == value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_round_trips_through_value() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.value().parse::<ServiceKind>(), Ok(kind));
        }
        assert!("plumbing".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_only_web_design_offers_hosting() {
        let offering: Vec<_> = ServiceKind::ALL
            .into_iter()
            .filter(ServiceKind::offers_managed_hosting)
            .collect();
        assert_eq!(offering, vec![ServiceKind::WebsiteDesignDevelopment]);
    }

    #[test]
    fn test_package_selection_display() {
        let known = PackageSelection::parse("pro").unwrap();
        assert_eq!(known, PackageSelection::Known(PackageKind::Pro));
        assert_eq!(known.display_name(), "Pro Package");

        let other = PackageSelection::parse("enterprise-plus").unwrap();
        assert_eq!(other.display_name(), "Enterprise Plus");
        assert_eq!(other.value(), "enterprise-plus");

        assert!(PackageSelection::parse("  ").is_none());
    }

    #[test]
    fn test_budget_and_timeline_values() {
        assert_eq!(Budget::from_value("5k-15k"), Some(Budget::FiveToFifteenThousand));
        assert_eq!(Budget::from_value(""), None);
        assert_eq!(Timeline::from_value("6m+"), Some(Timeline::OverSixMonths));
        assert_eq!(Timeline::from_value("tomorrow"), None);

        let json = serde_json::to_string(&Budget::OverFiftyThousand).unwrap();
        assert_eq!(json, "\"50k+\"");
    }

    #[test]
    fn test_update_type() {
        let t = UpdateType::new("content-update").unwrap();
        assert_eq!(t.display_name(), "Content Update");
        assert!(UpdateType::new(" ").is_none());
    }
}
