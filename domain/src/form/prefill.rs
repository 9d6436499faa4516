//! Selections carried in from pricing-page links.
//!
//! A link such as `/request?service=seo-analytics&package=audit` is parsed
//! once into a [`PrefillContext`]. The context outlives the first page view
//! (it is stored under `selectedPackage`, `managedHosting` and `updateType`)
//! but expires after a fixed time and is cleared by a successful submission.

use super::catalog::{PackageSelection, ServiceKind, UpdateType};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default lifetime of a stored context.
pub const DEFAULT_PREFILL_TTL_MINUTES: i64 = 30;

pub const PARAM_SERVICE: &str = "service";
pub const PARAM_PACKAGE: &str = "package";
pub const PARAM_HOSTING: &str = "hosting";
pub const PARAM_TYPE: &str = "type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillContext {
    /// Service to pre-select on the first step. Applied once, not stored.
    #[serde(skip)]
    pub service: Option<ServiceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_package: Option<PackageSelection>,
    #[serde(default)]
    pub managed_hosting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_type: Option<UpdateType>,
    pub expires_at: DateTime<Utc>,
}

impl PrefillContext {
    /// A context with nothing selected.
    pub fn empty(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            service: None,
            selected_package: None,
            managed_hosting: false,
            update_type: None,
            expires_at: now + ttl,
        }
    }

    /// Parse a query string (with or without the leading `?`).
    ///
    /// Unknown services are ignored; `hosting` counts only when exactly
    /// `true`; blank values are treated as absent.
    pub fn from_query(query: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        let mut context = Self::empty(now, ttl);
        context.apply_query(query);
        context
    }

    /// Overlay the parameters present in `query` onto this context. Absent
    /// parameters keep their stored values.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PARAM_SERVICE => {
                    if let Ok(service) = value.parse::<ServiceKind>() {
                        self.service = Some(service);
                    }
                }
                PARAM_PACKAGE => {
                    if let Some(package) = PackageSelection::parse(&value) {
                        self.selected_package = Some(package);
                    }
                }
                PARAM_HOSTING => {
                    if value == "true" {
                        self.managed_hosting = true;
                    }
                }
                PARAM_TYPE => {
                    if let Some(update_type) = UpdateType::new(value.into_owned()) {
                        self.update_type = Some(update_type);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_empty(&self) -> bool {
        self.service.is_none()
            && self.selected_package.is_none()
            && !self.managed_hosting
            && self.update_type.is_none()
    }

    /// Forget every selection. The expiry is left as is.
    pub fn clear(&mut self) {
        self.service = None;
        self.selected_package = None;
        self.managed_hosting = false;
        self.update_type = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::catalog::PackageKind;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn ttl() -> Duration {
        Duration::minutes(DEFAULT_PREFILL_TTL_MINUTES)
    }

    #[test]
    fn test_from_query_reads_all_parameters() {
        let ctx = PrefillContext::from_query(
            "?service=website-design-development&package=pro&hosting=true&type=bug-fix",
            now(),
            ttl(),
        );
        assert_eq!(ctx.service, Some(ServiceKind::WebsiteDesignDevelopment));
        assert_eq!(
            ctx.selected_package,
            Some(PackageSelection::Known(PackageKind::Pro))
        );
        assert!(ctx.managed_hosting);
        assert_eq!(ctx.update_type.as_ref().map(UpdateType::value), Some("bug-fix"));
        assert_eq!(ctx.expires_at, now() + ttl());
    }

    #[test]
    fn test_from_query_ignores_unknown_and_blank() {
        let ctx = PrefillContext::from_query("service=plumbing&package=&hosting=yes", now(), ttl());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_apply_query_keeps_stored_values() {
        let mut ctx = PrefillContext::from_query("package=audit", now(), ttl());
        ctx.apply_query("");
        assert!(ctx.selected_package.is_some());

        ctx.apply_query("package=bundle");
        assert_eq!(
            ctx.selected_package,
            Some(PackageSelection::Known(PackageKind::Bundle))
        );
    }

    #[test]
    fn test_expiry() {
        let ctx = PrefillContext::from_query("package=pro", now(), ttl());
        assert!(!ctx.is_expired(now()));
        assert!(ctx.is_expired(now() + ttl()));
    }

    #[test]
    fn test_serialized_keys() {
        let ctx = PrefillContext::from_query("package=pro&hosting=true&type=new-feature", now(), ttl());
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["selectedPackage"], "pro");
        assert_eq!(value["managedHosting"], true);
        assert_eq!(value["updateType"], "new-feature");
        assert!(value.get("service").is_none());

        let back: PrefillContext = serde_json::from_value(value).unwrap();
        assert_eq!(back.selected_package, ctx.selected_package);
    }

    #[test]
    fn test_clear() {
        let mut ctx = PrefillContext::from_query("package=pro&hosting=true", now(), ttl());
        ctx.clear();
        assert!(ctx.is_empty());
    }
}
