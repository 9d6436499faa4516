//! Field map carried from the browser to the relay.

use crate::form::sanitize::{normalize_email, sanitize_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bot-verification token field as posted by the widget.
pub const TOKEN_FIELD: &str = "cf-turnstile-response";
/// Alternate spelling accepted for the token field.
pub const TOKEN_FIELD_ALIAS: &str = "cf_turnstile_response";
/// Routing field naming the form family; never forwarded.
pub const FORM_TYPE_FIELD: &str = "formType";

const EMAIL_FIELD: &str = "email";

/// Ordered `field -> value` map of a submitted form.
///
/// Values stay as JSON so checkbox groups (arrays) and booleans survive the
/// trip to the relay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(Map<String, Value>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts only JSON objects.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Trimmed text of a field; missing or non-string fields read as empty.
    pub fn text(&self, key: &str) -> String {
        self.get_str(key).map(|s| s.trim().to_string()).unwrap_or_default()
    }

    /// Values of a multi-valued field. A lone string counts as one value.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
            _ => Vec::new(),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.trim(), "true" | "on" | "1"),
            _ => false,
        }
    }

    /// The form family named by the payload itself, if any.
    pub fn form_type(&self) -> Option<&str> {
        self.get_str(FORM_TYPE_FIELD)
    }

    /// First non-blank token under either spelling.
    pub fn token(&self) -> Option<&str> {
        [TOKEN_FIELD, TOKEN_FIELD_ALIAS]
            .into_iter()
            .filter_map(|key| self.get_str(key))
            .map(str::trim)
            .find(|t| !t.is_empty())
    }

    /// Drop routing and verification fields that must not reach the relay.
    pub fn strip_control_fields(&mut self) {
        for key in [TOKEN_FIELD, TOKEN_FIELD_ALIAS, FORM_TYPE_FIELD] {
            self.0.remove(key);
        }
    }

    /// Copy with every string scrubbed of tags and whitespace, and the email
    /// lowercased. Strings nested in arrays are scrubbed too.
    pub fn sanitized(&self) -> Self {
        let map = self
            .0
            .iter()
            .map(|(key, value)| {
                let clean = if key == EMAIL_FIELD {
                    match value {
                        Value::String(s) => Value::String(normalize_email(s)),
                        other => sanitize_value(other),
                    }
                } else {
                    sanitize_value(value)
                };
                (key.clone(), clean)
            })
            .collect();
        Self(map)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(s)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        other => other.clone(),
    }
}

impl From<Map<String, Value>> for FormPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_reads_either_spelling() {
        let p = FormPayload::new().with(TOKEN_FIELD_ALIAS, "abc");
        assert_eq!(p.token(), Some("abc"));

        let p = FormPayload::new()
            .with(TOKEN_FIELD, "  ")
            .with(TOKEN_FIELD_ALIAS, "xyz");
        assert_eq!(p.token(), Some("xyz"));

        assert_eq!(FormPayload::new().with(TOKEN_FIELD, "").token(), None);
    }

    #[test]
    fn test_strip_control_fields() {
        let mut p = FormPayload::new()
            .with(TOKEN_FIELD, "t")
            .with(TOKEN_FIELD_ALIAS, "t")
            .with(FORM_TYPE_FIELD, "contact")
            .with("name", "Jane");
        p.strip_control_fields();
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_sanitized_scrubs_nested_strings() {
        let p = FormPayload::from_value(json!({
            "email": " Jane@Example.com ",
            "message": "<b>hi</b> there ",
            "services": ["<i>seo-analytics</i>"],
            "managedHosting": true
        }))
        .unwrap();
        let clean = p.sanitized();
        assert_eq!(clean.get_str("email"), Some("jane@example.com"));
        assert_eq!(clean.get_str("message"), Some("hi there"));
        assert_eq!(clean.strings("services"), vec!["seo-analytics"]);
        assert!(clean.flag("managedHosting"));
    }

    #[test]
    fn test_strings_and_flag_accessors() {
        let p = FormPayload::from_value(json!({
            "services": "brand-logo-design",
            "hosting": "on",
            "count": 3
        }))
        .unwrap();
        assert_eq!(p.strings("services"), vec!["brand-logo-design"]);
        assert!(p.flag("hosting"));
        assert!(!p.flag("count"));
        assert_eq!(p.text("missing"), "");
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(FormPayload::from_value(json!([1, 2])).is_none());
    }
}
