//! Input scrubbing applied to every field before it is forwarded.

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// Remove anything that looks like an HTML tag.
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").into_owned()
}

/// Strip tags and surrounding whitespace from free text.
pub fn sanitize_text(input: &str) -> String {
    strip_tags(input).trim().to_string()
}

/// Emails are compared case-insensitively downstream; store them lowercased.
pub fn normalize_email(input: &str) -> String {
    sanitize_text(input).to_lowercase()
}
