//! URL slug derivation for taxonomy labels.

/// Convert a label into a URL-friendly slug.
///
/// Lowercases, drops every character that is not an ASCII word character,
/// whitespace or `-`, turns runs of whitespace/hyphens into a single `-`,
/// and trims hyphens from both ends. The result is stable under a second
/// application.
///
/// ```
/// use agency_domain::taxonomy::slugify;
///
/// assert_eq!(slugify("Web Design & SEO"), "web-design-seo");
/// assert_eq!(slugify(&slugify("Web Design & SEO")), "web-design-seo");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Web Design"), "web-design");
        assert_eq!(slugify("E-Commerce Solutions"), "e-commerce-solutions");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("Brand & Logo Design"), "brand-logo-design");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("a&b"), "ab");
    }

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(slugify("  --hello -- world--  "), "hello-world");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Web Design",
            "  Mixed CASE -- label ",
            "Ünïcödé Label",
            "tabs\tand\nnewlines",
            "---",
            "",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }
}
