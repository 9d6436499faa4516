//! Free-text search over content collections.

use super::entities::ContentItem;

/// Case-insensitive substring search over title, description and label text.
///
/// An item qualifies when any one of the fields contains the query. An
/// empty query matches everything.
pub fn search<'a, T: ContentItem>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title().to_lowercase().contains(&needle)
                || item.description().to_lowercase().contains(&needle)
                || item.label_text().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::entities::{BlogPost, WorkProject};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_matches_any_field() {
        let posts = vec![
            BlogPost::new("t", "Rust for Websites", date()),
            BlogPost::new("d", "Other", date()).with_description("all about RUST"),
            BlogPost::new("l", "Labels", date()).with_tags(["rustacean"]),
            BlogPost::new("n", "Nothing", date()),
        ];
        let slugs: Vec<_> = search(&posts, "rust").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["t", "d", "l"]);
    }

    #[test]
    fn test_work_search_includes_company_and_industry() {
        let projects = vec![
            WorkProject::new("a", "Shop", date()).with_company("Acme Corp"),
            WorkProject::new("b", "Clinic", date()).with_industry("Healthcare"),
        ];
        assert_eq!(search(&projects, "acme").len(), 1);
        assert_eq!(search(&projects, "health")[0].slug, "b");
        assert!(search(&projects, "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_matches_all() {
        let posts = vec![BlogPost::new("a", "A", date())];
        assert_eq!(search(&posts, "  ").len(), 1);
    }
}
