//! Relevance-scored "related items" lookup.
//!
//! Scores are additive:
//!
//! | signal | weight |
//! |---|---|
//! | shared category (blog) / shared service (work) | 3 each |
//! | shared tag (blog) | 2 each |
//! | same industry (work) | 2 |
//!
//! Candidates scoring zero are never returned.

use super::entities::{BlogPost, ContentItem, WorkProject};
use std::collections::HashSet;

/// Default number of related items returned.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

const PRIMARY_LABEL_WEIGHT: u32 = 3;
const TAG_WEIGHT: u32 = 2;
const INDUSTRY_WEIGHT: u32 = 2;

fn lowercase_set(labels: &[String]) -> HashSet<String> {
    labels.iter().map(|l| l.to_lowercase()).collect()
}

fn shared_count(a: &[String], b: &[String]) -> u32 {
    let a = lowercase_set(a);
    let b = lowercase_set(b);
    a.intersection(&b).count() as u32
}

/// Relevance of `candidate` to `reference`.
pub fn blog_relevance(reference: &BlogPost, candidate: &BlogPost) -> u32 {
    PRIMARY_LABEL_WEIGHT * shared_count(&reference.categories, &candidate.categories)
        + TAG_WEIGHT * shared_count(&reference.tags, &candidate.tags)
}

/// Relevance of `candidate` to `reference`.
pub fn work_relevance(reference: &WorkProject, candidate: &WorkProject) -> u32 {
    let mut score = PRIMARY_LABEL_WEIGHT * shared_count(&reference.services, &candidate.services);
    if let (Some(a), Some(b)) = (&reference.industry, &candidate.industry)
        && a.to_lowercase() == b.to_lowercase()
    {
        score += INDUSTRY_WEIGHT;
    }
    score
}

fn top_related<'a, T, F>(reference: &T, items: &'a [T], limit: usize, score: F) -> Vec<&'a T>
where
    T: ContentItem,
    F: Fn(&T, &T) -> u32,
{
    let mut scored: Vec<(u32, &T)> = items
        .iter()
        .filter(|item| item.slug() != reference.slug())
        .map(|item| (score(reference, item), item))
        .filter(|(s, _)| *s > 0)
        .collect();

    // Stable: equal scores keep collection order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, item)| item).collect()
}

/// Posts most related to `reference`, best first.
pub fn related_posts<'a>(reference: &BlogPost, posts: &'a [BlogPost], limit: usize) -> Vec<&'a BlogPost> {
    top_related(reference, posts, limit, blog_relevance)
}

/// Projects most related to `reference`, best first.
pub fn related_projects<'a>(
    reference: &WorkProject,
    projects: &'a [WorkProject],
    limit: usize,
) -> Vec<&'a WorkProject> {
    top_related(reference, projects, limit, work_relevance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_two_categories_one_tag_scores_eight() {
        let reference = BlogPost::new("ref", "Ref", date())
            .with_categories(["Design", "SEO"])
            .with_tags(["css", "html"]);
        let candidate = BlogPost::new("c", "C", date())
            .with_categories(["design", "seo", "Branding"])
            .with_tags(["CSS"]);
        assert_eq!(blog_relevance(&reference, &candidate), 8);
    }

    #[test]
    fn test_zero_scores_excluded_and_self_skipped() {
        let reference = BlogPost::new("ref", "Ref", date()).with_tags(["rust"]);
        let posts = vec![
            reference.clone(),
            BlogPost::new("none", "None", date()).with_tags(["go"]),
            BlogPost::new("one", "One", date()).with_tags(["rust"]),
        ];
        let related = related_posts(&reference, &posts, DEFAULT_RELATED_LIMIT);
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["one"]);
    }

    #[test]
    fn test_sorted_by_score_and_limited() {
        let reference = BlogPost::new("ref", "Ref", date())
            .with_categories(["a"])
            .with_tags(["x", "y"]);
        let posts = vec![
            BlogPost::new("tag", "Tag", date()).with_tags(["x"]),
            BlogPost::new("cat", "Cat", date()).with_categories(["A"]),
            BlogPost::new("both", "Both", date())
                .with_categories(["a"])
                .with_tags(["y"]),
            BlogPost::new("tag2", "Tag2", date()).with_tags(["y"]),
        ];
        let related = related_posts(&reference, &posts, 3);
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["both", "cat", "tag"]);
    }

    #[test]
    fn test_work_industry_bonus() {
        let reference = WorkProject::new("ref", "Ref", date())
            .with_services(["SEO"])
            .with_industry("Retail");
        let same_industry = WorkProject::new("a", "A", date()).with_industry("retail");
        let shared_service = WorkProject::new("b", "B", date())
            .with_services(["seo"])
            .with_industry("Retail");
        assert_eq!(work_relevance(&reference, &same_industry), 2);
        assert_eq!(work_relevance(&reference, &shared_service), 5);

        let projects = vec![same_industry, shared_service];
        let related = related_projects(&reference, &projects, 3);
        assert_eq!(related[0].slug, "b");
        assert_eq!(related.len(), 2);
    }
}
