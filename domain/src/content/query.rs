//! Filtering and lookup over in-memory content collections.
//!
//! Every function here is a linear scan and never fails: a lookup that
//! matches nothing returns an empty vector (or `None`). Label comparisons
//! are case-insensitive.

use super::entities::{BlogPost, ContentItem, WorkProject};
use crate::core::error::DomainError;
use std::collections::{BTreeMap, HashSet};

/// Label used when grouping projects that have no industry.
pub const UNCATEGORIZED_INDUSTRY: &str = "Other";

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Drop drafts unless `include_drafts` is set.
pub fn filter_drafts<T: ContentItem>(items: Vec<T>, include_drafts: bool) -> Vec<T> {
    if include_drafts {
        items
    } else {
        items.into_iter().filter(|item| !item.is_draft()).collect()
    }
}

/// Featured items in collection order, optionally capped at `limit`.
pub fn featured<T: ContentItem>(items: &[T], limit: Option<usize>) -> Vec<&T> {
    let iter = items.iter().filter(|item| item.is_featured());
    match limit {
        Some(n) => iter.take(n).collect(),
        None => iter.collect(),
    }
}

/// Find a single item by its slug.
pub fn find_by_slug<'a, T: ContentItem>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

/// The first `limit` items of an already-sorted collection.
pub fn recent<T: ContentItem>(items: &[T], limit: usize) -> Vec<&T> {
    items.iter().take(limit).collect()
}

/// Reject collections with blank slugs or titles, or repeated slugs.
pub fn check_collection<T: ContentItem>(items: &[T]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.slug().trim().is_empty() {
            return Err(DomainError::EmptySlug(item.title().to_string()));
        }
        if item.title().trim().is_empty() {
            return Err(DomainError::EmptyTitle(item.slug().to_string()));
        }
        if !seen.insert(item.slug()) {
            return Err(DomainError::DuplicateSlug(item.slug().to_string()));
        }
    }
    Ok(())
}

/// Group items by publication year.
pub fn group_by_year<T: ContentItem>(items: &[T]) -> BTreeMap<i32, Vec<&T>> {
    let mut groups: BTreeMap<i32, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups.entry(item.publish_year()).or_default().push(item);
    }
    groups
}

// ==================== Blog ====================

pub fn posts_by_category<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| post.categories.iter().any(|c| eq_ignore_case(c, category)))
        .collect()
}

pub fn posts_by_tag<'a>(posts: &'a [BlogPost], tag: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| eq_ignore_case(t, tag)))
        .collect()
}

/// Posts carrying at least one of `tags` (OR semantics).
pub fn posts_by_any_tag<'a, S: AsRef<str>>(posts: &'a [BlogPost], tags: &[S]) -> Vec<&'a BlogPost> {
    let wanted: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| wanted.contains(&t.to_lowercase())))
        .collect()
}

pub fn posts_by_author<'a>(posts: &'a [BlogPost], author: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| eq_ignore_case(&post.author, author))
        .collect()
}

/// Default reading speed for [`reading_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Whole minutes needed to read `content`, rounded up, at least 1.
pub fn reading_minutes(content: &str, words_per_minute: usize) -> u32 {
    let words = content.split_whitespace().count().max(1);
    u32::try_from(words.div_ceil(words_per_minute.max(1))).unwrap_or(u32::MAX)
}

/// Estimated reading time, e.g. `"4 min read"`.
pub fn reading_time(content: &str, words_per_minute: usize) -> String {
    format!("{} min read", reading_minutes(content, words_per_minute))
}

// ==================== Work ====================

pub fn projects_by_service<'a>(projects: &'a [WorkProject], service: &str) -> Vec<&'a WorkProject> {
    projects
        .iter()
        .filter(|p| p.services.iter().any(|s| eq_ignore_case(s, service)))
        .collect()
}

/// Projects offering at least one of `services` (OR semantics).
pub fn projects_by_any_service<'a, S: AsRef<str>>(
    projects: &'a [WorkProject],
    services: &[S],
) -> Vec<&'a WorkProject> {
    let wanted: Vec<String> = services.iter().map(|s| s.as_ref().to_lowercase()).collect();
    projects
        .iter()
        .filter(|p| p.services.iter().any(|s| wanted.contains(&s.to_lowercase())))
        .collect()
}

pub fn projects_by_industry<'a>(
    projects: &'a [WorkProject],
    industry: &str,
) -> Vec<&'a WorkProject> {
    projects
        .iter()
        .filter(|p| {
            p.industry
                .as_deref()
                .is_some_and(|i| eq_ignore_case(i, industry))
        })
        .collect()
}

pub fn projects_by_company<'a>(projects: &'a [WorkProject], company: &str) -> Vec<&'a WorkProject> {
    projects
        .iter()
        .filter(|p| eq_ignore_case(&p.company, company))
        .collect()
}

pub fn projects_with_testimonials(projects: &[WorkProject]) -> Vec<&WorkProject> {
    projects.iter().filter(|p| p.testimonial.is_some()).collect()
}

/// The `limit` most recently published projects, newest first.
pub fn recent_projects(projects: &[WorkProject], limit: usize) -> Vec<&WorkProject> {
    let mut refs: Vec<&WorkProject> = projects.iter().collect();
    refs.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    refs.truncate(limit);
    refs
}

/// Group projects by industry label as written; projects without one land
/// under [`UNCATEGORIZED_INDUSTRY`].
pub fn projects_grouped_by_industry(projects: &[WorkProject]) -> BTreeMap<String, Vec<&WorkProject>> {
    let mut groups: BTreeMap<String, Vec<&WorkProject>> = BTreeMap::new();
    for project in projects {
        let key = project
            .industry
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED_INDUSTRY.to_string());
        groups.entry(key).or_default().push(project);
    }
    groups
}
