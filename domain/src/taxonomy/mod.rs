//! Derived taxonomy: categories and tags (blog), services and industries (work).
//!
//! Taxonomy items are recomputed from the collection on every call and are
//! never stored. Labels are normalised to lowercase, so `"SEO"` and `"seo"`
//! are the same entry. An item's count is the number of distinct content
//! items that carry the label.

mod slug;

pub use slug::slugify;

use crate::content::entities::{BlogPost, WorkProject};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default size of "popular" lists.
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Which label set a taxonomy is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Category,
    Tag,
    Service,
    Industry,
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonomyKind::Category => write!(f, "category"),
            TaxonomyKind::Tag => write!(f, "tag"),
            TaxonomyKind::Service => write!(f, "service"),
            TaxonomyKind::Industry => write!(f, "industry"),
        }
    }
}

impl std::str::FromStr for TaxonomyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" | "categories" => Ok(TaxonomyKind::Category),
            "tag" | "tags" => Ok(TaxonomyKind::Tag),
            "service" | "services" => Ok(TaxonomyKind::Service),
            "industry" | "industries" => Ok(TaxonomyKind::Industry),
            _ => Err(format!("Invalid TaxonomyKind: {}", s)),
        }
    }
}

/// A label with its slug and usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyItem {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// A taxonomy item together with the content items that reference it.
#[derive(Debug, Clone)]
pub struct TaxonomyGroup<'a, T> {
    pub item: TaxonomyItem,
    pub members: Vec<&'a T>,
}

fn group_by_labels<'a, T, F>(items: &'a [T], labels: F) -> Vec<TaxonomyGroup<'a, T>>
where
    F: Fn(&T) -> Vec<&str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<&'a T>> = HashMap::new();

    for item in items {
        let mut seen: Vec<String> = Vec::new();
        for label in labels(item) {
            let name = label.trim().to_lowercase();
            if name.is_empty() || seen.contains(&name) {
                continue;
            }
            seen.push(name.clone());
            members
                .entry(name.clone())
                .or_insert_with(|| {
                    order.push(name);
                    Vec::new()
                })
                .push(item);
        }
    }

    let mut groups: Vec<TaxonomyGroup<'a, T>> = order
        .into_iter()
        .filter_map(|name| {
            let items = members.remove(&name)?;
            Some(TaxonomyGroup {
                item: TaxonomyItem {
                    slug: slugify(&name),
                    count: items.len(),
                    name,
                },
                members: items,
            })
        })
        .collect();

    groups.sort_by(|a, b| {
        b.item
            .count
            .cmp(&a.item.count)
            .then_with(|| a.item.name.cmp(&b.item.name))
    });
    groups
}

fn items_only<T>(groups: Vec<TaxonomyGroup<'_, T>>) -> Vec<TaxonomyItem> {
    groups.into_iter().map(|g| g.item).collect()
}

fn category_labels(post: &BlogPost) -> Vec<&str> {
    post.categories.iter().map(String::as_str).collect()
}

fn tag_labels(post: &BlogPost) -> Vec<&str> {
    post.tags.iter().map(String::as_str).collect()
}

fn service_labels(project: &WorkProject) -> Vec<&str> {
    project.services.iter().map(String::as_str).collect()
}

fn industry_labels(project: &WorkProject) -> Vec<&str> {
    project.industry.as_deref().into_iter().collect()
}

pub fn categories_with_posts(posts: &[BlogPost]) -> Vec<TaxonomyGroup<'_, BlogPost>> {
    group_by_labels(posts, category_labels)
}

pub fn categories(posts: &[BlogPost]) -> Vec<TaxonomyItem> {
    items_only(categories_with_posts(posts))
}

pub fn tags_with_posts(posts: &[BlogPost]) -> Vec<TaxonomyGroup<'_, BlogPost>> {
    group_by_labels(posts, tag_labels)
}

pub fn tags(posts: &[BlogPost]) -> Vec<TaxonomyItem> {
    items_only(tags_with_posts(posts))
}

pub fn services_with_projects(projects: &[WorkProject]) -> Vec<TaxonomyGroup<'_, WorkProject>> {
    group_by_labels(projects, service_labels)
}

pub fn services(projects: &[WorkProject]) -> Vec<TaxonomyItem> {
    items_only(services_with_projects(projects))
}

pub fn industries_with_projects(projects: &[WorkProject]) -> Vec<TaxonomyGroup<'_, WorkProject>> {
    group_by_labels(projects, industry_labels)
}

pub fn industries(projects: &[WorkProject]) -> Vec<TaxonomyItem> {
    items_only(industries_with_projects(projects))
}

/// Look up a taxonomy item by slug.
pub fn find_by_slug<'a>(items: &'a [TaxonomyItem], slug: &str) -> Option<&'a TaxonomyItem> {
    items.iter().find(|item| item.slug == slug)
}

/// The `limit` most used entries (input is expected in count order).
pub fn popular(mut items: Vec<TaxonomyItem>, limit: usize) -> Vec<TaxonomyItem> {
    items.truncate(limit);
    items
}
