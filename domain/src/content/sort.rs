//! Deterministic ordering for content collections.

use super::entities::{BlogPost, WorkProject};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid SortOrder: {}", s)),
        }
    }
}

/// Sort key for blog posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlogSortKey {
    #[default]
    PublishDate,
    Title,
}

impl fmt::Display for BlogSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogSortKey::PublishDate => write!(f, "publish-date"),
            BlogSortKey::Title => write!(f, "title"),
        }
    }
}

impl std::str::FromStr for BlogSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publish-date" | "publishdate" | "date" => Ok(BlogSortKey::PublishDate),
            "title" => Ok(BlogSortKey::Title),
            _ => Err(format!("Invalid BlogSortKey: {}", s)),
        }
    }
}

/// Sort key for work projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkSortKey {
    /// Display order, ties broken by newest publish date.
    #[default]
    Order,
    PublishDate,
}

impl fmt::Display for WorkSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkSortKey::Order => write!(f, "order"),
            WorkSortKey::PublishDate => write!(f, "publish-date"),
        }
    }
}

impl std::str::FromStr for WorkSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "order" => Ok(WorkSortKey::Order),
            "publish-date" | "publishdate" | "date" => Ok(WorkSortKey::PublishDate),
            _ => Err(format!("Invalid WorkSortKey: {}", s)),
        }
    }
}

/// Sort blog posts in place by publish date or title.
pub fn sort_blog_posts(posts: &mut [BlogPost], key: BlogSortKey, order: SortOrder) {
    posts.sort_by(|a, b| {
        let ordering = match key {
            BlogSortKey::PublishDate => a.publish_date.cmp(&b.publish_date),
            BlogSortKey::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
        };
        order.apply(ordering)
    });
}

/// Sort work projects in place.
///
/// With [`WorkSortKey::Order`] the display order is the primary key (in the
/// requested direction) and equal orders fall back to newest publish date
/// first, regardless of `order`.
pub fn sort_work_projects(projects: &mut [WorkProject], key: WorkSortKey, order: SortOrder) {
    projects.sort_by(|a, b| match key {
        WorkSortKey::Order => order
            .apply(a.order.cmp(&b.order))
            .then_with(|| b.publish_date.cmp(&a.publish_date)),
        WorkSortKey::PublishDate => order.apply(a.publish_date.cmp(&b.publish_date)),
    });
}
