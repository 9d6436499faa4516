//! Query Content use case
//!
//! Loads a collection from the [`ContentStore`], applies draft visibility
//! and the configured sort order, then filters, searches and paginates.

use crate::config::ContentParams;
use crate::ports::content_store::{ContentStore, ContentStoreError};
use agency_domain::content::{query, related, search, sort};
use agency_domain::pagination::{Paginated, paginate};
use agency_domain::taxonomy::{self, TaxonomyItem, TaxonomyKind};
use agency_domain::{BlogPost, ContentItem, WorkProject};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while querying content
#[derive(Error, Debug)]
pub enum QueryContentError {
    #[error("Content store error: {0}")]
    Store(#[from] ContentStoreError),

    #[error("No {collection} item with slug '{slug}'")]
    NotFound {
        collection: &'static str,
        slug: String,
    },
}

/// Filters for a blog listing. Label filters accept a name or its slug.
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub page: usize,
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
    pub featured_only: bool,
}

impl BlogQuery {
    pub fn page(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// Filters for a work listing. Label filters accept a name or its slug.
#[derive(Debug, Clone, Default)]
pub struct WorkQuery {
    pub page: usize,
    pub search: Option<String>,
    pub service: Option<String>,
    pub industry: Option<String>,
    pub company: Option<String>,
    pub featured_only: bool,
}

impl WorkQuery {
    pub fn page(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// Resolve a filter value given as a taxonomy slug to its label name.
fn resolve_label(items: &[TaxonomyItem], wanted: &str) -> String {
    taxonomy::find_by_slug(items, wanted)
        .map(|item| item.name.clone())
        .unwrap_or_else(|| wanted.to_string())
}

/// Keep only the items of `current` that also appear in `subset` (by slug).
fn retain_slugs<T: ContentItem>(current: Vec<T>, subset: &[&T]) -> Vec<T> {
    current
        .into_iter()
        .filter(|item| subset.iter().any(|s| s.slug() == item.slug()))
        .collect()
}

/// Use case for listing and looking up content
pub struct QueryContentUseCase<S: ContentStore + 'static> {
    store: Arc<S>,
    params: ContentParams,
}

impl<S: ContentStore + 'static> QueryContentUseCase<S> {
    pub fn new(store: Arc<S>, params: ContentParams) -> Self {
        Self { store, params }
    }

    pub fn params(&self) -> &ContentParams {
        &self.params
    }

    // ==================== Collections ====================

    /// Published posts (drafts per config) in configured order.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, QueryContentError> {
        let posts = self.store.blog_posts().await?;
        let mut posts = query::filter_drafts(posts, self.params.show_drafts);
        sort::sort_blog_posts(&mut posts, self.params.blog_sort, self.params.blog_order);
        debug!("Loaded {} blog posts", posts.len());
        Ok(posts)
    }

    /// Published projects (drafts per config) in configured order.
    pub async fn work_projects(&self) -> Result<Vec<WorkProject>, QueryContentError> {
        let projects = self.store.work_projects().await?;
        let mut projects = query::filter_drafts(projects, self.params.show_drafts);
        sort::sort_work_projects(&mut projects, self.params.work_sort, self.params.work_order);
        debug!("Loaded {} work projects", projects.len());
        Ok(projects)
    }

    // ==================== Listings ====================

    pub async fn list_blog(&self, q: &BlogQuery) -> Result<Paginated<BlogPost>, QueryContentError> {
        let all = self.blog_posts().await?;
        let mut posts = all.clone();

        if q.featured_only {
            posts = posts.into_iter().filter(|p| p.featured).collect();
        }
        if let Some(category) = &q.category {
            let name = resolve_label(&taxonomy::categories(&all), category);
            posts = retain_slugs(posts, &query::posts_by_category(&all, &name));
        }
        if let Some(tag) = &q.tag {
            let name = resolve_label(&taxonomy::tags(&all), tag);
            posts = retain_slugs(posts, &query::posts_by_tag(&all, &name));
        }
        if let Some(author) = &q.author {
            posts = retain_slugs(posts, &query::posts_by_author(&all, author));
        }
        if let Some(text) = q.search.as_deref().filter(|s| !s.trim().is_empty()) {
            posts = search::search(&posts, text).into_iter().cloned().collect();
        }

        Ok(paginate(&posts, q.page, self.params.items_per_page))
    }

    pub async fn list_work(&self, q: &WorkQuery) -> Result<Paginated<WorkProject>, QueryContentError> {
        let all = self.work_projects().await?;
        let mut projects = all.clone();

        if q.featured_only {
            projects = projects.into_iter().filter(|p| p.featured).collect();
        }
        if let Some(service) = &q.service {
            let name = resolve_label(&taxonomy::services(&all), service);
            projects = retain_slugs(projects, &query::projects_by_service(&all, &name));
        }
        if let Some(industry) = &q.industry {
            let name = resolve_label(&taxonomy::industries(&all), industry);
            projects = retain_slugs(projects, &query::projects_by_industry(&all, &name));
        }
        if let Some(company) = &q.company {
            projects = retain_slugs(projects, &query::projects_by_company(&all, company));
        }
        if let Some(text) = q.search.as_deref().filter(|s| !s.trim().is_empty()) {
            projects = search::search(&projects, text).into_iter().cloned().collect();
        }

        Ok(paginate(&projects, q.page, self.params.items_per_page))
    }

    // ==================== Lookups ====================

    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, QueryContentError> {
        let posts = self.blog_posts().await?;
        query::find_by_slug(&posts, slug)
            .cloned()
            .ok_or_else(|| QueryContentError::NotFound {
                collection: "blog",
                slug: slug.to_string(),
            })
    }

    pub async fn work_project(&self, slug: &str) -> Result<WorkProject, QueryContentError> {
        let projects = self.work_projects().await?;
        query::find_by_slug(&projects, slug)
            .cloned()
            .ok_or_else(|| QueryContentError::NotFound {
                collection: "work",
                slug: slug.to_string(),
            })
    }

    pub async fn related_posts(
        &self,
        slug: &str,
        limit: usize,
    ) -> Result<Vec<BlogPost>, QueryContentError> {
        let posts = self.blog_posts().await?;
        let reference = query::find_by_slug(&posts, slug).ok_or_else(|| {
            QueryContentError::NotFound {
                collection: "blog",
                slug: slug.to_string(),
            }
        })?;
        Ok(related::related_posts(reference, &posts, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn related_projects(
        &self,
        slug: &str,
        limit: usize,
    ) -> Result<Vec<WorkProject>, QueryContentError> {
        let projects = self.work_projects().await?;
        let reference = query::find_by_slug(&projects, slug).ok_or_else(|| {
            QueryContentError::NotFound {
                collection: "work",
                slug: slug.to_string(),
            }
        })?;
        Ok(related::related_projects(reference, &projects, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    // ==================== Taxonomy ====================

    /// Taxonomy of the collection the kind belongs to, count descending.
    pub async fn taxonomy(&self, kind: TaxonomyKind) -> Result<Vec<TaxonomyItem>, QueryContentError> {
        let items = match kind {
            TaxonomyKind::Category => taxonomy::categories(&self.blog_posts().await?),
            TaxonomyKind::Tag => taxonomy::tags(&self.blog_posts().await?),
            TaxonomyKind::Service => taxonomy::services(&self.work_projects().await?),
            TaxonomyKind::Industry => taxonomy::industries(&self.work_projects().await?),
        };
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::{BlogSortKey, SortOrder};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    // ==================== Test Mocks ====================

    struct MockStore {
        posts: Vec<BlogPost>,
        projects: Vec<WorkProject>,
    }

    #[async_trait]
    impl ContentStore for MockStore {
        async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentStoreError> {
            Ok(self.posts.clone())
        }

        async fn work_projects(&self) -> Result<Vec<WorkProject>, ContentStoreError> {
            Ok(self.projects.clone())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> Arc<MockStore> {
        let posts = (1..=8)
            .map(|i| {
                BlogPost::new(format!("post-{i}"), format!("Post {i}"), date(2024, 1, i))
                    .with_categories(if i % 2 == 0 { vec!["Web Design"] } else { vec!["SEO"] })
                    .with_tags(["news"])
            })
            .chain(std::iter::once(
                BlogPost::new("draft", "Draft", date(2024, 2, 1)).draft(),
            ))
            .collect();
        let projects = vec![
            WorkProject::new("late", "Late", date(2023, 1, 1))
                .with_services(["Website Design & Development"])
                .with_industry("Retail")
                .with_order(2),
            WorkProject::new("early", "Early", date(2024, 1, 1))
                .with_services(["SEO & Analytics", "Website Design & Development"])
                .with_industry("retail")
                .with_order(1),
            WorkProject::new("other", "Other", date(2022, 1, 1)).with_services(["Brand & Logo Design"]),
        ];
        Arc::new(MockStore { posts, projects })
    }

    fn use_case() -> QueryContentUseCase<MockStore> {
        QueryContentUseCase::new(store(), ContentParams::default())
    }

    // ==================== Listings ====================

    #[tokio::test]
    async fn test_blog_listing_hides_drafts_and_sorts_newest_first() {
        let page = use_case().list_blog(&BlogQuery::page(1)).await.unwrap();
        assert_eq!(page.total_items, 8);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data[0].slug, "post-8");
        assert!(page.has_next_page);
    }

    #[tokio::test]
    async fn test_drafts_visible_when_configured() {
        let uc = QueryContentUseCase::new(
            store(),
            ContentParams::default()
                .with_drafts(true)
                .with_blog_sort(BlogSortKey::Title, SortOrder::Asc),
        );
        let posts = uc.blog_posts().await.unwrap();
        assert_eq!(posts.len(), 9);
        assert_eq!(posts[0].slug, "draft");
    }

    #[tokio::test]
    async fn test_category_filter_accepts_slug() {
        let q = BlogQuery {
            page: 1,
            category: Some("web-design".to_string()),
            ..BlogQuery::default()
        };
        let page = use_case().list_blog(&q).await.unwrap();
        assert_eq!(page.total_items, 4);
        assert!(page.data.iter().all(|p| p.categories == vec!["Web Design"]));
    }

    #[tokio::test]
    async fn test_search_combines_with_filters() {
        let q = BlogQuery {
            page: 1,
            category: Some("SEO".to_string()),
            search: Some("post 3".to_string()),
            ..BlogQuery::default()
        };
        let page = use_case().list_blog(&q).await.unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.data[0].slug, "post-3");
    }

    #[tokio::test]
    async fn test_work_listing_order_then_date() {
        let page = use_case().list_work(&WorkQuery::page(1)).await.unwrap();
        let slugs: Vec<_> = page.data.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["early", "late", "other"]);
    }

    #[tokio::test]
    async fn test_work_industry_filter_is_case_insensitive() {
        let q = WorkQuery {
            page: 1,
            industry: Some("RETAIL".to_string()),
            ..WorkQuery::default()
        };
        assert_eq!(use_case().list_work(&q).await.unwrap().total_items, 2);
    }

    // ==================== Lookups ====================

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let err = use_case().blog_post("nope").await.unwrap_err();
        assert!(matches!(err, QueryContentError::NotFound { collection: "blog", .. }));
    }

    #[tokio::test]
    async fn test_related_projects() {
        let related = use_case().related_projects("early", 3).await.unwrap();
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["late"]);
    }

    #[tokio::test]
    async fn test_taxonomy_picks_collection() {
        let uc = use_case();
        let categories = uc.taxonomy(TaxonomyKind::Category).await.unwrap();
        assert_eq!(categories.len(), 2);
        let industries = uc.taxonomy(TaxonomyKind::Industry).await.unwrap();
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].name, "retail");
        assert_eq!(industries[0].count, 2);
    }
}
