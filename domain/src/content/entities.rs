//! Content entities: blog posts and work (portfolio) projects.
//!
//! Both are immutable once loaded. The [`ContentItem`] trait exposes the
//! fields that the query, search and pagination code needs without caring
//! which collection an item came from.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

fn default_author() -> String {
    "Team".to_string()
}

fn default_order() -> i64 {
    999
}

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| serde::de::Error::custom(format!("invalid date: {:?}", raw)))
}

/// Common read-only view over a published content record.
pub trait ContentItem {
    /// Identity of the item (its URL slug).
    fn slug(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn publish_date(&self) -> NaiveDate;
    fn is_draft(&self) -> bool;
    fn is_featured(&self) -> bool;

    /// All label text (categories, tags, services, industry, ...) joined
    /// by spaces, used for free-text search.
    fn label_text(&self) -> String;

    /// Calendar year of publication.
    fn publish_year(&self) -> i32 {
        self.publish_date().year()
    }
}

/// A blog post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "publishDate", deserialize_with = "lenient_date")]
    pub publish_date: NaiveDate,
    #[serde(default = "default_author")]
    pub author: String,
    /// Reading time in minutes, when set explicitly by the author.
    #[serde(default, alias = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Create a published, non-featured post with no labels.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            publish_date,
            author: default_author(),
            read_time: None,
            featured: false,
            draft: false,
            categories: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

impl ContentItem for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    fn is_draft(&self) -> bool {
        self.draft
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn label_text(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        parts.push(self.categories.join(" "));
        parts.push(self.tags.join(" "));
        parts.join(" ")
    }
}

/// A headline metric shown on a project page ("180%" / "Increase in Leads").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStat {
    pub value: String,
    pub label: String,
}

/// A client quote attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// A portfolio ("work") project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkProject {
    pub slug: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, alias = "projectUrl", skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    #[serde(default)]
    pub featured: bool,
    /// Display order; lower sorts first.
    #[serde(default = "default_order")]
    pub order: i64,
    #[serde(alias = "publishDate", deserialize_with = "lenient_date")]
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub draft: bool,
}

impl WorkProject {
    /// Create a published project with the default display order.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            company: String::new(),
            description: String::new(),
            services: Vec::new(),
            industry: None,
            project_url: None,
            stats: Vec::new(),
            testimonial: None,
            featured: false,
            order: default_order(),
            publish_date,
            draft: false,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_testimonial(mut self, testimonial: Testimonial) -> Self {
        self.testimonial = Some(testimonial);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

impl ContentItem for WorkProject {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    fn is_draft(&self) -> bool {
        self.draft
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn label_text(&self) -> String {
        let mut parts = vec![self.company.clone(), self.services.join(" ")];
        if let Some(industry) = &self.industry {
            parts.push(industry.clone());
        }
        parts.join(" ")
    }
}
