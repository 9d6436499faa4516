//! Content configuration from TOML (`[content]` and `[pagination]` sections)

use agency_application::ContentParams;
use agency_domain::pagination::DEFAULT_ITEMS_PER_PAGE;
use agency_domain::{BlogSortKey, ConfigIssue, ConfigIssueCode, SortOrder, WorkSortKey};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Raw content configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Directory holding `blog/` and `work/`
    pub root: PathBuf,
    /// Include drafts in listings
    pub show_drafts: bool,
    /// Blog sort key: "publish-date" or "title"
    pub blog_sort: String,
    /// Blog sort order: "asc" or "desc"
    pub blog_order: String,
    /// Work sort key: "order" or "publish-date"
    pub work_sort: String,
    /// Work sort order: "asc" or "desc"
    pub work_order: String,
}

impl Default for FileContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            show_drafts: false,
            blog_sort: "publish-date".to_string(),
            blog_order: "desc".to_string(),
            work_sort: "order".to_string(),
            work_order: "asc".to_string(),
        }
    }
}

/// Raw pagination configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaginationConfig {
    pub items_per_page: usize,
}

impl Default for FilePaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Parse `raw` or fall back to `fallback`, reporting the fallback.
fn parse_or_default<T: FromStr + ToString>(
    field: &str,
    raw: &str,
    fallback: T,
    valid_values: &[&str],
) -> (T, Option<ConfigIssue>) {
    match raw.parse::<T>() {
        Ok(value) => (value, None),
        Err(_) => {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: raw.to_string(),
                    valid_values: valid_values.iter().map(|v| v.to_string()).collect(),
                },
                format!(
                    "{}: unknown value '{}', falling back to '{}'",
                    field,
                    raw,
                    fallback.to_string()
                ),
            );
            (fallback, Some(issue))
        }
    }
}

impl FileContentConfig {
    pub fn to_content_params(
        &self,
        pagination: &FilePaginationConfig,
    ) -> (ContentParams, Vec<ConfigIssue>) {
        let defaults = ContentParams::default();
        let mut issues = Vec::new();

        let (blog_sort, issue) = parse_or_default::<BlogSortKey>(
            "content.blog_sort",
            &self.blog_sort,
            defaults.blog_sort,
            &["publish-date", "title"],
        );
        issues.extend(issue);
        let (blog_order, issue) = parse_or_default::<SortOrder>(
            "content.blog_order",
            &self.blog_order,
            defaults.blog_order,
            &["asc", "desc"],
        );
        issues.extend(issue);
        let (work_sort, issue) = parse_or_default::<WorkSortKey>(
            "content.work_sort",
            &self.work_sort,
            defaults.work_sort,
            &["order", "publish-date"],
        );
        issues.extend(issue);
        let (work_order, issue) = parse_or_default::<SortOrder>(
            "content.work_order",
            &self.work_order,
            defaults.work_order,
            &["asc", "desc"],
        );
        issues.extend(issue);

        let items_per_page = if pagination.items_per_page == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroPageSize,
                "pagination.items_per_page: 0 is treated as 1",
            ));
            1
        } else {
            pagination.items_per_page
        };

        let params = ContentParams::default()
            .with_drafts(self.show_drafts)
            .with_blog_sort(blog_sort, blog_order)
            .with_work_sort(work_sort, work_order)
            .with_items_per_page(items_per_page);
        (params, issues)
    }
}
