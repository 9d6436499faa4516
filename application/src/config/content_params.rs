//! Content listing parameters: how collections are filtered and ordered.
//!
//! [`ContentParams`] is handed to
//! [`QueryContentUseCase`](crate::use_cases::query_content::QueryContentUseCase)
//! and applied to every collection it loads.

use agency_domain::pagination::DEFAULT_ITEMS_PER_PAGE;
use agency_domain::{BlogSortKey, SortOrder, WorkSortKey};
use serde::{Deserialize, Serialize};

/// Listing parameters shared by every content query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentParams {
    /// Keep draft items in listings (preview builds only).
    pub show_drafts: bool,
    pub blog_sort: BlogSortKey,
    pub blog_order: SortOrder,
    pub work_sort: WorkSortKey,
    pub work_order: SortOrder,
    /// Page size for paginated listings. Zero is treated as one.
    pub items_per_page: usize,
}

impl Default for ContentParams {
    fn default() -> Self {
        Self {
            show_drafts: false,
            blog_sort: BlogSortKey::PublishDate,
            blog_order: SortOrder::Desc,
            work_sort: WorkSortKey::Order,
            work_order: SortOrder::Asc,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ContentParams {
    // ==================== Builder Methods ====================

    pub fn with_drafts(mut self, show: bool) -> Self {
        self.show_drafts = show;
        self
    }

    pub fn with_blog_sort(mut self, key: BlogSortKey, order: SortOrder) -> Self {
        self.blog_sort = key;
        self.blog_order = order;
        self
    }

    pub fn with_work_sort(mut self, key: WorkSortKey, order: SortOrder) -> Self {
        self.work_sort = key;
        self.work_order = order;
        self
    }

    pub fn with_items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = n;
        self
    }
}
