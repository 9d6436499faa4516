//! Pagination math over an in-memory sequence.
//!
//! [`paginate`] is a pure function of `(items, page, page_size)`. Pages are
//! 1-based; out-of-range page numbers are clamped, and an empty sequence is
//! reported as a single empty page.
//!
//! ```
//! use agency_domain::pagination::paginate;
//!
//! let items: Vec<u32> = (1..=13).collect();
//! let page = paginate(&items, 3, 6);
//! assert_eq!(page.data, vec![13]);
//! assert_eq!(page.total_pages, 3);
//! assert!(!page.has_next_page);
//! assert_eq!(page.prev_page, Some(2));
//! ```

use serde::Serialize;

/// Default page size for listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// One page of a sequence plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: usize,
    pub last_page: usize,
    /// Index of the first item on this page within the full sequence.
    pub start_index: usize,
    /// One past the last item on this page (exclusive bound).
    pub end_index: usize,
}

impl<T> Paginated<T> {
    /// Human-readable range, e.g. `"Showing 7-12 of 20"`.
    pub fn range_info(&self) -> String {
        if self.total_items == 0 {
            return "No items found".to_string();
        }
        format!(
            "Showing {}-{} of {}",
            self.start_index + 1,
            self.end_index,
            self.total_items
        )
    }

    /// Transform the page data while keeping the navigation metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items_per_page: self.items_per_page,
            has_next_page: self.has_next_page,
            has_prev_page: self.has_prev_page,
            next_page: self.next_page,
            prev_page: self.prev_page,
            first_page: self.first_page,
            last_page: self.last_page,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// Slice `items` into the requested page.
///
/// A `page_size` of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paginated<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size)
    };

    let current_page = page.clamp(1, total_pages);
    let start_index = ((current_page - 1) * page_size).min(total_items);
    let end_index = (start_index + page_size).min(total_items);

    let has_next_page = current_page < total_pages;
    let has_prev_page = current_page > 1;

    Paginated {
        data: items[start_index..end_index].to_vec(),
        current_page,
        total_pages,
        total_items,
        items_per_page: page_size,
        has_next_page,
        has_prev_page,
        next_page: has_next_page.then_some(current_page + 1),
        prev_page: has_prev_page.then_some(current_page - 1),
        first_page: 1,
        last_page: total_pages,
        start_index,
        end_index,
    }
}

/// Every page of `items`, in order. Empty input yields no pages.
pub fn paginated_pages<T: Clone>(items: &[T], page_size: usize) -> Vec<Paginated<T>> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);
    (1..=total_pages)
        .map(|page| paginate(items, page, page_size))
        .collect()
}

/// Links for a paginated listing rooted at `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationUrls {
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub page_urls: Vec<String>,
}

fn page_url(base_url: &str, page: usize) -> String {
    if page <= 1 {
        base_url.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), page)
    }
}

/// Page 1 lives at `base_url`; page N at `base_url/N`.
pub fn pagination_urls(current_page: usize, total_pages: usize, base_url: &str) -> PaginationUrls {
    PaginationUrls {
        prev_url: (current_page > 1).then(|| page_url(base_url, current_page - 1)),
        next_url: (current_page < total_pages).then(|| page_url(base_url, current_page + 1)),
        page_urls: (1..=total_pages).map(|p| page_url(base_url, p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_single_page() {
        let items: Vec<u8> = vec![];
        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.data.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
        assert_eq!(page.next_page, None);
        assert_eq!(page.range_info(), "No items found");
    }

    #[test]
    fn test_page_is_clamped() {
        let items: Vec<u8> = (0..10).collect();
        assert_eq!(paginate(&items, 0, 4).current_page, 1);
        let last = paginate(&items, 99, 4);
        assert_eq!(last.current_page, 3);
        assert_eq!(last.data, vec![8, 9]);
        assert_eq!(last.range_info(), "Showing 9-10 of 10");
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.items_per_page, 1);
        assert_eq!(page.data, vec!['b']);
    }

    #[test]
    fn test_slice_and_navigation_invariants() {
        for total in 0..25usize {
            let items: Vec<usize> = (0..total).collect();
            for size in 1..8usize {
                for page in 0..8usize {
                    let p = paginate(&items, page, size);
                    assert_eq!(
                        p.start_index + p.data.len(),
                        p.end_index.min(p.total_items),
                        "total={total} size={size} page={page}"
                    );
                    assert_eq!(p.has_next_page, p.current_page < p.total_pages);
                    assert_eq!(p.has_prev_page, p.current_page > 1);
                    assert!(p.current_page >= 1 && p.current_page <= p.total_pages);
                }
            }
        }
    }

    #[test]
    fn test_paginated_pages() {
        let items: Vec<u8> = (0..7).collect();
        let pages = paginated_pages(&items, 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].data, vec![6]);
        assert!(paginated_pages::<u8>(&[], 3).is_empty());
    }

    #[test]
    fn test_pagination_urls() {
        let urls = pagination_urls(2, 3, "/blog");
        assert_eq!(urls.prev_url.as_deref(), Some("/blog"));
        assert_eq!(urls.next_url.as_deref(), Some("/blog/3"));
        assert_eq!(urls.page_urls, vec!["/blog", "/blog/2", "/blog/3"]);

        let first = pagination_urls(1, 1, "/work");
        assert!(first.prev_url.is_none());
        assert!(first.next_url.is_none());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, 1, 2).map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total_pages, 2);
    }
}
