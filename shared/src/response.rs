//! Pagination types
//!
//! The backend always returns full collections; list views page them
//! locally with these wrappers.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page as u64) as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Whether a page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaginatedResponse<T> {
    /// List of items
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(page, per_page, total),
        }
    }

    /// Cut one page out of a full collection.
    ///
    /// `page` is 1-based; page 0 is treated as page 1. A page past the end
    /// yields no items but still reports the real totals.
    pub fn from_items(all: Vec<T>, page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let total = all.len() as u64;
        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let items = all
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Self::new(items, page, per_page, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(1, 0, 11).total_pages, 0);
    }

    #[test]
    fn test_from_items() {
        let page = PaginatedResponse::from_items((1..=7).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.pagination.total, 7);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next());

        let last = PaginatedResponse::from_items((1..=7).collect::<Vec<_>>(), 3, 3);
        assert_eq!(last.items, vec![7]);
        assert!(!last.pagination.has_next());
    }

    #[test]
    fn test_from_items_out_of_range() {
        let page = PaginatedResponse::from_items(vec!["a", "b"], 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 2);

        let first = PaginatedResponse::from_items(vec!["a", "b"], 0, 1);
        assert_eq!(first.pagination.page, 1);
        assert_eq!(first.items, vec!["a"]);
    }
}
