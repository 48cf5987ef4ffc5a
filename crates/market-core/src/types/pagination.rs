//! Pagination types for list views.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page window of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    /// Page number (0-based).
    #[serde(default)]
    pub index: usize,
    /// Number of items per page. Always at least 1.
    #[serde(default = "default_page_size")]
    pub size: usize,
}

impl PageState {
    /// Create a new page state. A zero size is raised to 1.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    /// First page with the given size.
    pub fn first(size: usize) -> Self {
        Self::new(0, size)
    }

    /// Position of the first item on this page.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Go back to the first page.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed to show `total` items. An empty result still
/// occupies one (empty) page.
pub fn page_count(total: usize, size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(size.max(1))
    }
}

/// One page of a filtered, sorted collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (0-based).
    pub index: usize,
    /// Number of items per page.
    pub size: usize,
    /// Total number of matching items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Create a page from its items and the full result count.
    pub fn new(items: Vec<T>, state: PageState, total_items: usize) -> Self {
        let total_pages = page_count(total_items, state.size);
        Self {
            items,
            index: state.index,
            size: state.size,
            total_items,
            total_pages,
            has_next: state.index.saturating_add(1) < total_pages,
            has_previous: state.index > 0,
        }
    }

    /// One-based item numbers shown on this page, e.g. `11..=20`.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.index * self.size + 1;
        Some(first..=first + self.items.len() - 1)
    }

    /// Transform the items, keeping pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_raised() {
        assert_eq!(PageState::new(3, 0).size, 1);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(30, 10), 3);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![21, 22, 23, 24, 25], PageState::new(2, 10), 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert!(page.has_previous);
        assert_eq!(page.range(), Some(21..=25));
    }

    #[test]
    fn test_empty_page_has_no_range() {
        let page: Page<u8> = Page::new(Vec::new(), PageState::new(5, 10), 25);
        assert_eq!(page.range(), None);
        assert!(!page.has_next);
        assert_eq!(page.total_items, 25);
    }
}
