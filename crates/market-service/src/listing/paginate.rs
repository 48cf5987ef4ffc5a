//! Pagination stage.

use market_core::types::pagination::{self, Page, PageState};

/// Slice one page out of `rows`. An index past the end yields an empty
/// page that still reports the full total.
pub fn apply<T: Clone>(rows: &[T], state: PageState) -> Page<T> {
    let total = rows.len();
    let start = state.offset().min(total);
    let end = start.saturating_add(state.size).min(total);
    Page::new(rows[start..end].to_vec(), state, total)
}

/// Number of pages the UI should offer for `total` matches.
pub fn page_count(total: usize, size: usize) -> usize {
    pagination::page_count(total, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_and_last_page() {
        let rows = numbers(25);
        let first = apply(&rows, PageState::new(0, 10));
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_items, 25);
        assert!(first.has_next);

        let last = apply(&rows, PageState::new(2, 10));
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next);
    }

    #[test]
    fn test_out_of_range_is_empty_not_error() {
        let rows = numbers(25);
        let page = apply(&rows, PageState::new(3, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 25);

        let page = apply(&rows, PageState::new(usize::MAX, 10));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_pages_reconstruct_sequence() {
        let rows = numbers(23);
        let size = 4;
        let mut rebuilt = Vec::new();
        for index in 0..page_count(rows.len(), size) {
            rebuilt.extend(apply(&rows, PageState::new(index, size)).items);
        }
        assert_eq!(rebuilt, rows);
    }

    #[test]
    fn test_empty_collection() {
        let page = apply::<usize>(&[], PageState::new(0, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
