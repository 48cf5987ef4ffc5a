//! Sort stage.
//!
//! Sorting is stable: rows with equal keys keep their relative input order
//! in both directions, so re-sorting an already sorted result is a no-op.

use std::cmp::Ordering;

use market_core::error::AppError;
use market_core::types::record::{FieldValue, Record};
use market_core::types::sorting::SortState;

/// Compare two records on `field`, oriented by the sort direction.
fn compare<R: Record>(a: &R, b: &R, sort: &SortState) -> Ordering {
    let left = a.field(&sort.field).unwrap_or(FieldValue::Null);
    let right = b.field(&sort.field).unwrap_or(FieldValue::Null);
    sort.direction.apply(left.compare(&right))
}

/// Return `rows` ordered by `sort`. The input is left untouched.
pub fn apply<'a, R: Record>(rows: &[&'a R], sort: &SortState) -> Result<Vec<&'a R>, AppError> {
    R::schema().require_sortable(&sort.field)?;

    let mut sorted = rows.to_vec();
    // `sort_by` is a stable merge sort.
    sorted.sort_by(|a, b| compare(*a, *b, sort));
    Ok(sorted)
}

/// Like [`apply`], keeping source order when no sort is selected.
pub fn apply_optional<'a, R: Record>(
    rows: &[&'a R],
    sort: Option<&SortState>,
) -> Result<Vec<&'a R>, AppError> {
    match sort {
        Some(sort) => apply(rows, sort),
        None => Ok(rows.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::{complaint, complaints, ids};
    use market_core::error::ErrorKind;
    use market_entity::ComplaintStatus;

    #[test]
    fn test_date_descending() {
        let data = complaints();
        let rows: Vec<_> = data.iter().collect();
        let out = apply(&rows, &SortState::desc("submittedDate")).unwrap();
        let dates: Vec<String> = out.iter().map(|c| c.submitted_date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-15", "2024-03-14", "2024-03-13"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let data = complaints();
        let rows: Vec<_> = data.iter().collect();
        let _ = apply(&rows, &SortState::asc("subject")).unwrap();
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_stable_for_equal_keys_both_directions() {
        let data = vec![
            complaint(1, "a", ComplaintStatus::Open, "2024-01-01"),
            complaint(2, "b", ComplaintStatus::Closed, "2024-01-01"),
            complaint(3, "c", ComplaintStatus::Open, "2024-01-01"),
            complaint(4, "d", ComplaintStatus::Closed, "2024-01-01"),
        ];
        let rows: Vec<_> = data.iter().collect();

        let asc = apply(&rows, &SortState::asc("status")).unwrap();
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = apply(&rows, &SortState::desc("status")).unwrap();
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_idempotent() {
        let data = complaints();
        let rows: Vec<_> = data.iter().collect();
        let sort = SortState::asc("status");
        let once = apply(&rows, &sort).unwrap();
        let twice = apply(&once, &sort).unwrap();
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_unsortable_field_rejected() {
        let data = complaints();
        let rows: Vec<_> = data.iter().collect();
        let err = apply(&rows, &SortState::asc("description")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(apply(&rows, &SortState::asc("missing")).is_err());
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let data = complaints();
        let rows: Vec<_> = data.iter().collect();
        let out = apply_optional(&rows, None).unwrap();
        assert_eq!(ids(&out), vec![1, 2, 3]);
    }
}
