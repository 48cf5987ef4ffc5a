//! Sorting types for list views.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result for this direction.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Return the direction as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(AppError::validation(format!(
                "Invalid sort direction: '{s}'. Expected one of: asc, desc"
            ))),
        }
    }
}

/// The field and direction currently ordering a list view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// Field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Create a new sort state.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Column-header click semantics: the same field flips direction, a
    /// different field starts ascending.
    pub fn toggle_or_set(current: Option<&SortState>, field: &str) -> Self {
        match current {
            Some(sort) if sort.field == field => Self::new(field, sort.direction.toggled()),
            _ => Self::asc(field),
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

impl FromStr for SortState {
    type Err = AppError;

    /// Parse `field`, `field:asc`, `field:desc` or `-field`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (field, direction) = match s.split_once(':') {
            Some((field, dir)) => (field.trim(), dir.parse()?),
            None => match s.strip_prefix('-') {
                Some(field) => (field.trim(), SortDirection::Desc),
                None => (s, SortDirection::Asc),
            },
        };

        if field.is_empty() {
            return Err(AppError::validation(format!(
                "Invalid sort expression: '{s}'. Expected 'field', 'field:asc' or 'field:desc'"
            )));
        }

        Ok(Self::new(field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reverses_for_desc() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_parse_sort_expressions() {
        assert_eq!("name".parse::<SortState>().unwrap(), SortState::asc("name"));
        assert_eq!(
            "submittedDate:DESC".parse::<SortState>().unwrap(),
            SortState::desc("submittedDate")
        );
        assert_eq!(
            "-price".parse::<SortState>().unwrap(),
            SortState::desc("price")
        );
        assert!(":desc".parse::<SortState>().is_err());
        assert!("name:sideways".parse::<SortState>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let sort = SortState::desc("timestamp");
        assert_eq!(sort.to_string(), "timestamp:desc");
        assert_eq!(sort.to_string().parse::<SortState>().unwrap(), sort);
    }

    #[test]
    fn test_toggle_or_set() {
        let first = SortState::toggle_or_set(None, "name");
        assert_eq!(first, SortState::asc("name"));

        let flipped = SortState::toggle_or_set(Some(&first), "name");
        assert_eq!(flipped, SortState::desc("name"));

        let other = SortState::toggle_or_set(Some(&flipped), "price");
        assert_eq!(other, SortState::asc("price"));
    }
}
