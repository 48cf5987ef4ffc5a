//! Filter state for list views.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Selection value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Whether a categorical selection constrains nothing.
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// Free-text search plus categorical selections applied to a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    /// Text matched case-insensitively against searchable fields.
    #[serde(default)]
    pub search_term: String,
    /// Selected value per categorical field. Absent keys, empty values and
    /// `"all"` do not constrain.
    #[serde(default)]
    pub categorical: BTreeMap<String, String>,
}

impl FilterState {
    /// Create an identity filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Builder: select a value for a categorical field.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.categorical.insert(field.into(), value.into());
        self
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a value for a categorical field.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.categorical.insert(field.into(), value.into());
    }

    /// Remove the selection for a field. Returns whether one was present.
    pub fn clear_filter(&mut self, field: &str) -> bool {
        self.categorical.remove(field).is_some()
    }

    /// Reset to the identity filter.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.categorical.clear();
    }

    /// Categorical selections that actually constrain.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categorical
            .iter()
            .filter(|(_, value)| !is_unconstrained(value))
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Lowercased search term, or `None` when empty. Whitespace is part of
    /// the term.
    pub fn normalized_search(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }

    /// Whether this filter keeps every record.
    pub fn is_identity(&self) -> bool {
        self.normalized_search().is_none() && self.active_filters().next().is_none()
    }
}

/// A single `field=value` selection, as typed on a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalFilter {
    /// Field name.
    pub field: String,
    /// Selected value.
    pub value: String,
}

impl fmt::Display for CategoricalFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

impl FromStr for CategoricalFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s.split_once('=').ok_or_else(|| {
            AppError::validation(format!("Invalid filter: '{s}'. Expected 'field=value'"))
        })?;
        let field = field.trim();
        if field.is_empty() {
            return Err(AppError::validation(format!(
                "Invalid filter: '{s}'. Field name is empty"
            )));
        }
        Ok(Self {
            field: field.to_string(),
            value: value.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert!(FilterState::new().is_identity());
    }

    #[test]
    fn test_all_and_empty_do_not_constrain() {
        let filter = FilterState::new()
            .with_search("")
            .with_filter("status", "all")
            .with_filter("module", "");
        assert!(filter.is_identity());
        assert_eq!(filter.active_filters().count(), 0);
    }

    #[test]
    fn test_sentinel_is_exact() {
        assert!(is_unconstrained("all"));
        assert!(is_unconstrained(""));
        assert!(!is_unconstrained("All"));
        assert!(!is_unconstrained(" all "));

        let filter = FilterState::new().with_filter("status", " ALL ");
        assert_eq!(filter.active_filters().count(), 1);
    }

    #[test]
    fn test_whitespace_search_is_not_empty() {
        let filter = FilterState::new().with_search("   ");
        assert_eq!(filter.normalized_search().as_deref(), Some("   "));
        assert!(!filter.is_identity());
    }

    #[test]
    fn test_active_filters_and_search() {
        let filter = FilterState::new()
            .with_search("Tilapia ")
            .with_filter("status", "Open")
            .with_filter("role", "all");
        assert_eq!(filter.normalized_search().as_deref(), Some("tilapia "));
        let active: Vec<_> = filter.active_filters().collect();
        assert_eq!(active, vec![("status", "Open")]);
    }

    #[test]
    fn test_clear_filter() {
        let mut filter = FilterState::new().with_filter("status", "Open");
        assert!(filter.clear_filter("status"));
        assert!(!filter.clear_filter("status"));
        filter.set_search("x");
        filter.clear();
        assert!(filter.is_identity());
    }

    #[test]
    fn test_parse_categorical_filter() {
        let f: CategoricalFilter = "status=In Progress".parse().unwrap();
        assert_eq!(f.field, "status");
        assert_eq!(f.value, "In Progress");
        assert!("status".parse::<CategoricalFilter>().is_err());
        assert!("=Open".parse::<CategoricalFilter>().is_err());
    }
}
