//! Typed record abstraction for list views.
//!
//! A [`Record`] is a statically declared row type (complaint, log entry,
//! user, ...) that exposes its fields by name through a declared
//! [`RecordSchema`]. List state refers to fields by name, so the schema is
//! what lets a view reject an unknown or unsupported field once, when the
//! state is set, instead of silently returning unfiltered data.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use super::sorting::{SortDirection, SortState};
use crate::error::AppError;

/// A primitive value borrowed from a record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text or an enumeration's display form.
    Text(&'a str),
    /// Whole number.
    Integer(i64),
    /// Fractional number.
    Decimal(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Point in time.
    Timestamp(DateTime<Utc>),
    /// Absent optional value.
    Null,
}

impl FieldValue<'_> {
    /// Native three-way ordering.
    ///
    /// `Null` sorts before everything. Integers and decimals compare
    /// numerically with each other. Values of unrelated kinds fall back to
    /// a fixed kind rank so the ordering stays total.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        use FieldValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Decimal(a), Decimal(b)) => a.total_cmp(b),
            (Integer(a), Decimal(b)) => (*a as f64).total_cmp(b),
            (Decimal(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Date(a), Date(b)) => a.cmp(b),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Categorical equality against a selected filter value.
    pub fn matches_exact(&self, selected: &str) -> bool {
        match self {
            Self::Text(s) => *s == selected,
            Self::Null => false,
            other => other.to_string() == selected,
        }
    }

    /// Case-insensitive substring test. `needle` must already be lowercase.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        match self {
            Self::Text(s) => s.to_lowercase().contains(needle),
            Self::Null => false,
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    /// Whether this value is [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Integer(_) | Self::Decimal(_) => 1,
            Self::Text(_) => 2,
            Self::Date(_) => 3,
            Self::Timestamp(_) => 4,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::Null => Ok(()),
        }
    }
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Whole number.
    Integer,
    /// Fractional number.
    Decimal,
    /// Calendar date.
    Date,
    /// Point in time.
    Timestamp,
    /// Closed set of values rendered as text.
    Enum,
}

impl FieldKind {
    /// Lowercase name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Enum => "enum",
        }
    }
}

/// Declaration of one record field and what a list view may do with it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDef {
    /// Field name as used in filter/sort state and on the wire.
    pub name: &'static str,
    /// Value type.
    pub kind: FieldKind,
    /// Included in free-text search.
    pub searchable: bool,
    /// Usable as a categorical filter.
    pub categorical: bool,
    /// Usable as a sort key.
    pub sortable: bool,
}

impl FieldDef {
    /// Declare a field with no list capabilities.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            searchable: false,
            categorical: false,
            sortable: false,
        }
    }

    /// Include the field in free-text search.
    pub const fn searchable(self) -> Self {
        Self {
            searchable: true,
            ..self
        }
    }

    /// Allow categorical filtering on the field.
    pub const fn categorical(self) -> Self {
        Self {
            categorical: true,
            ..self
        }
    }

    /// Allow sorting on the field.
    pub const fn sortable(self) -> Self {
        Self {
            sortable: true,
            ..self
        }
    }
}

/// Static description of a record type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Plural entity name, e.g. `"complaints"`.
    pub entity: &'static str,
    /// Declared fields in display order.
    pub fields: &'static [FieldDef],
    /// Sort applied when a view is mounted.
    pub default_sort: Option<(&'static str, SortDirection)>,
}

impl RecordSchema {
    /// Look up a field declaration.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields included in free-text search.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// The default sort as owned state.
    pub fn default_sort(&self) -> Option<SortState> {
        self.default_sort
            .map(|(field, direction)| SortState::new(field, direction))
    }

    /// Resolve a field, failing with a configuration error when unknown.
    pub fn require_field(&self, name: &str) -> Result<&FieldDef, AppError> {
        self.field(name).ok_or_else(|| {
            AppError::configuration(format!(
                "Unknown field '{name}' for {}. Known fields: {}",
                self.entity,
                self.field_names().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// Resolve a field usable as a categorical filter.
    pub fn require_categorical(&self, name: &str) -> Result<&FieldDef, AppError> {
        let def = self.require_field(name)?;
        if !def.categorical {
            return Err(AppError::configuration(format!(
                "Field '{name}' of {} cannot be used as a filter",
                self.entity
            )));
        }
        Ok(def)
    }

    /// Resolve a field usable as a sort key.
    pub fn require_sortable(&self, name: &str) -> Result<&FieldDef, AppError> {
        let def = self.require_field(name)?;
        if !def.sortable {
            return Err(AppError::configuration(format!(
                "Field '{name}' of {} cannot be used for sorting",
                self.entity
            )));
        }
        Ok(def)
    }
}

/// A typed row shown in a list view.
pub trait Record {
    /// Static schema of this record type.
    fn schema() -> &'static RecordSchema;

    /// Read a field by name. Returns `None` only for names the schema does
    /// not declare; absent optional values are [`FieldValue::Null`].
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    static FRUIT_SCHEMA: RecordSchema = RecordSchema {
        entity: "fruits",
        fields: &[
            FieldDef::new("name", FieldKind::Text).searchable().sortable(),
            FieldDef::new("colour", FieldKind::Enum).categorical(),
            FieldDef::new("notes", FieldKind::Text),
        ],
        default_sort: Some(("name", SortDirection::Asc)),
    };

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            FieldValue::Integer(3).compare(&FieldValue::Decimal(2.5)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Decimal(3.0).compare(&FieldValue::Integer(3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_null_sorts_first() {
        assert_eq!(
            FieldValue::Null.compare(&FieldValue::Text("a")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Integer(-10).compare(&FieldValue::Null),
            Ordering::Greater
        );
    }

    #[test]
    fn test_dates_chronological() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(FieldValue::Date(a).compare(&FieldValue::Date(b)), Ordering::Less);
        assert_eq!(FieldValue::Date(a).to_string(), "2024-03-13");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(FieldValue::Text("Spoiled Tilapia").contains_ignore_case("tilapia"));
        assert!(FieldValue::Integer(1042).contains_ignore_case("04"));
        assert!(!FieldValue::Null.contains_ignore_case(""));
    }

    #[test]
    fn test_matches_exact_is_case_sensitive() {
        assert!(FieldValue::Text("Open").matches_exact("Open"));
        assert!(!FieldValue::Text("Open").matches_exact("open"));
        assert!(FieldValue::Integer(7).matches_exact("7"));
    }

    #[test]
    fn test_require_field_errors() {
        let err = FRUIT_SCHEMA.require_field("weight").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("name, colour, notes"));

        assert!(FRUIT_SCHEMA.require_categorical("colour").is_ok());
        assert!(FRUIT_SCHEMA.require_categorical("name").is_err());
        assert!(FRUIT_SCHEMA.require_sortable("notes").is_err());
    }

    #[test]
    fn test_default_sort() {
        let sort = FRUIT_SCHEMA.default_sort().expect("declared");
        assert_eq!(sort.field, "name");
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(FRUIT_SCHEMA.searchable_fields().count(), 1);
    }
}
