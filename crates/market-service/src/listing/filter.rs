//! Filter stage.

use market_core::error::AppError;
use market_core::types::filter::FilterState;
use market_core::types::record::{FieldValue, Record};

/// A filter state checked against a record schema, ready to test rows.
#[derive(Debug)]
pub struct Predicate<'s> {
    needle: Option<String>,
    search_fields: Vec<&'static str>,
    constraints: Vec<(&'s str, &'s str)>,
}

impl<'s> Predicate<'s> {
    /// Validate `state` against `R`'s schema.
    ///
    /// Every categorical key, including ones currently set to "all", must
    /// name a field declared categorical; anything else is a configuration
    /// error.
    pub fn compile<R: Record>(state: &'s FilterState) -> Result<Self, AppError> {
        let schema = R::schema();
        for field in state.categorical.keys() {
            schema.require_categorical(field)?;
        }

        Ok(Self {
            needle: state.normalized_search(),
            search_fields: schema.searchable_fields().map(|f| f.name).collect(),
            constraints: state.active_filters().collect(),
        })
    }

    /// Whether the predicate keeps every record.
    pub fn is_identity(&self) -> bool {
        self.needle.is_none() && self.constraints.is_empty()
    }

    /// Test one record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let constraints_hold = self
            .constraints
            .iter()
            .all(|(field, selected)| value_of(record, field).matches_exact(selected));
        if !constraints_hold {
            return false;
        }

        match &self.needle {
            None => true,
            Some(needle) => self
                .search_fields
                .iter()
                .any(|name| value_of(record, name).contains_ignore_case(needle)),
        }
    }
}

fn value_of<'r, R: Record>(record: &'r R, name: &str) -> FieldValue<'r> {
    record.field(name).unwrap_or(FieldValue::Null)
}

/// Return the records matching `state`, in input order.
pub fn apply<'a, R: Record>(records: &'a [R], state: &FilterState) -> Result<Vec<&'a R>, AppError> {
    let predicate = Predicate::compile::<R>(state)?;
    if predicate.is_identity() {
        return Ok(records.iter().collect());
    }
    Ok(records.iter().filter(|r| predicate.matches(*r)).collect())
}
