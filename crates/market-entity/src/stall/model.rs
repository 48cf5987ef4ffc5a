//! Stall record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use market_core::types::record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortDirection;

use super::status::StallStatus;

/// A seller's storefront in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stall {
    /// Stall identifier.
    pub id: i64,
    /// Storefront name.
    pub name: String,
    /// Name of the owning seller.
    pub owner: String,
    /// Market or port location.
    pub location: String,
    /// Approval status.
    pub status: StallStatus,
    /// Average review rating, absent until reviewed.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Day the stall was registered.
    pub created_date: NaiveDate,
}

static SCHEMA: RecordSchema = RecordSchema {
    entity: "stalls",
    fields: &[
        FieldDef::new("id", FieldKind::Integer).sortable(),
        FieldDef::new("name", FieldKind::Text).searchable().sortable(),
        FieldDef::new("owner", FieldKind::Text).searchable().sortable(),
        FieldDef::new("location", FieldKind::Text)
            .searchable()
            .categorical()
            .sortable(),
        FieldDef::new("status", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("rating", FieldKind::Decimal).sortable(),
        FieldDef::new("createdDate", FieldKind::Date).sortable(),
    ],
    default_sort: Some(("name", SortDirection::Asc)),
};

impl Record for Stall {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::Text(&self.name),
            "owner" => FieldValue::Text(&self.owner),
            "location" => FieldValue::Text(&self.location),
            "status" => FieldValue::Text(self.status.as_str()),
            "rating" => self.rating.map_or(FieldValue::Null, FieldValue::Decimal),
            "createdDate" => FieldValue::Date(self.created_date),
            _ => return None,
        })
    }
}
