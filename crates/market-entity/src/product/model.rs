//! Product record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use market_core::types::record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortDirection;

use super::status::ProductStatus;

/// A fish or produce product offered by a stall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: i64,
    /// Listing title.
    pub name: String,
    /// Fish species, e.g. `"Tilapia"`.
    pub species: String,
    /// Variety within the species, if known.
    #[serde(default)]
    pub variety: Option<String>,
    /// Owning stall.
    pub stall_id: i64,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i64,
    /// Listing status.
    pub status: ProductStatus,
    /// Day the product was listed.
    pub listed_date: NaiveDate,
}

static SCHEMA: RecordSchema = RecordSchema {
    entity: "products",
    fields: &[
        FieldDef::new("id", FieldKind::Integer).sortable(),
        FieldDef::new("name", FieldKind::Text).searchable().sortable(),
        FieldDef::new("species", FieldKind::Text)
            .searchable()
            .categorical()
            .sortable(),
        FieldDef::new("variety", FieldKind::Text).searchable().sortable(),
        FieldDef::new("stallId", FieldKind::Integer).categorical().sortable(),
        FieldDef::new("price", FieldKind::Decimal).sortable(),
        FieldDef::new("stock", FieldKind::Integer).sortable(),
        FieldDef::new("status", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("listedDate", FieldKind::Date).sortable(),
    ],
    default_sort: Some(("listedDate", SortDirection::Desc)),
};

impl Record for Product {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::Text(&self.name),
            "species" => FieldValue::Text(&self.species),
            "variety" => self
                .variety
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::Text),
            "stallId" => FieldValue::Integer(self.stall_id),
            "price" => FieldValue::Decimal(self.price),
            "stock" => FieldValue::Integer(self.stock),
            "status" => FieldValue::Text(self.status.as_str()),
            "listedDate" => FieldValue::Date(self.listed_date),
            _ => return None,
        })
    }
}
