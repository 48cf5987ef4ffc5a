//! Complaint record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use market_core::types::record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortDirection;

use super::status::ComplaintStatus;

/// A complaint filed against a trade, stall or user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Complaint identifier.
    pub id: i64,
    /// Short summary.
    pub subject: String,
    /// Full text of the complaint.
    pub description: String,
    /// Name of the submitting user.
    pub submitted_by: String,
    /// Handling status.
    pub status: ComplaintStatus,
    /// Day the complaint was filed.
    pub submitted_date: NaiveDate,
}

static SCHEMA: RecordSchema = RecordSchema {
    entity: "complaints",
    fields: &[
        FieldDef::new("id", FieldKind::Integer).sortable(),
        FieldDef::new("subject", FieldKind::Text).searchable().sortable(),
        FieldDef::new("description", FieldKind::Text).searchable(),
        FieldDef::new("submittedBy", FieldKind::Text).searchable().sortable(),
        FieldDef::new("status", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("submittedDate", FieldKind::Date).sortable(),
    ],
    default_sort: Some(("submittedDate", SortDirection::Desc)),
};

impl Record for Complaint {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Integer(self.id),
            "subject" => FieldValue::Text(&self.subject),
            "description" => FieldValue::Text(&self.description),
            "submittedBy" => FieldValue::Text(&self.submitted_by),
            "status" => FieldValue::Text(self.status.as_str()),
            "submittedDate" => FieldValue::Date(self.submitted_date),
            _ => return None,
        })
    }
}
