//! User record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use market_core::types::record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortDirection;

use super::role::{UserRole, UserStatus};

/// A registered buyer, seller or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Marketplace role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Registration day.
    pub joined_date: NaiveDate,
}

static SCHEMA: RecordSchema = RecordSchema {
    entity: "users",
    fields: &[
        FieldDef::new("id", FieldKind::Integer).sortable(),
        FieldDef::new("name", FieldKind::Text).searchable().sortable(),
        FieldDef::new("email", FieldKind::Text).searchable().sortable(),
        FieldDef::new("role", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("status", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("joinedDate", FieldKind::Date).sortable(),
    ],
    default_sort: Some(("name", SortDirection::Asc)),
};

impl Record for User {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "role" => FieldValue::Text(self.role.as_str()),
            "status" => FieldValue::Text(self.status.as_str()),
            "joinedDate" => FieldValue::Date(self.joined_date),
            _ => return None,
        })
    }
}
