//! Log entry record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use market_core::types::record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortDirection;

use super::level::{LogLevel, LogModule};

/// One administrative action recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Entry identifier.
    pub id: i64,
    /// Name of the acting user.
    pub user: String,
    /// What was done, e.g. `"Approved stall"`.
    pub action: String,
    /// Marketplace area.
    pub module: LogModule,
    /// Severity.
    pub level: LogLevel,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// Free-form details.
    #[serde(default)]
    pub details: Option<String>,
}

static SCHEMA: RecordSchema = RecordSchema {
    entity: "logs",
    fields: &[
        FieldDef::new("id", FieldKind::Integer).sortable(),
        FieldDef::new("user", FieldKind::Text).searchable().sortable(),
        FieldDef::new("action", FieldKind::Text).searchable().sortable(),
        FieldDef::new("module", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("level", FieldKind::Enum).categorical().sortable(),
        FieldDef::new("timestamp", FieldKind::Timestamp).sortable(),
        FieldDef::new("details", FieldKind::Text).searchable(),
    ],
    default_sort: Some(("timestamp", SortDirection::Desc)),
};

impl Record for LogEntry {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "id" => FieldValue::Integer(self.id),
            "user" => FieldValue::Text(&self.user),
            "action" => FieldValue::Text(&self.action),
            "module" => FieldValue::Text(self.module.as_str()),
            "level" => FieldValue::Text(self.level.as_str()),
            "timestamp" => FieldValue::Timestamp(self.timestamp),
            "details" => self
                .details
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::Text),
            _ => return None,
        })
    }
}
