//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use market_core::error::AppError;
use market_core::types::pagination::Page;
use market_core::types::record::{Record, RecordSchema};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print one page of records, one column per schema field
pub fn print_page<R: Record + Serialize>(page: &Page<&R>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if page.items.is_empty() {
                println!("No results found.");
            } else {
                let schema = R::schema();
                let mut builder = Builder::default();
                builder.push_record(schema.field_names().map(String::from));
                for record in &page.items {
                    builder.push_record(schema.field_names().map(|name| {
                        record
                            .field(name)
                            .map(|value| value.to_string())
                            .unwrap_or_default()
                    }));
                }
                println!("{}", builder.build());
            }
            println!("{}", footer(page));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Schema display row
#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    /// Field name
    field: &'static str,
    /// Value kind
    kind: &'static str,
    /// Included in search
    search: bool,
    /// Usable as filter
    filter: bool,
    /// Usable as sort key
    sort: bool,
}

/// Print an entity schema
pub fn print_schema(schema: &RecordSchema, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<FieldRow> = schema
                .fields
                .iter()
                .map(|def| FieldRow {
                    field: def.name,
                    kind: def.kind.as_str(),
                    search: def.searchable,
                    filter: def.categorical,
                    sort: def.sortable,
                })
                .collect();
            println!("{}", Table::new(rows));
            match schema.default_sort() {
                Some(sort) => print_kv("Default sort", &sort.to_string()),
                None => print_kv("Default sort", "source order"),
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(schema.fields).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(err: &AppError) {
    eprintln!("{}", error_line(err));
}

/// `✗ CONFIGURATION: unknown field 'foo'`
fn error_line(err: &AppError) -> String {
    format!("✗ {}", err)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// `Showing 11-20 of 25 (page 2/3)`
fn footer<T>(page: &Page<T>) -> String {
    match page.range() {
        Some(range) => format!(
            "Showing {}-{} of {} (page {}/{})",
            range.start(),
            range.end(),
            page.total_items,
            page.index + 1,
            page.total_pages
        ),
        None => format!(
            "Showing 0 of {} (page {}/{})",
            page.total_items,
            page.index.saturating_add(1),
            page.total_pages
        ),
    }
}
