//! Core type definitions shared across the Seamarket workspace.

pub mod filter;
pub mod pagination;
pub mod record;
pub mod sorting;

pub use filter::{CategoricalFilter, FilterState};
pub use pagination::{Page, PageState};
pub use record::{FieldDef, FieldKind, FieldValue, Record, RecordSchema};
pub use sorting::{SortDirection, SortState};
