//! # market-entity
//!
//! Marketplace records shown in the admin list views. Every struct here is
//! a row as delivered by the backend (camelCase JSON) and implements
//! [`market_core::types::Record`] with a statically declared schema whose
//! field names match the wire names.

#[macro_use]
mod macros;

pub mod complaint;
pub mod log;
pub mod product;
pub mod stall;
pub mod user;

pub use complaint::{Complaint, ComplaintStatus};
pub use log::{LogEntry, LogLevel, LogModule};
pub use product::{Product, ProductStatus};
pub use stall::{Stall, StallStatus};
pub use user::{User, UserRole, UserStatus};

#[cfg(test)]
pub(crate) mod testing {
    use market_core::types::Record;

    /// Every declared field must be readable, and nothing undeclared.
    pub fn assert_schema_consistent<R: Record>(sample: &R) {
        let schema = R::schema();
        for def in schema.fields {
            assert!(
                sample.field(def.name).is_some(),
                "{} declares '{}' but does not expose it",
                schema.entity,
                def.name
            );
        }
        assert!(sample.field("noSuchField").is_none());
        if let Some((field, _)) = schema.default_sort {
            assert!(schema.require_sortable(field).is_ok());
        }
    }
}
