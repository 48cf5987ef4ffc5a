//! Administrative activity log.

pub mod level;
pub mod model;

pub use level::{LogLevel, LogModule};
pub use model::LogEntry;
