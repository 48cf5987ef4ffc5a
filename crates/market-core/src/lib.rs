//! # market-core
//!
//! Core crate for Seamarket. Contains the unified error system,
//! configuration schemas, the [`Record`](types::record::Record)
//! abstraction over typed marketplace rows, and the filter/sort/page
//! state types driven by admin list views.
//!
//! This crate has **no** internal dependencies on other Seamarket crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
