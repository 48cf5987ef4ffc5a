//! Seller stalls.

pub mod model;
pub mod status;

pub use model::Stall;
pub use status::StallStatus;
