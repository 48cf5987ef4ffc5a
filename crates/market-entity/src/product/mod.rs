//! Products listed by stalls.

pub mod model;
pub mod status;

pub use model::Product;
pub use status::ProductStatus;
