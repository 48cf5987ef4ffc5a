//! Buyer and seller complaints.

pub mod model;
pub mod status;

pub use model::Complaint;
pub use status::ComplaintStatus;
