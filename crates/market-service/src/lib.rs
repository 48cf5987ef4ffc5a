//! # market-service
//!
//! The list-management pipeline behind every admin table:
//! Source → Filter → Sort → Paginate. The stage functions in
//! [`listing`] are pure; [`listing::view::ListView`] holds the view-local
//! state and memoizes the filtered, sorted result between renders.

pub mod listing;

pub use listing::view::ListView;
