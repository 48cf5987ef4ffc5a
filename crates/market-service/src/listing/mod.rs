//! Filtering, sorting and pagination over in-memory record collections.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;
