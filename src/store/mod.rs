//! In-memory state for the current session

pub mod catalog;

pub use catalog::CatalogStore;
