//! Runtime wrapper around the static catalog.
//!
//! The catalog data is immutable at runtime; this layer only adds accounting
//! of ids the database does not know yet, so it can be expanded.
mod catalog;

pub use catalog::{CatalogOracle, UnknownEntityCounts};
