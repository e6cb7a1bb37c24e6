//! Data models
//!
//! Shared between the storefront state layer and the REST backend (via API).
//! The backend is Mongo-style: ids are `_id` strings and field names are
//! camelCase on the wire.

pub mod bill;
pub mod common;
pub mod offer;
pub mod product;

// Re-exports
pub use bill::*;
pub use common::*;
pub use offer::*;
pub use product::*;
