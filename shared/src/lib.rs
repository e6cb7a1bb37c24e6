//! Shared types for the Bodega storefront
//!
//! Wire contracts exchanged with the REST backend (products, offers, bills,
//! checkout lines) plus the validation primitives used by the admin forms.

pub mod error;
pub mod models;
pub mod validation;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use serde::{Deserialize, Serialize};
