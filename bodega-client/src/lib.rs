//! Bodega Client - HTTP client for the storefront REST backend
//!
//! Provides typed calls to the `/offers`, `/products` and `/bill` resources.
//! The backend session is cookie-based, so every request goes through one
//! cookie-holding client.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ImageUpload;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
