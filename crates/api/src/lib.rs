//! # Kitbase API
//!
//! Async HTTP client for the Kitbase equipment API.
//!
//! This crate covers everything between the UI and the backend:
//!
//! - **Client**: `EquipmentsClient`, a thin reqwest wrapper over the
//!   equipment CRUD endpoints with uniform error mapping
//! - **Config**: `ClientConfig`, the layered base-URL configuration
//!   (built-in default, config file, environment override)
//!

pub mod client;
pub mod config;

// Re-export commonly used items at crate root
pub use client::{DEFAULT_PAGE_LIMIT, EquipmentsClient};
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
