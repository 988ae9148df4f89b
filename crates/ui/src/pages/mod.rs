//! Page Components for Kitbase
//!
//! This module contains all the page/view components for the application.
//!
//! ## Available Pages
//!
//! - **CatalogPage**: The equipment list with search, add, edit, and delete
//!

pub mod catalog;

// Re-export page components for convenience
pub use catalog::CatalogPage;
