//! # Kitbase Core
//!
//! Core types, validation, and error handling for Kitbase.
//!
//! This crate provides the foundational building blocks used throughout
//! the Kitbase ecosystem, including:
//!
//! - **Types**: Identifier aliases and field limits for the equipment catalog
//! - **Equipment**: The catalog record plus its create/update payloads and
//!   the paged list envelope the API serves
//! - **Validation**: Field rules evaluated client-side before anything is
//!   sent over the wire
//! - **Errors**: Unified API error handling with `ApiError` and `ApiResult`
//!

pub mod equipment;
pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use equipment::{
    CATEGORY_RULES, DESCRIPTION_RULES, Equipment, EquipmentCreate, EquipmentUpdate,
    EquipmentsPage, LOCATION_RULES, Message, TITLE_RULES,
};
pub use error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};
pub use types::{
    CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, EquipmentId, LOCATION_MAX_LEN, TITLE_MAX_LEN,
};
pub use validation::{FieldError, FieldViolation, Rule, Validatable, check};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
