//! # Dialog Components
//!
//! This module provides all dialog/modal components for the Kitbase UI.
//!
//! ## Dialogs
//!
//! - **AddEquipmentDialog**: Create a new equipment record
//! - **EditEquipmentDialog**: Edit an existing equipment record
//! - **ConfirmDeleteDialog**: Confirmation dialog for deleting a record
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitbase_ui::components::dialogs::{
//!     AddEquipmentDialog, ConfirmDeleteDialog, EditEquipmentDialog,
//! };
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         AddEquipmentDialog {}
//!         EditEquipmentDialog { equipment: some_equipment }
//!         ConfirmDeleteDialog { equipment: some_equipment }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod add_equipment;
pub mod confirm_delete;
pub mod edit_equipment;

// ============================================================================
// Re-exports
// ============================================================================

pub use add_equipment::AddEquipmentDialog;
pub use confirm_delete::ConfirmDeleteDialog;
pub use edit_equipment::EditEquipmentDialog;
