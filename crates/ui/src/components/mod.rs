//! # UI Components
//!
//! Reusable Dioxus components for the Kitbase desktop app.
//!
//! This module provides:
//! - **Inputs**: Form input components (text, textarea)
//! - **Dialogs**: Modal dialogs for adding, editing, and deleting equipment
//! - **Toast**: Transient notification banner
//!
//! ## Component Hierarchy
//!
//! ```text
//! Dialogs
//! ├── AddEquipmentDialog (create records)
//! ├── EditEquipmentDialog (edit records)
//! └── ConfirmDeleteDialog (delete confirmation)
//!
//! ToastHost
//! └── (renders the most recent notification, if any)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod toast;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export input components
pub use inputs::{TextArea, TextInput};

// Re-export dialog components
pub use dialogs::{AddEquipmentDialog, ConfirmDeleteDialog, EditEquipmentDialog};

// Toast notifications
pub use toast::ToastHost;
