//! # Kitbase UI
//!
//! Dioxus Desktop UI for Kitbase.
//!
//! This crate provides the desktop interface for browsing and editing
//! the equipment catalog served by the Kitbase backend.
//!
//! ## Features
//!
//! - Equipment catalog table with search
//! - Add, edit, and delete dialogs with field-level validation
//! - Toast notifications for request outcomes
//! - A stale-set cache that keeps the table in sync after every mutation
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod cache;
pub mod components;
pub mod form;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use kitbase_api;
pub use kitbase_core;

// Re-export main components
pub use app::App;
pub use cache::{CollectionKey, QueryCache};
pub use form::{AddEquipmentForm, EditEquipmentForm, FieldState};
pub use pages::CatalogPage;
pub use state::{APP_STATE, AppState, Dialog, Toast, ToastLevel, init_app_state};

// Re-export components
pub use components::{
    AddEquipmentDialog, ConfirmDeleteDialog, EditEquipmentDialog, TextArea, TextInput, ToastHost,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Kitbase";

/// Application display title
pub const TITLE: &str = "Kitbase - Equipment Catalog";

/// CSS styles for the application
/// This is the compiled Tailwind CSS included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Kitbase desktop application
///
/// This is the main entry point for the Dioxus desktop app.
/// It initializes the application state and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     kitbase_ui::launch();
/// }
/// ```
pub fn launch() {
    // Initialize logging for the UI
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Initialize application state
    init_app_state();

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None) // Disable default menu, the app has its own header
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Launch with custom configuration
///
/// Allows specifying custom window size and title.
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{} (custom config)", NAME, VERSION);

    init_app_state();

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
///
/// This can be used if you need to access the styles separately
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Kitbase");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Kitbase"));
    }

    #[test]
    fn test_styles_loaded() {
        // Verify CSS is loaded and contains expected content
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains("tailwindcss"));
    }
}
