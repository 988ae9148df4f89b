//! Main Application Component for Kitbase
//!
//! This module contains the root Dioxus component that renders the entire
//! application. It provides the main layout structure: the brand header, the
//! catalog content area, the status bar, and the overlay layers for dialogs
//! and toast notifications.

use dioxus::prelude::*;

use kitbase_api::ClientConfig;

use crate::components::ToastHost;
use crate::components::dialogs::{AddEquipmentDialog, ConfirmDeleteDialog, EditEquipmentDialog};
use crate::pages::CatalogPage;
use crate::state::{APP_STATE, Dialog, use_active_dialog};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Kitbase UI initialized");
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            // Brand header
            Header {}

            // Main content area
            main {
                class: "flex-1 flex flex-col overflow-hidden",
                CatalogPage {}
            }

            // Status Bar
            StatusBar {}

            // Dialog overlay (if active)
            DialogOverlay {}

            // Toast notifications
            ToastHost {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top bar with app branding
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2",
                span { class: "text-xl", "🧰" }
                span { class: "font-semibold text-sm", "Kitbase" }
            }

            div { class: "flex-1" }

            span {
                class: "text-xs text-slate-500",
                "Equipment Catalog"
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let version = crate::VERSION;
    let api_url = ClientConfig::load().base_url;

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center px-4 text-xs text-slate-400 shrink-0",

            span { "Kitbase v{version}" }

            div { class: "flex-1" }

            span { "API: {api_url}" }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let Some(dialog) = use_active_dialog() else {
        return rsx! {};
    };

    let width_class = dialog_width_class(&dialog);

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",

            // Backdrop
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| {
                    APP_STATE.write().close_dialog();
                }
            }

            // Dialog content
            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 {width_class}",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::AddEquipment => rsx! { AddEquipmentDialog {} },
                    Dialog::EditEquipment(equipment) => rsx! {
                        EditEquipmentDialog { equipment: equipment }
                    },
                    Dialog::ConfirmDelete(equipment) => rsx! {
                        ConfirmDeleteDialog { equipment: equipment }
                    },
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Width class for the dialog container, by dialog kind
fn dialog_width_class(dialog: &Dialog) -> &'static str {
    match dialog {
        Dialog::AddEquipment | Dialog::EditEquipment(_) => "max-w-lg w-full",
        Dialog::ConfirmDelete(_) => "max-w-md w-full",
    }
}

// ============================================================================
// Tests
// ============================================================================
