//! # Confirm Delete Dialog Component
//!
//! Dialog for confirming equipment deletion before it is sent to the server.
//!
//! ## Features
//!
//! - Shows exactly which record will be removed
//! - Delete runs to completion even if the dialog is dismissed mid-flight
//! - On success: toast, close, and the equipment list is marked stale
//! - On failure: error toast, staying open for another attempt
//!

use dioxus::prelude::*;

use kitbase_api::{ClientConfig, EquipmentsClient};
use kitbase_core::{ApiResult, Equipment, EquipmentId, Message};

use crate::cache::{self, CollectionKey};
use crate::state::{APP_STATE, Dialog, ToastLevel};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The record to delete
    pub equipment: Equipment,

    /// Callback invoked once per confirmed delete or explicit cancel
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for deleting an equipment record
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let mut is_deleting = use_signal(|| false);

    let record_id = props.equipment.id;
    let title = props.equipment.title.clone();
    let on_close = props.on_close;

    let handle_delete = move |_| {
        if *is_deleting.peek() {
            return;
        }
        is_deleting.set(true);

        spawn_forever(async move {
            let result = submit_delete(record_id).await;

            if let Ok(mut deleting) = is_deleting.try_write() {
                *deleting = false;
            }
            cache::invalidate(CollectionKey::Equipments);

            match result {
                Ok(message) => {
                    APP_STATE.write().show_toast(
                        "Equipment deleted",
                        message.message,
                        ToastLevel::Success,
                    );

                    let still_open = matches!(
                        &APP_STATE.read().active_dialog,
                        Some(Dialog::ConfirmDelete(current)) if current.id == record_id
                    );
                    if still_open {
                        APP_STATE.write().close_dialog();
                        on_close.call(());
                    }
                }
                Err(err) => {
                    APP_STATE.write().show_toast(
                        "Delete failed",
                        err.user_message(),
                        ToastLevel::Error,
                    );
                }
            }
        });
    };

    let handle_cancel = move |_| {
        APP_STATE.write().close_dialog();
        on_close.call(());
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "confirm-delete-dialog p-6",

            // Header with warning icon
            div {
                class: "flex items-start gap-4 mb-6",

                div {
                    class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-500/20 flex items-center justify-center",
                    span { class: "text-2xl", "⚠️" }
                }

                div {
                    h2 {
                        class: "text-xl font-bold text-red-400 mb-2",
                        "Delete Equipment"
                    }
                    p {
                        class: "text-slate-300",
                        "Are you sure you want to delete \"{title}\"? This action cannot be undone."
                    }
                }
            }

            // Record being deleted
            div {
                class: "mb-4 p-3 bg-slate-700/50 rounded-lg border border-slate-600",
                div {
                    class: "text-sm text-slate-400 mb-1",
                    "Item:"
                }
                div {
                    class: "font-medium text-white",
                    "{title}"
                }
            }

            // Action buttons
            div {
                class: "flex justify-end gap-3 pt-4 border-t border-slate-700",

                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                    disabled: deleting,
                    onclick: handle_cancel,
                    "Cancel"
                }

                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-red-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                    disabled: deleting,
                    onclick: handle_delete,

                    if deleting {
                        span { class: "animate-spin", "⏳" }
                        "Deleting..."
                    } else {
                        span { "🗑️" }
                        "Delete"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Send the delete through a client built from the current configuration
async fn submit_delete(id: EquipmentId) -> ApiResult<Message> {
    let client = EquipmentsClient::new(&ClientConfig::load())?;
    client.delete(id).await
}
