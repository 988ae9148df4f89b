//! # Edit Equipment Dialog Component
//!
//! Modal form for editing an existing equipment record.
//!
//! ## Features
//!
//! - Seeds its form from the record's current values, reseeding if the
//!   dialog is retargeted at a different record while open
//! - Validates on blur, then on every change for touched fields
//! - Save is enabled only for a dirty, valid form with nothing in flight
//! - Submits a partial update carrying title and description
//! - On success: toast, close, and the equipment list is marked stale
//! - On failure: error toast with the server's detail, staying open with
//!   the entered values intact so the user can retry
//!

use dioxus::prelude::*;

use kitbase_api::{ClientConfig, EquipmentsClient};
use kitbase_core::{
    ApiResult, DESCRIPTION_MAX_LEN, Equipment, EquipmentId, EquipmentUpdate, TITLE_MAX_LEN,
};

use crate::cache::{self, CollectionKey};
use crate::components::{TextArea, TextInput};
use crate::form::EditEquipmentForm;
use crate::state::{APP_STATE, Dialog, ToastLevel};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct EditEquipmentDialogProps {
    /// The record being edited
    pub equipment: Equipment,

    /// Callback invoked once per successful save or explicit cancel,
    /// never on a failed submit
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Modal dialog for editing an equipment record
#[component]
pub fn EditEquipmentDialog(props: EditEquipmentDialogProps) -> Element {
    let mut form = use_signal(|| EditEquipmentForm::seeded(&props.equipment));

    // Reseed when the open dialog is pointed at a different record; the
    // signal keeps its state across prop changes, so this cannot rely on
    // the initializer above
    use_effect(move || {
        let state = APP_STATE.read();
        if let Some(Dialog::EditEquipment(equipment)) = &state.active_dialog
            && form.peek().record_id != equipment.id
        {
            form.set(EditEquipmentForm::seeded(equipment));
        }
    });

    let record_id = props.equipment.id;
    let on_close = props.on_close;

    let mut handle_save = move |_| {
        {
            let mut form = form.write();
            if form.submitting {
                return;
            }
            if !form.can_submit() {
                // A blocked attempt surfaces errors on fields the user
                // never visited
                form.touch_all();
                return;
            }
            form.submitting = true;
        }

        let payload = form.peek().to_update();

        spawn_forever(async move {
            let result = submit_update(record_id, &payload).await;

            // Settled: clear the in-flight flag (if the dialog is still
            // mounted) and mark the listing stale either way
            if let Ok(mut form) = form.try_write() {
                form.submitting = false;
            }
            cache::invalidate(CollectionKey::Equipments);

            match result {
                Ok(updated) => {
                    APP_STATE.write().show_toast(
                        "Equipment updated",
                        saved_message(&updated.title),
                        ToastLevel::Success,
                    );

                    // The user may have dismissed the dialog mid-flight;
                    // only close it if it still shows this record
                    let still_open = matches!(
                        &APP_STATE.read().active_dialog,
                        Some(Dialog::EditEquipment(current)) if current.id == record_id
                    );
                    if still_open {
                        APP_STATE.write().close_dialog();
                        on_close.call(());
                    }
                }
                Err(err) => {
                    APP_STATE.write().show_toast(
                        "Update failed",
                        err.user_message(),
                        ToastLevel::Error,
                    );
                }
            }
        });
    };

    let handle_cancel = move |_| {
        form.write().reset();
        APP_STATE.write().close_dialog();
        on_close.call(());
    };

    let submitting = form.read().submitting;
    let can_submit = form.read().can_submit();

    let title_value = form.read().title.value.clone();
    let title_error = form.read().title.error_message();
    let description_value = form.read().description.value.clone();
    let description_error = form.read().description.error_message();

    rsx! {
        div {
            class: "edit-equipment-dialog p-6",

            // Header
            div {
                class: "flex items-center gap-3 mb-6",
                span { class: "text-2xl", "✏️" }
                h2 {
                    class: "text-xl font-bold text-white",
                    "Edit Equipment"
                }
            }

            // Form
            form {
                class: "space-y-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_save(());
                },

                TextInput {
                    value: title_value,
                    label: "Title",
                    placeholder: "e.g., Cordless Drill",
                    required: true,
                    disabled: submitting,
                    max_length: Some(TITLE_MAX_LEN),
                    error: title_error,
                    on_change: move |value| form.write().title.edit(value),
                    on_blur: move |_| form.write().title.blur(),
                }

                TextArea {
                    value: description_value,
                    label: "Description",
                    placeholder: "Optional notes about this equipment",
                    rows: 3,
                    disabled: submitting,
                    max_length: Some(DESCRIPTION_MAX_LEN),
                    show_count: true,
                    error: description_error,
                    on_change: move |value| form.write().description.edit(value),
                    on_blur: move |_| form.write().description.blur(),
                }

                // Actions
                div {
                    class: "flex justify-end gap-3 pt-6 border-t border-slate-700",

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                        disabled: submitting,
                        onclick: handle_cancel,
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                        disabled: !can_submit,

                        if submitting {
                            span { class: "animate-spin", "⏳" }
                            "Saving..."
                        } else {
                            span { "✓" }
                            "Save Changes"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Send the update through a client built from the current configuration
async fn submit_update(id: EquipmentId, payload: &EquipmentUpdate) -> ApiResult<Equipment> {
    let client = EquipmentsClient::new(&ClientConfig::load())?;
    client.update(id, payload).await
}

/// Body text for the success toast
fn saved_message(title: &str) -> String {
    format!("\"{title}\" was saved.")
}

// ============================================================================
// Tests
// ============================================================================
