//! # Add Equipment Dialog Component
//!
//! Modal form for creating a new equipment record.
//!
//! ## Features
//!
//! - All four catalog fields, empty to start
//! - Same blur-then-live validation as the edit dialog; a pristine form
//!   is simply invalid because required fields are empty
//! - On success: toast, close, and the equipment list is marked stale
//! - On failure: error toast, staying open with the entered values
//!

use dioxus::prelude::*;

use kitbase_api::{ClientConfig, EquipmentsClient};
use kitbase_core::{
    ApiResult, CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, Equipment, EquipmentCreate, LOCATION_MAX_LEN,
    TITLE_MAX_LEN,
};

use crate::cache::{self, CollectionKey};
use crate::components::{TextArea, TextInput};
use crate::form::AddEquipmentForm;
use crate::state::{APP_STATE, Dialog, ToastLevel};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct AddEquipmentDialogProps {
    /// Callback invoked once per successful create or explicit cancel
    #[props(default)]
    pub on_close: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Modal dialog for creating an equipment record
#[component]
pub fn AddEquipmentDialog(props: AddEquipmentDialogProps) -> Element {
    let mut form = use_signal(AddEquipmentForm::new);

    let on_close = props.on_close;

    let mut handle_create = move |_| {
        {
            let mut form = form.write();
            if form.submitting {
                return;
            }
            if !form.can_submit() {
                form.touch_all();
                return;
            }
            form.submitting = true;
        }

        let payload = form.peek().to_create();

        spawn_forever(async move {
            let result = submit_create(&payload).await;

            if let Ok(mut form) = form.try_write() {
                form.submitting = false;
            }
            cache::invalidate(CollectionKey::Equipments);

            match result {
                Ok(created) => {
                    APP_STATE.write().show_toast(
                        "Equipment added",
                        added_message(&created.title),
                        ToastLevel::Success,
                    );

                    let still_open = matches!(
                        &APP_STATE.read().active_dialog,
                        Some(Dialog::AddEquipment)
                    );
                    if still_open {
                        APP_STATE.write().close_dialog();
                        on_close.call(());
                    }
                }
                Err(err) => {
                    APP_STATE.write().show_toast(
                        "Create failed",
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

    let submitting = form.read().submitting;
    let can_submit = form.read().can_submit();

    let title_value = form.read().title.value.clone();
    let title_error = form.read().title.error_message();
    let description_value = form.read().description.value.clone();
    let description_error = form.read().description.error_message();
    let category_value = form.read().category.value.clone();
    let category_error = form.read().category.error_message();
    let location_value = form.read().location.value.clone();
    let location_error = form.read().location.error_message();

    rsx! {
        div {
            class: "add-equipment-dialog p-6 max-h-[80vh] overflow-y-auto",

            // Header
            div {
                class: "flex items-center gap-3 mb-6",
                span { class: "text-2xl", "🧰" }
                h2 {
                    class: "text-xl font-bold text-white",
                    "Add Equipment"
                }
            }

            // Form
            form {
                class: "space-y-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_create(());
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

                div {
                    class: "grid grid-cols-2 gap-4",

                    TextInput {
                        value: category_value,
                        label: "Category",
                        placeholder: "e.g., Power Tools",
                        required: true,
                        disabled: submitting,
                        max_length: Some(CATEGORY_MAX_LEN),
                        error: category_error,
                        on_change: move |value| form.write().category.edit(value),
                        on_blur: move |_| form.write().category.blur(),
                    }

                    TextInput {
                        value: location_value,
                        label: "Location",
                        placeholder: "e.g., Shelf A",
                        required: true,
                        disabled: submitting,
                        max_length: Some(LOCATION_MAX_LEN),
                        error: location_error,
                        on_change: move |value| form.write().location.edit(value),
                        on_blur: move |_| form.write().location.blur(),
                    }
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
                            "Adding..."
                        } else {
                            span { "+" }
                            "Add Equipment"
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

/// Send the create through a client built from the current configuration
async fn submit_create(payload: &EquipmentCreate) -> ApiResult<Equipment> {
    let client = EquipmentsClient::new(&ClientConfig::load())?;
    client.create(payload).await
}

/// Body text for the success toast
fn added_message(title: &str) -> String {
    format!("\"{title}\" is now in the catalog.")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_message_names_the_record() {
        assert_eq!(added_message("Ladder"), "\"Ladder\" is now in the catalog.");
    }
}
