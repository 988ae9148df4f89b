//! # Catalog Page
//!
//! The main equipment list for Kitbase.
//!
//! This page provides:
//! - A table of every equipment record (title, category, location, description)
//! - Client-side search across all text columns
//! - Row actions for editing and deleting records
//! - A header action for adding new records
//!
//! The table reloads whenever the equipment collection is marked stale,
//! which is how dialog saves and deletes propagate back into the list.

use dioxus::prelude::*;

use kitbase_api::{ClientConfig, DEFAULT_PAGE_LIMIT, EquipmentsClient};
use kitbase_core::{ApiResult, Equipment, EquipmentsPage};

use crate::cache::{self, CollectionKey};
use crate::components::TextInput;
use crate::state::{APP_STATE, Dialog};

// ============================================================================
// Catalog Page Component
// ============================================================================

/// Main equipment list page
#[component]
pub fn CatalogPage() -> Element {
    let mut items = use_signal(Vec::<Equipment>::new);
    let mut total = use_signal(|| 0usize);
    let mut is_loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut search_query = use_signal(String::new);

    // Refetch whenever the equipment collection goes stale. The cache starts
    // stale, so this same path performs the initial load on mount.
    use_effect(move || {
        if !cache::is_stale(CollectionKey::Equipments) {
            return;
        }
        cache::mark_fresh(CollectionKey::Equipments);

        spawn(async move {
            is_loading.set(true);
            load_error.set(None);

            match fetch_catalog().await {
                Ok(page) => {
                    items.set(page.data);
                    total.set(page.count);
                }
                Err(err) => {
                    tracing::warn!("Failed to load equipment: {err}");
                    load_error.set(Some(err.user_message()));
                }
            }

            is_loading.set(false);
        });
    });

    let query = search_query.read().clone();
    let visible: Vec<Equipment> = items
        .read()
        .iter()
        .filter(|equipment| matches_query(equipment, &query))
        .cloned()
        .collect();

    let error_message = load_error.read().clone();
    let loading = *is_loading.read();
    let catalog_empty = items.read().is_empty();
    let count_label = item_count_label(*total.read());

    rsx! {
        div {
            class: "catalog-page flex-1 flex flex-col overflow-hidden",

            // Toolbar
            div {
                class: "p-4 border-b border-slate-700 flex items-center justify-between gap-3",

                div {
                    class: "flex items-center gap-3",
                    span { class: "text-2xl", "🧰" }
                    h1 {
                        class: "text-xl font-bold text-white",
                        "Equipment"
                    }
                }

                div {
                    class: "flex items-center gap-3",

                    div {
                        class: "w-64",
                        TextInput {
                            value: query.clone(),
                            placeholder: "Search equipment...",
                            on_change: move |value: String| search_query.set(value),
                        }
                    }

                    button {
                        class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors flex items-center gap-2",
                        onclick: move |_| APP_STATE.write().show_dialog(Dialog::AddEquipment),
                        span { "+" }
                        "Add Equipment"
                    }
                }
            }

            // Content
            if let Some(message) = error_message {
                LoadErrorState { message }
            } else if loading {
                LoadingState {}
            } else if catalog_empty {
                EmptyCatalogState {}
            } else {
                CatalogTable { equipments: visible }
            }

            // Footer
            div {
                class: "px-4 py-2 border-t border-slate-700 text-xs text-slate-500",
                "{count_label}"
            }
        }
    }
}

// ============================================================================
// Table Components
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct CatalogTableProps {
    equipments: Vec<Equipment>,
}

#[component]
fn CatalogTable(props: CatalogTableProps) -> Element {
    if props.equipments.is_empty() {
        return rsx! {
            div {
                class: "flex-1 flex items-center justify-center p-8",
                p {
                    class: "text-slate-400",
                    "No equipment matches your search"
                }
            }
        };
    }

    rsx! {
        div {
            class: "flex-1 overflow-y-auto",

            // Table header
            div {
                class: "sticky top-0 bg-slate-800 border-b border-slate-700 grid grid-cols-5 gap-4 px-4 py-2 text-sm font-medium text-slate-400",
                span { "Title" }
                span { "Category" }
                span { "Location" }
                span { "Description" }
                span { "Actions" }
            }

            // Table body
            div {
                class: "divide-y divide-slate-700/50",

                for equipment in props.equipments.iter() {
                    EquipmentRow {
                        key: "{equipment.id}",
                        equipment: equipment.clone(),
                    }
                }
            }
        }
    }
}

/// A single table row with edit and delete actions
#[component]
fn EquipmentRow(equipment: Equipment) -> Element {
    let edit_target = equipment.clone();
    let delete_target = equipment.clone();

    rsx! {
        div {
            class: "grid grid-cols-5 gap-4 px-4 py-3 hover:bg-slate-700/30 transition-colors",

            span {
                class: "font-medium text-white truncate",
                "{equipment.title}"
            }

            span {
                class: "text-slate-300 truncate",
                "{equipment.category}"
            }

            span {
                class: "text-slate-300 truncate",
                "{equipment.location}"
            }

            if let Some(description) = &equipment.description {
                span {
                    class: "text-slate-400 truncate",
                    "{description}"
                }
            } else {
                span {
                    class: "text-slate-600 italic",
                    "No description"
                }
            }

            span {
                class: "flex items-center gap-1",

                button {
                    class: "p-1.5 hover:bg-slate-600 rounded transition-colors",
                    title: "Edit",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .show_dialog(Dialog::EditEquipment(edit_target.clone()));
                    },
                    "✏️"
                }

                button {
                    class: "p-1.5 hover:bg-red-500/20 rounded transition-colors",
                    title: "Delete",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .show_dialog(Dialog::ConfirmDelete(delete_target.clone()));
                    },
                    "🗑️"
                }
            }
        }
    }
}

// ============================================================================
// State Components
// ============================================================================

#[component]
fn LoadingState() -> Element {
    rsx! {
        div {
            class: "flex-1 flex items-center justify-center p-8",
            div {
                class: "text-center",
                span { class: "text-3xl animate-spin inline-block", "⏳" }
                p {
                    class: "text-slate-400 mt-4",
                    "Loading equipment..."
                }
            }
        }
    }
}

#[component]
fn EmptyCatalogState() -> Element {
    rsx! {
        div {
            class: "flex-1 flex items-center justify-center p-8",
            div {
                class: "text-center max-w-md",
                div {
                    class: "w-16 h-16 mx-auto mb-4 rounded-full bg-indigo-900/50 flex items-center justify-center",
                    span { class: "text-3xl", "🧰" }
                }
                h3 {
                    class: "text-xl font-semibold text-white mb-2",
                    "No Equipment Yet"
                }
                p {
                    class: "text-slate-400 mb-4",
                    "Your catalog is empty. Add your first piece of equipment to get started."
                }
                button {
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors",
                    onclick: move |_| APP_STATE.write().show_dialog(Dialog::AddEquipment),
                    "+ Add Equipment"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LoadErrorStateProps {
    message: String,
}

#[component]
fn LoadErrorState(props: LoadErrorStateProps) -> Element {
    rsx! {
        div {
            class: "flex-1 flex items-center justify-center p-8",
            div {
                class: "text-center max-w-md",
                div {
                    class: "w-16 h-16 mx-auto mb-4 rounded-full bg-red-500/20 flex items-center justify-center",
                    span { class: "text-3xl", "⚠️" }
                }
                h3 {
                    class: "text-xl font-semibold text-red-400 mb-2",
                    "Could not load equipment"
                }
                p {
                    class: "text-slate-400 mb-4",
                    "{props.message}"
                }
                button {
                    class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                    onclick: move |_| cache::invalidate(CollectionKey::Equipments),
                    "Retry"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Fetch the first page of the catalog through a freshly configured client
async fn fetch_catalog() -> ApiResult<EquipmentsPage> {
    let client = EquipmentsClient::new(&ClientConfig::load())?;
    client.list(0, DEFAULT_PAGE_LIMIT).await
}

/// Footer label for the total record count
fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Case-insensitive match against every text column
fn matches_query(equipment: &Equipment, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    equipment.title.to_lowercase().contains(&query)
        || equipment.category.to_lowercase().contains(&query)
        || equipment.location.to_lowercase().contains(&query)
        || equipment
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&query))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Equipment {
        Equipment::new("Cordless Drill", "Power Tools", "Shelf A")
            .with_description("18V with two batteries")
    }

    #[test]
    fn test_item_count_label_pluralizes() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(42), "42 items");
    }

    #[test]
    fn test_matches_query_empty_matches_everything() {
        assert!(matches_query(&sample(), ""));
    }

    #[test]
    fn test_matches_query_searches_all_columns() {
        let equipment = sample();
        assert!(matches_query(&equipment, "drill"));
        assert!(matches_query(&equipment, "power"));
        assert!(matches_query(&equipment, "shelf"));
        assert!(matches_query(&equipment, "batteries"));
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        assert!(matches_query(&sample(), "CORDLESS"));
    }

    #[test]
    fn test_matches_query_rejects_misses() {
        assert!(!matches_query(&sample(), "lathe"));
    }

    #[test]
    fn test_matches_query_handles_missing_description() {
        let mut equipment = sample();
        equipment.description = None;
        assert!(!matches_query(&equipment, "batteries"));
        assert!(matches_query(&equipment, "drill"));
    }
}
