//! Application State Management for Kitbase
//!
//! This module provides centralized state management using Dioxus 0.7 Signals.
//! It handles the active dialog and the transient toast notification slot;
//! collection staleness lives in [`crate::cache`].

use dioxus::prelude::*;
use kitbase_core::Equipment;

// ============================================================================
// Dialogs
// ============================================================================

/// Active modal dialog
///
/// Dialogs that act on an existing record carry a copy of it, so the
/// overlay can render them without reaching back into any list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Create a new equipment record
    AddEquipment,
    /// Edit an existing record
    EditEquipment(Equipment),
    /// Confirm deletion of a record
    ConfirmDelete(Equipment),
}

// ============================================================================
// Toasts
// ============================================================================

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Something needs attention
    Warning,
    /// Neutral information
    Info,
}

/// A transient notification
///
/// Exactly one toast is visible at a time; a newer one replaces the
/// current one. `seq` identifies the toast so a dismissal timer started
/// for an older toast cannot take down a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Visual severity
    pub level: ToastLevel,
    /// Monotonic identity of this toast
    pub seq: u64,
}

// ============================================================================
// Application State
// ============================================================================

/// Root application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Currently open dialog, if any
    pub active_dialog: Option<Dialog>,

    /// Currently visible toast, if any
    pub toast: Option<Toast>,

    /// Sequence counter backing toast identities
    toast_seq: u64,
}

impl AppState {
    /// Create the initial state
    pub fn new() -> Self {
        Self {
            active_dialog: None,
            toast: None,
            toast_seq: 0,
        }
    }

    /// Open a dialog, replacing any open one
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Show a toast, replacing the current one
    ///
    /// Returns the new toast's sequence number for timer guards.
    pub fn show_toast(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        level: ToastLevel,
    ) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            title: title.into(),
            message: message.into(),
            level,
            seq: self.toast_seq,
        });
        self.toast_seq
    }

    /// Dismiss the toast with the given sequence number
    ///
    /// A stale timer passes the sequence it was started for; if a newer
    /// toast has replaced that one in the meantime, nothing happens.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }

    /// Dismiss whatever toast is showing
    pub fn clear_toast(&mut self) {
        self.toast = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global State
// ============================================================================

/// The global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Initialize the application state
pub fn init_app_state() {
    // State is initialized with defaults via Signal::global
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to read the active dialog
pub fn use_active_dialog() -> Option<Dialog> {
    APP_STATE.read().active_dialog.clone()
}

/// Hook to read the current toast
pub fn use_toast() -> Option<Toast> {
    APP_STATE.read().toast.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.active_dialog, None);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut state = AppState::new();

        state.show_dialog(Dialog::AddEquipment);
        assert_eq!(state.active_dialog, Some(Dialog::AddEquipment));

        let equipment = Equipment::new("Drill", "Power Tools", "Shelf A");
        state.show_dialog(Dialog::EditEquipment(equipment.clone()));
        assert_eq!(
            state.active_dialog,
            Some(Dialog::EditEquipment(equipment))
        );

        state.close_dialog();
        assert_eq!(state.active_dialog, None);

        // Closing twice is harmless
        state.close_dialog();
        assert_eq!(state.active_dialog, None);
    }

    #[test]
    fn test_show_toast_replaces_current() {
        let mut state = AppState::new();

        let first = state.show_toast("Saved", "All good", ToastLevel::Success);
        let second = state.show_toast("Failed", "Not good", ToastLevel::Error);
        assert!(second > first);

        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.title, "Failed");
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.seq, second);
    }

    #[test]
    fn test_stale_timer_cannot_dismiss_newer_toast() {
        let mut state = AppState::new();

        let first = state.show_toast("Saved", "All good", ToastLevel::Success);
        let second = state.show_toast("Deleted", "Gone", ToastLevel::Success);

        // The timer for the first toast fires late and must not clear
        // the second one
        state.dismiss_toast(first);
        assert!(state.toast.is_some());

        state.dismiss_toast(second);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn test_clear_toast_ignores_sequence() {
        let mut state = AppState::new();
        state.show_toast("Saved", "All good", ToastLevel::Success);

        state.clear_toast();
        assert_eq!(state.toast, None);

        // Clearing an empty slot is harmless
        state.clear_toast();
        assert_eq!(state.toast, None);
    }
}
