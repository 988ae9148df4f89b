//! # Toast Component
//!
//! Renders the single transient notification slot from
//! [`crate::state::AppState`].
//!
//! ## Features
//!
//! - One toast visible at a time; a newer toast replaces the current one
//! - Auto-dismisses after a fixed delay
//! - Manually dismissable via a close button
//! - The dismissal timer is guarded by the toast's sequence number, so a
//!   timer started for a replaced toast never takes down its successor
//!

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::{APP_STATE, ToastLevel, use_toast};

/// How long a toast stays visible without interaction
const TOAST_DURATION: Duration = Duration::from_secs(5);

// ============================================================================
// Toast Host
// ============================================================================

/// Renders the current toast and runs its dismissal timer
#[component]
pub fn ToastHost() -> Element {
    // Sequence number of the toast whose timer is already running
    let mut timed_seq = use_signal(|| 0u64);

    use_effect(move || {
        let seq = APP_STATE.read().toast.as_ref().map(|t| t.seq);
        if let Some(seq) = seq
            && seq != *timed_seq.peek()
        {
            timed_seq.set(seq);
            spawn(async move {
                tokio::time::sleep(TOAST_DURATION).await;
                APP_STATE.write().dismiss_toast(seq);
            });
        }
    });

    let Some(toast) = use_toast() else {
        return rsx! {};
    };

    let icon = toast_icon(toast.level);
    let accent = toast_accent_class(toast.level);
    let title_color = toast_title_class(toast.level);

    rsx! {
        div {
            class: "toast fixed bottom-6 right-6 z-50 w-96",

            div {
                class: "flex items-start gap-3 p-4 bg-slate-800 border rounded-xl shadow-2xl {accent}",

                span { class: "text-xl", "{icon}" }

                div {
                    class: "flex-1 min-w-0",
                    p {
                        class: "text-sm font-semibold {title_color}",
                        "{toast.title}"
                    }
                    p {
                        class: "text-sm text-slate-300 break-words",
                        "{toast.message}"
                    }
                }

                button {
                    r#type: "button",
                    class: "text-slate-500 hover:text-slate-300 transition-colors",
                    onclick: move |_| APP_STATE.write().clear_toast(),
                    "✕"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Icon shown next to the toast text
fn toast_icon(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "✅",
        ToastLevel::Error => "❌",
        ToastLevel::Warning => "⚠️",
        ToastLevel::Info => "ℹ️",
    }
}

/// Border accent for the toast card
fn toast_accent_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "border-green-500/50",
        ToastLevel::Error => "border-red-500/50",
        ToastLevel::Warning => "border-amber-500/50",
        ToastLevel::Info => "border-slate-600",
    }
}

/// Color of the toast headline
fn toast_title_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "text-green-400",
        ToastLevel::Error => "text-red-400",
        ToastLevel::Warning => "text-amber-400",
        ToastLevel::Info => "text-slate-200",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_icons_per_level() {
        assert_eq!(toast_icon(ToastLevel::Success), "✅");
        assert_eq!(toast_icon(ToastLevel::Error), "❌");
        assert_eq!(toast_icon(ToastLevel::Warning), "⚠️");
        assert_eq!(toast_icon(ToastLevel::Info), "ℹ️");
    }

    #[test]
    fn test_toast_accent_matches_level() {
        assert!(toast_accent_class(ToastLevel::Success).contains("green"));
        assert!(toast_accent_class(ToastLevel::Error).contains("red"));
        assert!(toast_accent_class(ToastLevel::Warning).contains("amber"));
        assert!(toast_accent_class(ToastLevel::Info).contains("slate"));
    }

    #[test]
    fn test_toast_title_color_matches_level() {
        assert_eq!(toast_title_class(ToastLevel::Success), "text-green-400");
        assert_eq!(toast_title_class(ToastLevel::Error), "text-red-400");
    }

    #[test]
    fn test_toast_duration() {
        assert_eq!(TOAST_DURATION, Duration::from_secs(5));
    }
}
