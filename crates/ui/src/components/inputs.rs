//! # Input Components
//!
//! Reusable form input components for the Kitbase UI.
//!
//! This module provides:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input with optional character count
//!
//! Both surface validation through an `error` prop rendered under the
//! field and report blurs so the form layer can run its touched-field
//! validation.
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Maximum length
    #[props(default)]
    pub max_length: Option<usize>,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Blur handler
    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled, &props.class);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            // Input
            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                maxlength: props.max_length.map(|l| l.to_string()),
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
            }

            // Help text or error
            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            } else if let Some(help) = &props.help_text {
                p {
                    class: "mt-1 text-xs text-slate-500",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Maximum length
    #[props(default)]
    pub max_length: Option<usize>,

    /// Whether to show character count
    #[props(default = false)]
    pub show_count: bool,

    /// Whether to allow resize
    #[props(default = true)]
    pub resizable: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Blur handler
    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let has_error = props.error.is_some();
    let char_count = props.value.chars().count();

    let textarea_class =
        build_textarea_class(has_error, props.disabled, props.resizable, &props.class);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            // Textarea
            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                maxlength: props.max_length.map(|l| l.to_string()),
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
                "{props.value}"
            }

            // Footer (help text / error / character count)
            div {
                class: "flex justify-between items-center mt-1",

                // Help text or error
                if let Some(error) = &props.error {
                    p {
                        class: "text-xs text-rose-400",
                        "{error}"
                    }
                } else if let Some(help) = &props.help_text {
                    p {
                        class: "text-xs text-slate-500",
                        "{help}"
                    }
                } else {
                    span {}
                }

                // Character count
                if props.show_count {
                    span {
                        class: "text-xs text-slate-500",
                        if let Some(max) = props.max_length {
                            "{char_count}/{max}"
                        } else {
                            "{char_count}"
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

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
        "placeholder-slate-500",
        "transition-colors",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.push("border-rose-500");
        classes.push("focus:ring-rose-500/30");
        classes.push("focus:border-rose-500");
    } else {
        classes.push("border-slate-700");
        classes.push("focus:ring-indigo-500/30");
        classes.push("focus:border-indigo-500");
    }

    if disabled {
        classes.push("opacity-50");
        classes.push("cursor-not-allowed");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Build textarea class string
fn build_textarea_class(
    has_error: bool,
    disabled: bool,
    resizable: bool,
    extra: &Option<String>,
) -> String {
    let mut class = build_input_class(has_error, disabled, extra);

    if !resizable {
        class.push_str(" resize-none");
    } else {
        class.push_str(" resize-y");
    }

    class
}

// ============================================================================
// Tests
// ============================================================================
