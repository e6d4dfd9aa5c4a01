//! Feedback components for inline validation and confirmation messages

use dioxus::prelude::*;

/// Props for the ErrorMessage component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorMessageProps {
    /// Error message to display
    pub message: String,
}

/// Inline error message, rendered under the control it belongs to
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    rsx! {
        div { class: "error-message",
            span { class: "error-icon", "⚠" }
            span { class: "error-text", "{props.message}" }
        }
    }
}

/// Props for the SuccessMessage component
#[derive(Props, Clone, PartialEq)]
pub struct SuccessMessageProps {
    /// Success message to display
    pub message: String,
}

/// Inline success confirmation
#[component]
pub fn SuccessMessage(props: SuccessMessageProps) -> Element {
    rsx! {
        div { class: "success-message",
            span { class: "success-icon", "✓" }
            span { class: "success-text", "{props.message}" }
        }
    }
}
