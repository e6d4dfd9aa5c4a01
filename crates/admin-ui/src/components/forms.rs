//! Form components for the admin UI

use super::feedback::ErrorMessage;
use dioxus::prelude::*;

/// Props for the Input component
#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    /// Input label
    pub label: String,
    /// Current value
    pub value: String,
    /// Placeholder text
    #[props(default = String::new())]
    pub placeholder: String,
    /// Whether a value is required
    #[props(default = false)]
    pub required: bool,
    /// Error message to display under the control
    #[props(default = None)]
    pub error: Option<String>,
    /// Callback on every keystroke; commits nothing by itself
    pub oninput: EventHandler<String>,
}

/// Single-line text input with label and inline validation message
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = if props.error.is_some() {
        "form-input error"
    } else {
        "form-input"
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label",
                "{props.label}"
                if props.required {
                    span { class: "required", " *" }
                }
            }
            input {
                r#type: "text",
                class: "{input_class}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                oninput: move |evt| props.oninput.call(evt.value().clone())
            }
            if let Some(error) = &props.error {
                ErrorMessage { message: error.clone() }
            }
        }
    }
}

/// Props for the TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// TextArea label
    pub label: String,
    /// Current value
    pub value: String,
    /// Placeholder text
    #[props(default = String::new())]
    pub placeholder: String,
    /// Number of rows
    #[props(default = 3.0)]
    pub rows: f64,
    /// Whether a value is required
    #[props(default = false)]
    pub required: bool,
    /// Error message to display under the control
    #[props(default = None)]
    pub error: Option<String>,
    /// Callback on every keystroke; commits nothing by itself
    pub oninput: EventHandler<String>,
}

/// Multi-line text input with label and inline validation message
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = if props.error.is_some() {
        "form-textarea error"
    } else {
        "form-textarea"
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label",
                "{props.label}"
                if props.required {
                    span { class: "required", " *" }
                }
            }
            textarea {
                class: "{textarea_class}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                rows: props.rows,
                required: props.required,
                oninput: move |evt| props.oninput.call(evt.value().clone())
            }
            if let Some(error) = &props.error {
                ErrorMessage { message: error.clone() }
            }
        }
    }
}

/// Props for the Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    /// Toggle label
    pub label: String,
    /// Help text rendered under the label
    #[props(default = String::new())]
    pub hint: String,
    /// Current state
    pub checked: bool,
    /// Callback when the state flips
    pub onchange: EventHandler<bool>,
}

/// Boolean toggle switch; state changes commit immediately through `onchange`
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    rsx! {
        div { class: "form-group toggle-group",
            label { class: "toggle-label",
                input {
                    r#type: "checkbox",
                    class: "form-toggle",
                    checked: props.checked,
                    onchange: move |evt| props.onchange.call(evt.checked())
                }
                span { class: "toggle-text", "{props.label}" }
            }
            if !props.hint.is_empty() {
                p { class: "toggle-hint text-sm text-gray-500", "{props.hint}" }
            }
        }
    }
}

/// Props for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Button content
    pub children: Element,
    /// Button variant (primary, secondary)
    #[props(default = "primary".to_string())]
    pub variant: String,
    /// Button size (small, medium)
    #[props(default = "medium".to_string())]
    pub size: String,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler
    #[props(default = EventHandler::default())]
    pub onclick: EventHandler<MouseEvent>,
}

/// Button component
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let button_class = format!("btn btn-{} btn-{}", props.variant, props.size);

    rsx! {
        button {
            r#type: "button",
            class: "{button_class}",
            disabled: props.disabled,
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            {props.children}
        }
    }
}
