//! Federation settings page component
//!
//! Renders the editable mirror of the federation section of the server
//! configuration. The configuration snapshot arrives as an explicit
//! component parameter; until one is available the page renders nothing.
//!
//! # Commit semantics
//!
//! - Boolean toggles commit immediately on change.
//! - Text fields mutate only the local mirror on keystroke and commit on an
//!   explicit per-field submit; empty values are rejected client-side with
//!   an inline error and no request is issued.
//! - Every commit is a single-field write; fields are never batched.
//! - A rejected write is logged to the console and otherwise silent; the
//!   mirror keeps the submitted value.
//!
//! Whenever the upstream snapshot changes, the mirror is rebuilt from it and
//! unsaved local edits are discarded.

use std::collections::HashMap;

use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::feedback::SuccessMessage;
use crate::components::forms::{Button, Input, TextArea, Toggle};
use crate::models::config::{FederationConfig, FederationField, FieldValue, SettingsForm};
use crate::services::config_api::FederationConfigApi;
use crate::utils::lifetime::LifetimeToken;

/// Federation settings form
#[component]
pub fn FederationSettings(config: ReadOnlySignal<Option<FederationConfig>>) -> Element {
    let mut form = use_signal(|| SettingsForm::from_snapshot(config()));
    let mut field_errors = use_signal(HashMap::<&'static str, String>::new);
    let mut saved_field = use_signal(|| None::<FederationField>);
    let token = use_hook(LifetimeToken::new);

    use_drop({
        let token = token.clone();
        move || token.revoke()
    });

    // Re-mirror whenever the upstream snapshot changes; unsaved local edits
    // are discarded.
    use_effect(move || {
        form.set(SettingsForm::from_snapshot(config()));
    });

    // Submit one field to the server. Validation failures surface inline and
    // stop the request before it is issued.
    let commit = {
        let token = token.clone();
        move |field: FederationField, value: FieldValue| {
            let token = token.clone();
            let mut field_errors = field_errors;
            let mut saved_field = saved_field;

            spawn_local(async move {
                if let Err(error) = FederationConfigApi::validate_field(field, &value).await {
                    if token.is_live() {
                        field_errors.with_mut(|errors| {
                            errors.insert(field.wire_name(), error.user_message());
                        });
                    }
                    return;
                }
                if token.is_live() {
                    field_errors.with_mut(|errors| {
                        errors.remove(field.wire_name());
                    });
                }

                match FederationConfigApi::update_field(field, value).await {
                    Ok(()) => {
                        if token.is_live() && field.is_text() {
                            saved_field.set(Some(field));
                        }
                    }
                    Err(error) => {
                        web_sys::console::error_1(
                            &format!("federation config update failed: {}", error).into(),
                        );
                    }
                }
            });
        }
    };

    match form() {
        SettingsForm::Uninitialized => rsx! {},
        SettingsForm::Ready(current) => {
            let errors = field_errors();
            rsx! {
                div { class: "space-y-6",
                    div { class: "bg-white shadow rounded-lg",
                        div { class: "px-4 py-5 sm:p-6",
                            h3 { class: "text-lg leading-6 font-medium text-gray-900",
                                "Federation Settings"
                            }
                            p { class: "mt-1 text-sm text-gray-500",
                                "Let Fediverse accounts follow this server and get alerted when you go live."
                            }
                        }
                    }

                    div { class: "bg-white shadow rounded-lg",
                        div { class: "px-4 py-5 sm:p-6 space-y-6",
                            Toggle {
                                label: FederationField::Enabled.label().to_string(),
                                hint: "Makes this server reachable from the Fediverse.".to_string(),
                                checked: current.enabled,
                                onchange: {
                                    let commit = commit.clone();
                                    move |checked: bool| {
                                        form.with_mut(|form| {
                                            form.set_field(
                                                FederationField::Enabled,
                                                FieldValue::Bool(checked),
                                            );
                                        });
                                        commit(FederationField::Enabled, FieldValue::Bool(checked));
                                    }
                                }
                            }

                            Toggle {
                                label: FederationField::IsPrivate.label().to_string(),
                                hint: "Require manual approval for every follow request.".to_string(),
                                checked: current.is_private,
                                onchange: {
                                    let commit = commit.clone();
                                    move |checked: bool| {
                                        form.with_mut(|form| {
                                            form.set_field(
                                                FederationField::IsPrivate,
                                                FieldValue::Bool(checked),
                                            );
                                        });
                                        commit(FederationField::IsPrivate, FieldValue::Bool(checked));
                                    }
                                }
                            }

                            div { class: "form-field-with-submit",
                                Input {
                                    label: FederationField::Username.label().to_string(),
                                    required: true,
                                    placeholder: "streamer".to_string(),
                                    value: current.username.clone(),
                                    error: errors
                                        .get(FederationField::Username.wire_name())
                                        .cloned(),
                                    oninput: move |value: String| {
                                        saved_field.set(None);
                                        form.with_mut(|form| {
                                            form.set_field(
                                                FederationField::Username,
                                                FieldValue::Text(value),
                                            );
                                        });
                                    }
                                }
                                Button {
                                    variant: "primary".to_string(),
                                    size: "small".to_string(),
                                    onclick: {
                                        let commit = commit.clone();
                                        move |_| {
                                            if let Some(value) =
                                                form.read().value_of(FederationField::Username)
                                            {
                                                commit(FederationField::Username, value);
                                            }
                                        }
                                    },
                                    "Update"
                                }
                                if saved_field() == Some(FederationField::Username) {
                                    SuccessMessage { message: "Username updated.".to_string() }
                                }
                            }

                            div { class: "form-field-with-submit",
                                TextArea {
                                    label: FederationField::GoLiveMessage.label().to_string(),
                                    required: true,
                                    placeholder: "I've gone live!".to_string(),
                                    value: current.go_live_message.clone(),
                                    error: errors
                                        .get(FederationField::GoLiveMessage.wire_name())
                                        .cloned(),
                                    oninput: move |value: String| {
                                        saved_field.set(None);
                                        form.with_mut(|form| {
                                            form.set_field(
                                                FederationField::GoLiveMessage,
                                                FieldValue::Text(value),
                                            );
                                        });
                                    }
                                }
                                Button {
                                    variant: "primary".to_string(),
                                    size: "small".to_string(),
                                    onclick: {
                                        let commit = commit.clone();
                                        move |_| {
                                            if let Some(value) = form
                                                .read()
                                                .value_of(FederationField::GoLiveMessage)
                                            {
                                                commit(FederationField::GoLiveMessage, value);
                                            }
                                        }
                                    },
                                    "Update"
                                }
                                if saved_field() == Some(FederationField::GoLiveMessage) {
                                    SuccessMessage {
                                        message: "Go live message updated.".to_string(),
                                    }
                                }
                            }

                            Toggle {
                                label: FederationField::ShowEngagement.label().to_string(),
                                hint: "Show remote follows, likes and reposts in chat.".to_string(),
                                checked: current.show_engagement,
                                onchange: {
                                    let commit = commit.clone();
                                    move |checked: bool| {
                                        form.with_mut(|form| {
                                            form.set_field(
                                                FederationField::ShowEngagement,
                                                FieldValue::Bool(checked),
                                            );
                                        });
                                        commit(
                                            FederationField::ShowEngagement,
                                            FieldValue::Bool(checked),
                                        );
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
