//! Application shell
//!
//! Minimal shell for running the federation screens standalone: loads the
//! configuration snapshot on start and switches between the two pages.
//! Authentication and real routing are external collaborators and live
//! outside this crate.

use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::config::FederationConfig;
use crate::pages::{FederationSettings, FollowersPage};
use crate::services::config_api::FederationConfigApi;

/// Screens the shell can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Settings,
    Followers,
}

/// Root application component
#[component]
pub fn App() -> Element {
    let mut federation = use_signal(|| None::<FederationConfig>);
    let mut screen = use_signal(|| Screen::Settings);

    // Load the configuration snapshot once on start. The settings screen
    // receives it as an explicit parameter and re-mirrors whenever it
    // changes.
    use_effect(move || {
        spawn_local(async move {
            match FederationConfigApi::server_config().await {
                Ok(config) => federation.set(Some(config.federation)),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("server config fetch failed: {}", error).into(),
                    );
                }
            }
        });
    });

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            header { class: "bg-white shadow",
                div { class: "max-w-5xl mx-auto px-4 py-4 flex items-center justify-between",
                    h1 { class: "text-xl font-bold text-gray-900", "Glowcast Admin" }
                    nav { class: "space-x-2",
                        NavButton {
                            label: "Federation".to_string(),
                            active: screen() == Screen::Settings,
                            onclick: move |_| screen.set(Screen::Settings),
                        }
                        NavButton {
                            label: "Followers".to_string(),
                            active: screen() == Screen::Followers,
                            onclick: move |_| screen.set(Screen::Followers),
                        }
                    }
                }
            }
            main { class: "max-w-5xl mx-auto p-6",
                match screen() {
                    Screen::Settings => rsx! {
                        FederationSettings { config: federation }
                    },
                    Screen::Followers => rsx! {
                        FollowersPage {}
                    },
                }
            }
        }
    }
}

/// Navigation button for switching between the two screens
#[component]
fn NavButton(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active {
        "px-3 py-2 rounded-md text-sm font-medium bg-blue-50 text-blue-700"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-50 hover:text-gray-900"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
