//! Follower list state management hook

use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::follower::FollowerLists;
use crate::services::follower_api::FollowerApi;
use crate::utils::lifetime::LifetimeToken;

/// Follower screen state and actions
///
/// Both lists are replaced wholesale in a single step once a combined fetch
/// resolves; there is no partial update and no optimistic mutation. Fetch
/// and approve failures are logged to the console and otherwise swallowed,
/// leaving whatever state the screen already had.
#[derive(Clone)]
pub struct FollowersContext {
    pub lists: Signal<FollowerLists>,
    token: LifetimeToken,
}

impl FollowersContext {
    /// Re-fetch both lists and replace local state once both are terminal.
    ///
    /// The state write is gated on the component's liveness token, so a
    /// fetch resolving after unmount is discarded.
    pub fn refresh(&self) {
        let mut lists = self.lists;
        let token = self.token.clone();

        spawn_local(async move {
            match FollowerApi::fetch_lists().await {
                Ok(fetched) => {
                    if token.is_live() {
                        lists.set(fetched);
                    }
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("follower fetch failed: {}", error).into(),
                    );
                }
            }
        });
    }

    /// Approve a pending request, then trigger exactly one re-fetch of both
    /// lists. The approved row moves between tables only once the re-fetch
    /// lands; concurrent approvals are not guarded and each issues an
    /// independent request.
    pub fn approve(&self, link: String) {
        let context = self.clone();

        spawn_local(async move {
            match FollowerApi::approve(&link).await {
                Ok(()) => context.refresh(),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("approve failed for {}: {}", link, error).into(),
                    );
                }
            }
        });
    }
}

/// Hook wiring follower state to a component's lifetime.
///
/// Loads both lists on mount and revokes the liveness token when the
/// component is dropped.
pub fn use_followers() -> FollowersContext {
    let lists = use_signal(FollowerLists::default);
    let token = use_hook(LifetimeToken::new);

    use_drop({
        let token = token.clone();
        move || token.revoke()
    });

    let context = FollowersContext { lists, token };

    use_effect({
        let context = context.clone();
        move || context.refresh()
    });

    context
}
