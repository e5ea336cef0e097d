//! # Buddy List View
//!
//! Contacts grouped by category with collapsible groups.

use buddy_core::{BuddyList, LoadState};
use dioxus::desktop::use_window;
use dioxus::prelude::*;

use crate::components::Header;
use crate::host::DesktopHost;
use crate::state::AppState;

/// Buddy list view.
///
/// Loads the directory once, shows a loading line until it resolves and
/// an inline error if it fails. Clicking a buddy opens a chat window.
#[component]
pub fn Buddies() -> Element {
    let mut state = use_context::<AppState>();
    let host = DesktopHost::new(use_window());
    let mut buddy_list = use_signal(|| LoadState::<BuddyList>::Loading);

    // Fetch contacts
    use_future(move || async move {
        let directory = state.directory();
        match directory.list_contacts().await {
            Ok(contacts) => {
                tracing::info!(count = contacts.len(), "Loaded buddy list");
                state.shell.write().set_roster(&contacts);
                buddy_list.set(LoadState::Ready(BuddyList::new(contacts)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load buddy list");
                buddy_list.set(LoadState::Failed(e.to_string()));
            }
        }
    });

    let current = buddy_list.read().clone();

    rsx! {
        div { class: "aim-buddy-list",
            Header {}

            match current {
                LoadState::Ready(list) => {
                    let online = list.online_count();
                    let total = list.contact_count();

                    rsx! {
                        div { class: "buddy-groups",
                            for group in list.groups().iter().cloned() {
                                div { key: "{group.category}", class: "buddy-group",
                                    div {
                                        class: "aim-buddy-category",
                                        onclick: {
                                            let category = group.category.clone();
                                            move |_| {
                                                if let LoadState::Ready(list) = &mut *buddy_list.write() {
                                                    list.toggle_category(&category);
                                                }
                                            }
                                        },
                                        span { "{group.category} ({group.contacts.len()})" }
                                        span {
                                            if list.is_expanded(&group.category) { "▼" } else { "►" }
                                        }
                                    }

                                    if list.is_expanded(&group.category) {
                                        for contact in group.contacts.iter().cloned() {
                                            div {
                                                key: "{contact.id}",
                                                class: "aim-buddy-item",
                                                onclick: {
                                                    let host = host.clone();
                                                    let intent = list.open_chat(contact.id);
                                                    move |_| state.open_chat(intent.contact_id, host.viewport())
                                                },
                                                div { class: "aim-status aim-status-{contact.status}" }
                                                span { "{contact.name}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "buddy-footer text-secondary",
                            "{online}/{total} online"
                        }
                    }
                }
                LoadState::Failed(err) => rsx! {
                    div { class: "error", "Error loading contacts: {err}" }
                },
                LoadState::Loading => rsx! {
                    div { class: "loading", "Loading buddies..." }
                },
            }

            if let Some(err) = state.last_error.read().as_ref() {
                div { class: "alert alert-error", "{err}" }
            }
        }
    }
}
