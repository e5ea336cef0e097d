//! # Chat Window Component
//!
//! One draggable conversation with a contact.

use buddy_core::{ChatState, ContactId, LoadState, Point};
use dioxus::prelude::*;

use crate::state::AppState;

/// Chat window for a single contact.
///
/// Messages are read straight from the session store and refresh on
/// every session event, so replies that land while the window is closed
/// show up when it is reopened.
#[component]
pub fn ChatWindow(contact_id: ContactId) -> Element {
    let mut state = use_context::<AppState>();
    let mut draft = use_signal(String::new);

    // Load contact profile and history
    use_future(move || async move {
        let result = state.chat().open(contact_id).await;
        if let Err(e) = &result {
            tracing::warn!(contact_id, error = %e, "Failed to load chat");
        }
        match state.shell.write().window_mut(contact_id) {
            Some(window) => {
                window.apply_loaded(contact_id, result);
            }
            None => tracing::debug!(contact_id, "Chat closed before load finished"),
        }
    });

    // Keep the newest message in view
    use_effect(move || {
        let _ = state.revision.read();
        document::eval(&format!(
            "document.getElementById('messages-{contact_id}')?.scrollTo(0, 1e9);"
        ));
    });

    let (position, snapshot) = {
        let shell = state.shell.read();
        let Some(window) = shell.window(contact_id) else {
            return rsx! {};
        };
        (window.drag.position(), window.snapshot().clone())
    };

    let _ = state.revision.read();
    let chat = state.chat();
    let messages = chat.messages(contact_id);
    let awaiting = matches!(chat.state(contact_id), ChatState::AwaitingReply { .. });

    let contact_name = match &snapshot {
        LoadState::Ready(s) => Some(s.contact.name.clone()),
        _ => None,
    };
    let title = match (&snapshot, &contact_name) {
        (_, Some(name)) => format!("Chat with {name}"),
        (LoadState::Failed(_), None) => "Chat unavailable".to_string(),
        _ => "Loading...".to_string(),
    };

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft.read().clone();
        if !text.trim().is_empty() {
            state.send_message(contact_id, &text);
            draft.set(String::new());
        }
    };

    rsx! {
        div {
            class: "aim-chat-window",
            style: "left: {position.x}px; top: {position.y}px;",

            div {
                class: "aim-window-header cursor-move",
                onmousedown: move |evt: MouseEvent| {
                    let pointer = evt.client_coordinates();
                    if let Some(window) = state.shell.write().window_mut(contact_id) {
                        window.drag.pointer_down(Point::new(pointer.x, pointer.y));
                    }
                },

                div { class: "font-bold", "{title}" }

                button {
                    class: "window-close",
                    onmousedown: move |evt: MouseEvent| evt.stop_propagation(),
                    onclick: move |_| state.close_chat(contact_id),
                    "✕"
                }
            }

            div { id: "messages-{contact_id}", class: "aim-chat-messages",
                if let LoadState::Failed(err) = &snapshot {
                    div { class: "error", "Error loading conversation: {err}" }
                }

                for msg in messages {
                    div {
                        key: "{msg.id}",
                        class: if msg.is_from_user() { "aim-message aim-message-user" } else { "aim-message aim-message-other" },
                        div { class: "message-time", "{msg.clock_time()}" }
                        div { "{msg.content}" }
                    }
                }

                if awaiting {
                    if let Some(name) = contact_name {
                        div { class: "typing-indicator text-secondary", "{name} is typing..." }
                    }
                }
            }

            form { class: "aim-chat-input", onsubmit: on_send,
                input {
                    r#type: "text",
                    class: "aim-input",
                    placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", class: "aim-button", "Send" }
            }
        }
    }
}
