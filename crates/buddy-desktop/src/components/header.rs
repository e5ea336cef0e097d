//! # Header Component
//!
//! Buddy list title bar with the screen name and sign-off button.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Buddy list title bar.
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let username = state
        .shell
        .read()
        .username()
        .unwrap_or_default()
        .to_string();
    let greeting = state.greeting.read().clone();

    let on_logout = move |_| {
        state.logout();
        nav.replace(Route::Login {});
    };

    rsx! {
        header { class: "aim-window-header buddy-header",
            span { class: "font-bold", "Buddy List" }

            div { class: "header-right",
                span { class: "username", "{username}" }
                button { class: "btn-sm btn-ghost", onclick: on_logout, "Sign Off" }
            }
        }

        if let Some(greeting) = greeting {
            div { class: "buddy-greeting text-secondary", "{greeting}" }
        }
    }
}
