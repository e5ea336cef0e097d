//! # Login View
//!
//! Screen name and password form gating the rest of the app.

use buddy_core::VersionInfo;
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Sign-on view component.
///
/// Any credentials are accepted; only an empty screen name is refused.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let version = VersionInfo::current();

    // If already signed on, go straight to the buddy list
    if state.is_logged_in() {
        nav.replace(Route::Buddies {});
    }

    let mut do_login = move || {
        let username_val = username.read().trim().to_string();

        if username_val.is_empty() {
            error.set(Some("Screen Name is required".to_string()));
            return;
        }

        let password_val = password.read().clone();
        match state.login(&username_val, &password_val) {
            Ok(()) => {
                error.set(None);
                nav.push(Route::Buddies {});
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        div { class: "login-view",
            div { class: "aim-window login-card",
                div { class: "aim-window-header",
                    h2 { "Buddy Sign On" }
                }

                div { class: "aim-window-body",
                    div { class: "login-logo", "Buddy" }

                    form {
                        class: "login-form",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            do_login();
                        },

                        div { class: "form-group",
                            label { r#for: "username", "Screen Name" }
                            input {
                                id: "username",
                                r#type: "text",
                                class: "aim-input",
                                placeholder: "Screen Name",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                class: "aim-input",
                                placeholder: "Password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }

                        if let Some(err) = error.read().as_ref() {
                            div { class: "alert alert-error", "{err}" }
                        }

                        button { r#type: "submit", class: "aim-button btn-block", "Sign In" }
                    }

                    p { class: "login-version text-tertiary",
                        "v{version.version} ({version.build})"
                    }
                }
            }
        }
    }
}
