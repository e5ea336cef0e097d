//! # Buddy Desktop
//!
//! Native desktop shell for the Buddy instant messenger.
//!
//! ## Architecture
//!
//! All state lives in [`buddy_core`]; this crate only renders it and
//! forwards user input. Contacts come from an in-memory directory and
//! every reply is simulated, so no backend is required.
//!
//! ## Modules
//!
//! - [`components`] - Window chrome, layout, and chat windows
//! - [`host`] - Native window bridge for fixed content sizing
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Sign-on screen and buddy list

use buddy_core::Config as BuddyConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod host;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    // Settings pick the log level, so load them under a startup
    // subscriber to keep their fallback warnings visible.
    let startup = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    let settings = tracing::subscriber::with_default(startup, BuddyConfig::load);

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.log_level().unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Buddy Desktop");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Buddy")
            .with_inner_size(LogicalSize::new(
                settings.window.width,
                settings.window.height,
            )),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(settings)
        .launch(App);
}

/// Root application component.
///
/// Initializes global state from the settings loaded in `main`, loads the
/// stylesheet, and renders the router.
#[component]
fn App() -> Element {
    let settings = use_context::<BuddyConfig>();
    let state = use_context_provider(move || AppState::new(settings));
    let theme = state.config.read().theme.css_class();

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        div { class: "app-root {theme}",
            Router::<Route> {}
        }
    }
}
