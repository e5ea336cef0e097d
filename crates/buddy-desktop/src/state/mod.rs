//! # State Management
//!
//! Global application state shared via Dioxus context.

mod app_state;

pub use app_state::AppState;
