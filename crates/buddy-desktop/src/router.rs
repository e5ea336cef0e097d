//! # Routing
//!
//! The sign-on gate and the signed-on shell.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{Buddies, Login};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Sign-on screen shown until credentials are submitted.
    #[route("/")]
    Login {},

    /// Signed-on shell hosting the buddy list and chat windows.
    #[layout(Layout)]
    /// Buddy list grouped by category.
    #[route("/buddies")]
    Buddies {},
}
