//! # Views
//!
//! Page-level view components.
//!
//! - [`Login`] - Sign-on screen
//! - [`Buddies`] - Buddy list grouped by category

mod buddies;
mod login;

pub use buddies::Buddies;
pub use login::Login;
