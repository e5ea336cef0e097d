//! # UI Components
//!
//! Reusable UI components for the Buddy desktop application.
//!
//! - [`Layout`] - Signed-on shell hosting the routed view and chat windows
//! - [`Header`] - Buddy list title bar
//! - [`ChatWindow`] - Draggable chat window for one contact

mod chat_window;
mod header;
mod layout;

pub use chat_window::ChatWindow;
pub use header::Header;
pub use layout::Layout;
