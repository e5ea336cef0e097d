//! # Buddy Core
//!
//! Headless state for the Buddy instant-messenger shell.
//!
//! Everything the desktop views need lives here so it can be exercised
//! without a window: the contact directory, per-contact message sessions,
//! the chat view-model with its simulated counterpart, buddy list
//! grouping, drag positioning, the login gate, and host window sizing.
//!
//! ## Example
//!
//! ```rust
//! use buddy_core::{ChatViewModel, SessionStore, StaticDirectory};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> buddy_core::Result<()> {
//! let chat = ChatViewModel::new(
//!     Arc::new(StaticDirectory::fixture()),
//!     Arc::new(SessionStore::new()),
//! );
//!
//! let snapshot = chat.open(1).await?;
//! assert_eq!(snapshot.contact.name, "Claude AI");
//!
//! // The user's message is stored at once; the reply follows later.
//! chat.send_message(1, "hi")?;
//! assert_eq!(chat.messages(1).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   open_chat    ┌──────────────┐
//! │ BuddyList  │ ─────────────▶ │    Shell     │
//! └─────┬──────┘                │ login gate + │
//!       │ list_contacts         │ chat windows │
//! ┌─────▼──────────┐            └──────┬───────┘
//! │ ContactSource  │◀── open ──┐       │ send
//! └────────────────┘           │ ┌─────▼─────────┐  reply timer
//!                              └─┤ ChatViewModel ├──────────┐
//!                                └─────┬─────────┘          │
//!                                      │ append             │
//!                                ┌─────▼────────┐◀──────────┘
//!                                │ SessionStore │ ── SessionEvent ─▶ views
//!                                └──────────────┘
//! ```

pub mod auth;
pub mod buddy_list;
pub mod chat;
pub mod chat_window;
pub mod config;
pub mod contact;
pub mod directory;
pub mod drag;
pub mod error;
pub mod message;
pub mod shell;
pub mod store;
pub mod window;

// Re-export main types
pub use auth::{AcceptAll, Authenticator};
pub use buddy_list::{BuddyList, CategoryGroup, OpenChat};
pub use chat::{reply_text, ChatSnapshot, ChatState, ChatViewModel, PendingReply, TaskId};
pub use chat_window::{default_position, ChatWindowState, LoadState};
pub use config::{Config, Theme};
pub use contact::{Contact, ContactId, Presence};
pub use directory::{ContactSource, StaticDirectory};
pub use drag::{DragState, Point};
pub use error::{BuddyError, Result};
pub use message::{format_clock, format_clock_in, Message, MessageId, NewMessage, Sender};
pub use shell::{greeting, Shell};
pub use store::{SessionEvent, SessionStore};
pub use window::{HostWindow, WindowSize, WindowSizer};

use serde::{Deserialize, Serialize};

/// Application version and build label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Crate version.
    pub version: String,
    /// Build number, or `dev` for local builds.
    pub build: String,
}

impl VersionInfo {
    /// Version of this build.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build: option_env!("BUILD_NUMBER").unwrap_or("dev").to_string(),
        }
    }
}
