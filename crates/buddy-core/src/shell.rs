//! Shell controller: login gate and open chat windows.

use std::collections::HashSet;
use tracing::info;

use crate::auth::Authenticator;
use crate::chat_window::ChatWindowState;
use crate::contact::{Contact, ContactId};
use crate::drag::Point;
use crate::error::{BuddyError, Result};

/// Welcome line shown after signing on.
pub fn greeting(username: &str) -> String {
    format!("Hello, {username}! Welcome to Buddy.")
}

/// Top-level UI state.
///
/// Owns the signed-in screen name, the ids the roster allows opening,
/// and one [`ChatWindowState`] per open chat in opening order.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    username: Option<String>,
    roster: HashSet<ContactId>,
    windows: Vec<ChatWindowState>,
}

impl Shell {
    /// A signed-out shell with no windows.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Session ====================

    /// Signs on through the given authenticator.
    ///
    /// Returns the welcome greeting.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's rejection; the shell stays signed out.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        auth: &dyn Authenticator,
    ) -> Result<String> {
        auth.authenticate(username, password)?;

        let welcome = greeting(username);
        info!(username = %username, "Signed on");
        info!("{welcome}");
        self.username = Some(username.to_string());
        Ok(welcome)
    }

    /// Signs off and closes every window.
    ///
    /// Sessions and pending replies are left untouched.
    pub fn logout(&mut self) {
        if let Some(username) = self.username.take() {
            info!(username = %username, "Signed off");
        }
        self.windows.clear();
    }

    /// Whether a user is signed on.
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// The signed-on screen name.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    // ==================== Chat windows ====================

    /// Records which contacts may be opened.
    pub fn set_roster(&mut self, contacts: &[Contact]) {
        self.roster = contacts.iter().map(|c| c.id).collect();
    }

    /// Opens a chat window, centered in `viewport`.
    ///
    /// Returns `false` if the window was already open.
    ///
    /// # Errors
    ///
    /// Returns [`BuddyError::UnknownContact`] for ids outside the roster.
    pub fn open_chat(&mut self, contact_id: ContactId, viewport: Point) -> Result<bool> {
        if !self.roster.contains(&contact_id) {
            return Err(BuddyError::UnknownContact(contact_id));
        }
        if self.is_open(contact_id) {
            return Ok(false);
        }

        self.windows.push(ChatWindowState::new(contact_id, viewport));
        info!(contact_id, "Chat opened");
        Ok(true)
    }

    /// Closes a chat window. Returns `false` if it was not open.
    pub fn close_chat(&mut self, contact_id: ContactId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.contact_id() != contact_id);
        let closed = self.windows.len() != before;
        if closed {
            info!(contact_id, "Chat closed");
        }
        closed
    }

    /// Whether a chat window is open for the contact.
    pub fn is_open(&self, contact_id: ContactId) -> bool {
        self.windows.iter().any(|w| w.contact_id() == contact_id)
    }

    /// Ids of open chats, in opening order.
    pub fn open_chats(&self) -> Vec<ContactId> {
        self.windows.iter().map(ChatWindowState::contact_id).collect()
    }

    /// Open windows, in opening order.
    pub fn windows(&self) -> &[ChatWindowState] {
        &self.windows
    }

    /// The window for a contact.
    pub fn window(&self, contact_id: ContactId) -> Option<&ChatWindowState> {
        self.windows.iter().find(|w| w.contact_id() == contact_id)
    }

    /// Mutable access to the window for a contact.
    pub fn window_mut(&mut self, contact_id: ContactId) -> Option<&mut ChatWindowState> {
        self.windows.iter_mut().find(|w| w.contact_id() == contact_id)
    }

    /// The window currently capturing the pointer, if any.
    pub fn dragging_window_mut(&mut self) -> Option<&mut ChatWindowState> {
        self.windows.iter_mut().find(|w| w.drag.is_dragging())
    }
}
