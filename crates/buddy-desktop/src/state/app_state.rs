//! # Application State
//!
//! Global state management using Dioxus signals and context.

use std::sync::Arc;

use buddy_core::{
    AcceptAll, ChatViewModel, Config, ContactId, ContactSource, Point, SessionStore, Shell,
    StaticDirectory,
};
use dioxus::prelude::*;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let name = state.shell.read().username().unwrap_or_default().to_string();
///
///     rsx! {
///         p { "Signed on as {name}" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded settings.
    pub config: Signal<Config>,

    /// Sign-on state and open chat windows.
    pub shell: Signal<Shell>,

    /// Chat view-model over the shared session store.
    pub chat: Signal<Arc<ChatViewModel>>,

    /// Bumped on every session append so message views re-render.
    pub revision: Signal<u64>,

    /// Welcome line from the last sign-on.
    pub greeting: Signal<Option<String>>,

    /// Last non-fatal error, shown in the buddy list footer.
    pub last_error: Signal<Option<String>>,
}

impl AppState {
    /// Creates a new application state over the mock directory.
    ///
    /// `config` is the value `main` loaded before logging was installed;
    /// it is not re-read from disk.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let directory: Arc<dyn ContactSource> = Arc::new(StaticDirectory::fixture());
        let chat = ChatViewModel::new(directory, Arc::new(SessionStore::new()))
            .with_reply_delay(config.reply_delay());

        Self {
            config: Signal::new(config),
            shell: Signal::new(Shell::new()),
            chat: Signal::new(Arc::new(chat)),
            revision: Signal::new(0),
            greeting: Signal::new(None),
            last_error: Signal::new(None),
        }
    }

    /// The chat view-model.
    #[must_use]
    pub fn chat(&self) -> Arc<ChatViewModel> {
        self.chat.read().clone()
    }

    /// The contact directory.
    #[must_use]
    pub fn directory(&self) -> Arc<dyn ContactSource> {
        self.chat.read().directory().clone()
    }

    /// Records an error message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.last_error.set(Some(msg.into()));
    }

    /// Clears the last error.
    pub fn clear_error(&mut self) {
        self.last_error.set(None);
    }

    // ==================== Sign-on ====================

    /// Signs on. Credentials are not verified.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), String> {
        let welcome = self
            .shell
            .write()
            .login(username, password, &AcceptAll)
            .map_err(|e| e.to_string())?;
        self.greeting.set(Some(welcome));
        self.clear_error();
        Ok(())
    }

    /// Signs off and closes every chat window.
    pub fn logout(&mut self) {
        self.shell.write().logout();
        self.greeting.set(None);
    }

    /// Check if user is signed on.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.shell.read().is_logged_in()
    }

    // ==================== Chat windows ====================

    /// Opens (or keeps open) the chat window for a contact.
    pub fn open_chat(&mut self, contact_id: ContactId, viewport: Point) {
        if let Err(e) = self.shell.write().open_chat(contact_id, viewport) {
            tracing::warn!(contact_id, error = %e, "Failed to open chat");
            self.set_error(e.to_string());
        }
    }

    /// Closes a chat window. Pending replies keep running.
    pub fn close_chat(&mut self, contact_id: ContactId) {
        self.shell.write().close_chat(contact_id);
    }

    /// Sends a message from the user. Blank text is ignored.
    pub fn send_message(&mut self, contact_id: ContactId, text: &str) {
        if let Err(e) = self.chat().send_message(contact_id, text) {
            tracing::error!(contact_id, error = %e, "Failed to send message");
            self.set_error(e.to_string());
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
