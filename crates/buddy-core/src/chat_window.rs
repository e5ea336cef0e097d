//! Per-window state of an open chat.

use crate::chat::ChatSnapshot;
use crate::contact::ContactId;
use crate::drag::{DragState, Point};
use crate::error::Result;

/// Width of a chat window in logical pixels.
pub const CHAT_WINDOW_WIDTH: f64 = 400.0;

/// Height of a chat window in logical pixels.
pub const CHAT_WINDOW_HEIGHT: f64 = 600.0;

/// Progress of an asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Fetch in flight.
    Loading,
    /// Fetch resolved.
    Ready(T),
    /// Fetch failed; holds the message shown inline.
    Failed(String),
}

impl<T> LoadState<T> {
    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> From<Result<T>> for LoadState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Default top-left of a freshly opened window, centered in the viewport.
pub fn default_position(viewport: Point) -> Point {
    Point::new(
        viewport.x / 2.0 - CHAT_WINDOW_WIDTH / 2.0,
        viewport.y / 2.0 - CHAT_WINDOW_HEIGHT / 2.0,
    )
}

/// State of one chat window.
///
/// Position is never persisted: every (re)open starts centered.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatWindowState {
    contact_id: ContactId,
    snapshot: LoadState<ChatSnapshot>,
    /// Drag positioning.
    pub drag: DragState,
}

impl ChatWindowState {
    /// A window for `contact_id`, centered in `viewport`.
    pub fn new(contact_id: ContactId, viewport: Point) -> Self {
        Self {
            contact_id,
            snapshot: LoadState::Loading,
            drag: DragState::new(default_position(viewport)),
        }
    }

    /// Contact shown in this window.
    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    /// Profile and history load state.
    pub fn snapshot(&self) -> &LoadState<ChatSnapshot> {
        &self.snapshot
    }

    /// Applies a fetch result that was requested for `for_id`.
    ///
    /// Returns `false` and discards the result if the window no longer
    /// shows that contact.
    pub fn apply_loaded(&mut self, for_id: ContactId, result: Result<ChatSnapshot>) -> bool {
        if for_id != self.contact_id {
            tracing::debug!(
                expected = self.contact_id,
                got = for_id,
                "Discarding stale chat load"
            );
            return false;
        }
        self.snapshot = result.into();
        true
    }
}
