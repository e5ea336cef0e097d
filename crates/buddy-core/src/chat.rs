//! Chat view-model and the simulated counterpart.
//!
//! Every non-blank send appends the user's message at once and schedules
//! an independent reply after a fixed delay. Replies are never coalesced
//! or cancelled: closing a window leaves its pending replies running, and
//! a reply that lands while the window is closed shows up on reopen.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::debug;

use crate::contact::{Contact, ContactId};
use crate::directory::ContactSource;
use crate::error::{BuddyError, Result};
use crate::message::{Message, NewMessage};
use crate::store::SessionStore;

/// Delay before the simulated contact answers.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Identifier of a scheduled reply.
pub type TaskId = u64;

/// A reply that has been scheduled but has not fired yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    /// Session the reply will be appended to.
    pub contact_id: ContactId,
    /// When the reply fires.
    pub fire_at: Instant,
}

/// Reply state of a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// No reply outstanding.
    Idle,
    /// At least one reply is scheduled.
    AwaitingReply {
        /// Number of outstanding replies.
        pending: usize,
    },
}

/// A contact together with its current message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSnapshot {
    /// The contact on the other end.
    pub contact: Contact,
    /// Messages in display order.
    pub messages: Vec<Message>,
}

/// Text the simulated contact sends back.
pub fn reply_text(text: &str) -> String {
    format!("I'm responding to your message: \"{text}\"")
}

/// Orchestrates contact lookups, sends, and simulated replies.
///
/// Cheaply shareable behind an [`Arc`]; all state is internally locked.
pub struct ChatViewModel {
    directory: Arc<dyn ContactSource>,
    store: Arc<SessionStore>,
    reply_delay: Duration,
    pending: Arc<Mutex<HashMap<TaskId, PendingReply>>>,
    next_task: AtomicU64,
}

impl ChatViewModel {
    /// Creates a view-model with the default reply delay.
    pub fn new(directory: Arc<dyn ContactSource>, store: Arc<SessionStore>) -> Self {
        Self {
            directory,
            store,
            reply_delay: DEFAULT_REPLY_DELAY,
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_task: AtomicU64::new(0),
        }
    }

    /// Overrides the reply delay.
    #[must_use]
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// The configured reply delay.
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// The underlying session store.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// The contact source.
    pub fn directory(&self) -> &Arc<dyn ContactSource> {
        &self.directory
    }

    /// Loads a contact and its history, creating the session lazily.
    ///
    /// # Errors
    ///
    /// * [`BuddyError::UnknownContact`] - No such contact
    /// * [`BuddyError::DataUnavailable`] - Directory unreachable
    pub async fn open(&self, contact_id: ContactId) -> Result<ChatSnapshot> {
        let contact = self.directory.get_contact(contact_id).await?;
        let history = self.directory.get_messages(contact_id).await?;
        self.store.open_session(contact_id, history);

        Ok(ChatSnapshot {
            contact,
            messages: self.store.messages(contact_id),
        })
    }

    /// Messages of a session in display order.
    pub fn messages(&self, contact_id: ContactId) -> Vec<Message> {
        self.store.messages(contact_id)
    }

    /// Sends a message and schedules the simulated reply.
    ///
    /// Blank text is ignored and yields `Ok(None)`. Otherwise the user's
    /// message is appended before this returns, and a reply is appended
    /// to the same session once the reply delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`BuddyError::SchedulerUnavailable`] when called outside a
    /// Tokio runtime. Nothing is appended in that case.
    pub fn send_message(&self, contact_id: ContactId, text: &str) -> Result<Option<Message>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let handle = Handle::try_current().map_err(|_| BuddyError::SchedulerUnavailable)?;

        let sent = self.store.append(contact_id, NewMessage::from_user(text));

        let task_id = self.next_task.fetch_add(1, Ordering::SeqCst) + 1;
        let fire_at = Instant::now() + self.reply_delay;
        self.pending.lock().insert(
            task_id,
            PendingReply {
                contact_id,
                fire_at,
            },
        );

        debug!(
            contact_id,
            task_id,
            delay_ms = self.reply_delay.as_millis() as u64,
            "Reply scheduled"
        );

        let store = Arc::clone(&self.store);
        let pending = Arc::clone(&self.pending);
        let reply = reply_text(text);
        handle.spawn(async move {
            tokio::time::sleep_until(fire_at).await;
            pending.lock().remove(&task_id);
            let message = store.append(contact_id, NewMessage::from_contact(reply));
            debug!(contact_id, task_id, message_id = message.id, "Reply delivered");
        });

        Ok(Some(sent))
    }

    /// Reply state of a session.
    pub fn state(&self, contact_id: ContactId) -> ChatState {
        let pending = self
            .pending
            .lock()
            .values()
            .filter(|p| p.contact_id == contact_id)
            .count();

        if pending == 0 {
            ChatState::Idle
        } else {
            ChatState::AwaitingReply { pending }
        }
    }

    /// All outstanding replies, ordered by task id.
    pub fn pending_replies(&self) -> Vec<(TaskId, PendingReply)> {
        let mut replies: Vec<_> = self
            .pending
            .lock()
            .iter()
            .map(|(id, p)| (*id, *p))
            .collect();
        replies.sort_by_key(|(id, _)| *id);
        replies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StaticDirectory;
    use crate::message::Sender;

    fn view_model() -> ChatViewModel {
        ChatViewModel::new(
            Arc::new(StaticDirectory::fixture()),
            Arc::new(SessionStore::new()),
        )
    }

    #[test]
    fn test_reply_text_echoes() {
        assert_eq!(reply_text("hi"), "I'm responding to your message: \"hi\"");
    }

    #[test]
    fn test_send_outside_runtime_appends_nothing() {
        let vm = view_model();

        let result = vm.send_message(1, "hello");

        assert!(matches!(result, Err(BuddyError::SchedulerUnavailable)));
        assert!(vm.messages(1).is_empty());
        assert!(vm.pending_replies().is_empty());
    }

    #[test]
    fn test_blank_send_needs_no_runtime() {
        let vm = view_model();

        assert!(vm.send_message(1, "   \t\n").unwrap().is_none());
        assert!(vm.messages(1).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_then_replies() {
        let vm = view_model();

        let sent = vm.send_message(1, "hi").unwrap().unwrap();
        assert_eq!(sent.sender, Sender::User);
        assert_eq!(vm.state(1), ChatState::AwaitingReply { pending: 1 });
        assert_eq!(vm.messages(1), vec![sent.clone()]);

        tokio::time::sleep(DEFAULT_REPLY_DELAY + Duration::from_millis(1)).await;

        let messages = vm.messages(1);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], sent);
        assert_eq!(messages[1].sender, Sender::Contact);
        assert!(messages[1].content.contains("hi"));
        assert_eq!(vm.state(1), ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_reply_delay() {
        let vm = view_model().with_reply_delay(Duration::from_millis(250));

        vm.send_message(2, "quick").unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(vm.messages(2).len(), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(vm.messages(2).len(), 2);
    }

    #[tokio::test]
    async fn test_open_seeds_history_once() {
        let directory = StaticDirectory::fixture()
            .with_history(1, vec![NewMessage::from_contact("Hi there!")]);
        let vm = ChatViewModel::new(Arc::new(directory), Arc::new(SessionStore::new()));

        let snapshot = vm.open(1).await.unwrap();
        assert_eq!(snapshot.contact.name, "Claude AI");
        assert_eq!(snapshot.messages.len(), 1);

        let again = vm.open(1).await.unwrap();
        assert_eq!(again.messages, snapshot.messages);
    }

    #[tokio::test]
    async fn test_open_unknown_contact() {
        let vm = view_model();

        assert!(matches!(
            vm.open(42).await,
            Err(BuddyError::UnknownContact(42))
        ));
        assert!(!vm.store().has_session(42));
    }
}
