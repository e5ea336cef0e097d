//! In-memory session store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

use crate::contact::ContactId;
use crate::message::{Message, MessageId, NewMessage};

/// Capacity of the session event channel.
const EVENT_CAPACITY: usize = 256;

/// Change notifications emitted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A message was appended to a session.
    Appended {
        /// Session the message went to.
        contact_id: ContactId,
        /// The stored message.
        message: Message,
    },
}

/// Per-contact message logs.
///
/// Sessions are append-only and live for the lifetime of the process.
/// Thread-safe, so delayed reply tasks can append from the runtime.
#[derive(Debug)]
pub struct SessionStore {
    /// Message logs indexed by contact id.
    sessions: RwLock<HashMap<ContactId, Vec<Message>>>,
    /// Global message id counter.
    next_id: AtomicU64,
    /// Broadcast channel for append events.
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            sessions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            events,
        }
    }

    fn next_id(&self) -> MessageId {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn stamp(&self, contact_id: ContactId, new: NewMessage) -> Message {
        Message {
            id: self.next_id(),
            contact_id,
            content: new.content,
            sender: new.sender,
            timestamp: new.timestamp,
        }
    }

    /// Returns the messages of a session in append order.
    ///
    /// Empty if the session does not exist yet.
    pub fn messages(&self, contact_id: ContactId) -> Vec<Message> {
        self.sessions
            .read()
            .get(&contact_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Appends a message, creating the session if absent.
    ///
    /// The append event is sent before the write lock is released, so
    /// subscribers see events in log order.
    pub fn append(&self, contact_id: ContactId, new: NewMessage) -> Message {
        let mut sessions = self.sessions.write();
        let message = self.stamp(contact_id, new);
        sessions.entry(contact_id).or_default().push(message.clone());

        debug!(
            contact_id,
            message_id = message.id,
            sender = ?message.sender,
            "Message appended"
        );

        let _ = self.events.send(SessionEvent::Appended {
            contact_id,
            message: message.clone(),
        });

        message
    }

    /// Creates a session seeded with `history` if none exists.
    ///
    /// Returns `true` if a session was created. Existing sessions are
    /// never re-seeded.
    pub fn open_session(&self, contact_id: ContactId, history: Vec<NewMessage>) -> bool {
        let mut sessions = self.sessions.write();
        if sessions.contains_key(&contact_id) {
            return false;
        }

        let seeded: Vec<Message> = history
            .into_iter()
            .map(|m| self.stamp(contact_id, m))
            .collect();
        debug!(contact_id, seeded = seeded.len(), "Session created");
        sessions.insert(contact_id, seeded);
        true
    }

    /// Whether a session exists for the contact.
    pub fn has_session(&self, contact_id: ContactId) -> bool {
        self.sessions.read().contains_key(&contact_id)
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Subscribes to append events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_messages_empty_without_session() {
        let store = SessionStore::new();

        assert!(store.messages(1).is_empty());
        assert!(!store.has_session(1));
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_append_creates_session_in_order() {
        let store = SessionStore::new();

        let first = store.append(1, NewMessage::from_user("one"));
        let second = store.append(1, NewMessage::from_contact("two"));
        store.append(2, NewMessage::from_user("other"));

        let messages = store.messages(1);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], first);
        assert_eq!(messages[1], second);
        assert!(first.id < second.id);
        assert_eq!(messages[1].sender, Sender::Contact);
        assert_eq!(store.session_count(), 2);
    }

    #[test]
    fn test_open_session_seeds_once() {
        let store = SessionStore::new();

        assert!(store.open_session(1, vec![NewMessage::from_contact("Hi there!")]));
        assert!(!store.open_session(1, vec![NewMessage::from_contact("again")]));

        let messages = store.messages(1);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hi there!");
        assert_eq!(messages[0].contact_id, 1);
    }

    #[test]
    fn test_open_session_keeps_existing_messages() {
        let store = SessionStore::new();
        store.append(3, NewMessage::from_user("early"));

        assert!(!store.open_session(3, vec![NewMessage::from_contact("history")]));
        assert_eq!(store.messages(3).len(), 1);
    }

    #[test]
    fn test_ids_unique_across_sessions() {
        let store = SessionStore::new();
        store.open_session(1, vec![NewMessage::from_contact("a"), NewMessage::from_contact("b")]);
        store.append(1, NewMessage::from_user("c"));
        store.append(2, NewMessage::from_user("d"));

        let mut ids: Vec<_> = store
            .messages(1)
            .into_iter()
            .chain(store.messages(2))
            .map(|m| m.id)
            .collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_append_broadcasts_event() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        let message = store.append(5, NewMessage::from_user("ping"));

        let event = rx.try_recv().unwrap();
        assert_eq!(
            event,
            SessionEvent::Appended {
                contact_id: 5,
                message
            }
        );
    }

    #[test]
    fn test_concurrent_appends_broadcast_in_log_order() {
        let store = Arc::new(SessionStore::new());
        let mut rx = store.subscribe();

        let handles: Vec<_> = (0..4)
            .map(|writer| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.append(1, NewMessage::from_user(format!("{writer}-{i}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut event_ids = Vec::new();
        while let Ok(SessionEvent::Appended { message, .. }) = rx.try_recv() {
            event_ids.push(message.id);
        }
        let log_ids: Vec<_> = store.messages(1).into_iter().map(|m| m.id).collect();

        assert_eq!(log_ids.len(), 200);
        assert_eq!(event_ids, log_ids);
    }
}
