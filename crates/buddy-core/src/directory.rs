//! Contact directory.
//!
//! The directory is read through the [`ContactSource`] trait so the static
//! fixture can be swapped for a real backend (file, remote API, embedded
//! store) without touching the views.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::contact::{Contact, ContactId, Presence};
use crate::error::{BuddyError, Result};
use crate::message::NewMessage;

/// Source of contacts and message histories.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Lists every contact in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`BuddyError::DataUnavailable`] if the source cannot be reached.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Fetches a single contact.
    ///
    /// # Errors
    ///
    /// * [`BuddyError::UnknownContact`] - No contact with this id
    /// * [`BuddyError::DataUnavailable`] - Source cannot be reached
    async fn get_contact(&self, id: ContactId) -> Result<Contact>;

    /// Fetches the stored history for a contact, oldest first.
    ///
    /// Unknown ids yield an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`BuddyError::DataUnavailable`] if the source cannot be reached.
    async fn get_messages(&self, id: ContactId) -> Result<Vec<NewMessage>>;
}

/// In-memory contact directory.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    contacts: Vec<Contact>,
    history: HashMap<ContactId, Vec<NewMessage>>,
}

impl StaticDirectory {
    /// Creates a directory over the given contacts with empty histories.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            history: HashMap::new(),
        }
    }

    /// The mock buddy list shipped with the app.
    pub fn fixture() -> Self {
        Self::new(Self::fixture_contacts())
    }

    /// Contacts of the mock buddy list.
    pub fn fixture_contacts() -> Vec<Contact> {
        vec![
            Contact::new(1, "Claude AI", Presence::Online, "AI Agents"),
            Contact::new(2, "GPT-4", Presence::Online, "AI Agents"),
            Contact::new(3, "Anthropic", Presence::Away, "AI Agents"),
            Contact::new(4, "Sarah", Presence::Online, "Buddies"),
            Contact::new(5, "Mike", Presence::Offline, "Buddies"),
            Contact::new(6, "Jessica", Presence::Away, "Co-Workers"),
            Contact::new(7, "Dad", Presence::Offline, "Family"),
        ]
    }

    /// Seeds the history returned for `id`.
    #[must_use]
    pub fn with_history(mut self, id: ContactId, messages: Vec<NewMessage>) -> Self {
        self.history.insert(id, messages);
        self
    }

    /// Number of contacts in the directory.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[async_trait]
impl ContactSource for StaticDirectory {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(BuddyError::UnknownContact(id))
    }

    async fn get_messages(&self, id: ContactId) -> Result<Vec<NewMessage>> {
        Ok(self.history.get(&id).cloned().unwrap_or_default())
    }
}
