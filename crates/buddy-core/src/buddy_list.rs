//! Buddy list grouping and expand/collapse state.

use std::collections::HashMap;

use crate::contact::{Contact, ContactId};

/// Intent raised when a buddy is clicked.
///
/// Carries no side effects of its own; the shell decides what to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenChat {
    /// Contact to open a window for.
    pub contact_id: ContactId,
}

/// Contacts of one category, in directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Category label.
    pub category: String,
    /// Members of the category.
    pub contacts: Vec<Contact>,
}

/// Grouped buddy list with per-category expand flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuddyList {
    groups: Vec<CategoryGroup>,
    expanded: HashMap<String, bool>,
}

impl BuddyList {
    /// Groups contacts by category, in order of first appearance.
    pub fn new(contacts: Vec<Contact>) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for contact in contacts {
            match groups.iter_mut().find(|g| g.category == contact.category) {
                Some(group) => group.contacts.push(contact),
                None => groups.push(CategoryGroup {
                    category: contact.category.clone(),
                    contacts: vec![contact],
                }),
            }
        }

        Self {
            groups,
            expanded: HashMap::new(),
        }
    }

    /// Category groups in display order.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Whether a category is expanded. Categories default to expanded.
    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.get(category).copied().unwrap_or(true)
    }

    /// Flips one category's expand flag and returns the new value.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        let next = !self.is_expanded(category);
        self.expanded.insert(category.to_string(), next);
        next
    }

    /// Contacts in expanded categories, in display order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.groups
            .iter()
            .filter(|g| self.is_expanded(&g.category))
            .flat_map(|g| g.contacts.iter())
            .collect()
    }

    /// All contact ids, regardless of expand state.
    pub fn contact_ids(&self) -> Vec<ContactId> {
        self.groups
            .iter()
            .flat_map(|g| g.contacts.iter().map(|c| c.id))
            .collect()
    }

    /// Total number of contacts.
    pub fn contact_count(&self) -> usize {
        self.groups.iter().map(|g| g.contacts.len()).sum()
    }

    /// Number of contacts currently signed on.
    pub fn online_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.contacts.iter())
            .filter(|c| c.status.is_signed_on())
            .count()
    }

    /// Builds the open-chat intent for a contact.
    pub fn open_chat(&self, contact_id: ContactId) -> OpenChat {
        OpenChat { contact_id }
    }
}
