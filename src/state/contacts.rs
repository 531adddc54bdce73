#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use crate::net::types::Contact;

/// Shared contact-list state for the agenda views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactsState {
    pub items: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ContactsState {
    /// Replace the list with a fresh fetch result.
    pub fn set_loaded(&mut self, items: Vec<Contact>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch or mutation.
    pub fn set_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Insert a contact, or replace the existing entry with the same id.
    pub fn upsert(&mut self, contact: Contact) {
        match self.items.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => self.items.push(contact),
        }
    }

    /// Drop a contact by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|c| c.id != id);
    }
}
