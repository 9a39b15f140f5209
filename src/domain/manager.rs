use tracing::{debug, info};

use super::search::{self, matches};
use crate::domain::{Contact, ContactUpdate};
use crate::errors::AppError;
use crate::store::ContactStore;

pub fn add(mut contacts: Vec<Contact>, contact: Contact) -> Vec<Contact> {
    contacts.push(contact);
    contacts
}

/// Removes every contact matching `term` and reports how many went.
pub fn delete(contacts: Vec<Contact>, term: &str) -> (Vec<Contact>, usize) {
    let before = contacts.len();
    let remaining: Vec<Contact> = contacts.into_iter().filter(|c| !matches(c, term)).collect();
    let removed = before - remaining.len();
    (remaining, removed)
}

/// Applies `update` to the first contact matching `term` only.
///
/// Unlike [`delete`], later matches are left alone. Values are not
/// re-validated here.
pub fn update(mut contacts: Vec<Contact>, term: &str, update: ContactUpdate) -> (Vec<Contact>, bool) {
    let matched = update_first(&mut contacts, term, update).is_some();
    (contacts, matched)
}

/// In-place form of [`update`]. Returns the contact as it was before.
pub fn update_first(contacts: &mut [Contact], term: &str, update: ContactUpdate) -> Option<Contact> {
    let idx = search::position(contacts, term)?;
    let previous = contacts[idx].clone();
    contacts[idx].apply(update);
    Some(previous)
}

/// Case-insensitive ascending by name; equal names keep their stored order.
pub fn list_sorted(mut contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.sort_by_cached_key(|c| c.name.to_lowercase());
    contacts
}

/// Runs each operation as one load, mutate, save cycle against `storage`.
/// Nothing is cached between calls.
pub struct ContactManager {
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn add_contact(&self, contact: Contact) -> Result<(), AppError> {
        let contacts = add(self.storage.load()?, contact);
        self.storage.save(&contacts)?;
        info!(total = contacts.len(), "contact added");
        Ok(())
    }

    pub fn find_contacts(&self, term: &str) -> Result<Vec<Contact>, AppError> {
        let found = search::find(&self.storage.load()?, term);
        debug!(term, matched = found.len(), "search finished");
        Ok(found)
    }

    /// Returns the number of contacts removed. Storage is only rewritten when
    /// something matched.
    pub fn delete_contacts(&self, term: &str) -> Result<usize, AppError> {
        let (remaining, removed) = delete(self.storage.load()?, term);
        if removed > 0 {
            self.storage.save(&remaining)?;
            info!(term, removed, "contacts deleted");
        }
        Ok(removed)
    }

    /// Returns the contact as it was before the update, if one matched.
    pub fn update_contact(
        &self,
        term: &str,
        changes: ContactUpdate,
    ) -> Result<Option<Contact>, AppError> {
        let mut contacts = self.storage.load()?;
        let previous = update_first(&mut contacts, term, changes);

        if previous.is_some() {
            self.storage.save(&contacts)?;
            info!(term, "contact updated");
        }
        Ok(previous)
    }

    pub fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        Ok(list_sorted(self.storage.load()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Uche", "012345678901", "uche@gmail.com"),
            Contact::new("Alex", "012345678999", "alex@gmail.com"),
            Contact::new("Mom", "987654321098", "mom@home.ng"),
            Contact::new("Uchenna", "111111111111", "ucheuche@gmail.com"),
        ]
    }

    #[test]
    fn add_appends_without_dedup() {
        let contact = Contact::new("Uche", "012345678901", "uche@gmail.com");
        let contacts = add(sample(), contact.clone());

        assert_eq!(contacts.len(), 5);
        assert_eq!(contacts[4], contact);
        assert_eq!(contacts.iter().filter(|c| **c == contact).count(), 2);
    }

    #[test]
    fn delete_removes_every_match() {
        let (remaining, removed) = delete(sample(), "uche");

        assert_eq!(removed, 2);
        assert_eq!(names(&remaining), vec!["Alex", "Mom"]);
    }

    #[test]
    fn delete_by_shared_phone_prefix() {
        let (remaining, removed) = delete(sample(), "0123456789");

        assert_eq!(removed, 2);
        assert_eq!(names(&remaining), vec!["Mom", "Uchenna"]);
    }

    #[test]
    fn delete_without_match_keeps_all() {
        let (remaining, removed) = delete(sample(), "zelda");

        assert_eq!(removed, 0);
        assert_eq!(remaining, sample());
    }

    #[test]
    fn update_touches_first_match_only() {
        let changes = ContactUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        };
        let (contacts, matched) = update(sample(), "uche", changes);

        assert!(matched);
        assert_eq!(names(&contacts), vec!["X", "Alex", "Mom", "Uchenna"]);
        assert_eq!(contacts[0].phone, "012345678901");
        assert_eq!(contacts[3], sample()[3]);
    }

    #[test]
    fn update_without_match() {
        let changes = ContactUpdate {
            phone: Some("222222222222".to_string()),
            ..Default::default()
        };
        let (contacts, matched) = update(sample(), "nobody", changes);

        assert!(!matched);
        assert_eq!(contacts, sample());
    }

    #[test]
    fn list_sorted_is_stable_and_case_insensitive() {
        let contacts = vec![
            Contact::new("bob", "000000000001", "b@x.io"),
            Contact::new("Alice", "000000000002", "a@x.io"),
            Contact::new("annie", "000000000003", "n@x.io"),
            Contact::new("ALICE", "000000000004", "a2@x.io"),
        ];

        let sorted = list_sorted(contacts);

        assert_eq!(names(&sorted), vec!["Alice", "ALICE", "annie", "bob"]);
        assert_eq!(sorted[0].phone, "000000000002");
    }

    #[test]
    fn manager_round_trip() -> Result<(), AppError> {
        let manager = ContactManager::new(Box::new(MemStore::new()));

        manager.add_contact(Contact::new("Jane Doe", "123456789012", "jane@x.com"))?;

        let found = manager.find_contacts("jane")?;
        assert_eq!(found, vec![Contact::new("Jane Doe", "123456789012", "jane@x.com")]);

        assert_eq!(manager.delete_contacts("123456789012")?, 1);
        assert!(manager.list_contacts()?.is_empty());
        assert!(manager.find_contacts("jane")?.is_empty());
        Ok(())
    }

    #[test]
    fn added_contacts_are_found_by_full_phone() -> Result<(), AppError> {
        let manager = ContactManager::new(Box::new(MemStore::with_contacts(sample())));
        let jane = Contact::new("Jane Doe", "123456789012", "jane@x.com");
        let john = Contact::new("John Doe", "123456789012", "john@x.com");
        let solo = Contact::new("Solo", "444444444444", "solo@x.com");

        for contact in [&jane, &john, &solo] {
            manager.add_contact(contact.clone())?;
        }

        let shared = manager.find_contacts(&jane.phone)?;
        assert!(shared.contains(&jane));
        assert!(shared.contains(&john));
        assert_eq!(shared.len(), 2);

        assert_eq!(manager.find_contacts(&solo.phone)?, vec![solo]);
        for contact in sample() {
            assert!(manager.find_contacts(&contact.phone)?.contains(&contact));
        }
        Ok(())
    }

    #[test]
    fn update_first_returns_previous_and_edits_in_place() {
        let mut contacts = sample();
        let previous = update_first(
            &mut contacts,
            "012345678999",
            ContactUpdate {
                name: Some("Alexander".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(previous, Some(sample()[1].clone()));
        assert_eq!(contacts[1].name, "Alexander");
        assert_eq!(update_first(&mut contacts, "zelda", ContactUpdate::default()), None);
    }

    #[test]
    fn manager_update_returns_previous() -> Result<(), AppError> {
        let manager = ContactManager::new(Box::new(MemStore::with_contacts(sample())));

        let previous = manager.update_contact(
            "mom",
            ContactUpdate {
                email: Some("mom@new.ng".to_string()),
                ..Default::default()
            },
        )?;

        assert_eq!(previous, Some(sample()[2].clone()));
        assert_eq!(manager.find_contacts("mom")?[0].email, "mom@new.ng");
        assert_eq!(manager.update_contact("zelda", ContactUpdate::default())?, None);
        Ok(())
    }
}
