use crate::domain::Contact;

/// Substring match against the lower-cased name or the raw phone.
///
/// The term is lower-cased for both comparisons; phones are digits only, so
/// that never changes the phone result.
pub fn matches(contact: &Contact, term: &str) -> bool {
    let term = term.to_lowercase();
    contact.name.to_lowercase().contains(&term) || contact.phone.contains(&term)
}

/// Every contact matching `term`, in stored order.
pub fn find(contacts: &[Contact], term: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|c| matches(c, term))
        .cloned()
        .collect()
}

/// Position of the first contact matching `term`.
pub fn position(contacts: &[Contact], term: &str) -> Option<usize> {
    contacts.iter().position(|c| matches(c, term))
}
