pub mod contact;
pub mod manager;
pub mod search;

pub use contact::{Contact, ContactUpdate};
pub use manager::ContactManager;
