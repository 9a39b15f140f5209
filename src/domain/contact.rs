use serde::{Deserialize, Serialize};

/// A single entry of the contact book.
///
/// Fields are written to disk verbatim between commas, so none of them may
/// contain a `,` or a line break. Nothing here enforces that: a value carrying
/// one is saved as-is and makes the next load fail with
/// [`AppError::CorruptRecord`](crate::errors::AppError::CorruptRecord).
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Replacement values for [`update`](crate::domain::manager::update).
/// `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}
