use std::fmt;

use crate::domain::Contact;
use crate::errors::AppError;

/// The format rule a field failed, worded for the person typing it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Name,
    Phone,
    Email,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Requirement::Name => "Name cannot be empty.",
            Requirement::Phone => "Invalid phone number. Phone number must be 12 digits.",
            Requirement::Email => "Invalid email. Email must contain @ and a . after it.",
        };
        f.write_str(msg)
    }
}

impl Requirement {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Requirement::Name => is_valid_name(value),
            Requirement::Phone => is_valid_phone(value),
            Requirement::Email => is_valid_email(value),
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_phone(phone: &str) -> bool {
    // Exactly 12 characters, every one a decimal digit
    phone.len() == 12 && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    // Only the text after the first '@' is checked for a dot
    match email.split_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// Checks all three fields, reporting the first rule broken.
pub fn validate_contact(contact: &Contact) -> Result<(), AppError> {
    let fields = [
        (Requirement::Name, &contact.name),
        (Requirement::Phone, &contact.phone),
        (Requirement::Email, &contact.email),
    ];

    match fields.iter().find(|(rule, value)| !rule.check(value)) {
        Some((rule, _)) => Err(AppError::Validation(rule.to_string())),
        None => Ok(()),
    }
}
