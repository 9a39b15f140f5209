use std::io::{BufRead, Write};

use tracing::debug;

use super::{Prompter, display_contact};
use crate::domain::{Contact, ContactManager, ContactUpdate};
use crate::errors::AppError;
use crate::validation::Requirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddContact,
    FindContact,
    DeleteContact,
    UpdateContact,
    ListContacts,
    Exit,
}

pub fn parse_command(choice: &str) -> Result<MenuCommand, AppError> {
    match choice {
        "1" => Ok(MenuCommand::AddContact),
        "2" => Ok(MenuCommand::FindContact),
        "3" => Ok(MenuCommand::DeleteContact),
        "4" => Ok(MenuCommand::UpdateContact),
        "5" => Ok(MenuCommand::ListContacts),
        "6" => Ok(MenuCommand::Exit),
        _ => Err(AppError::ParseCommand(choice.to_string())),
    }
}

const MENU: &str = "\nPlease choose an option:\n\
    1. Add contact\n\
    2. Find contact by name or phone number\n\
    3. Delete contact by name or phone number\n\
    4. Update contact by name or phone number\n\
    5. View contacts\n\
    6. Exit";

const GOODBYE: &str = "The program has been completed. Bye!";
const NOT_FOUND: &str = "Contact not found.";

/// Interactive loop. Returns when the user picks Exit or input runs out.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &ContactManager,
    prompter: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    prompter.say("Welcome to the Contacts Manager!")?;

    loop {
        match menu_step(manager, prompter) {
            Ok(true) => continue,
            Ok(false) | Err(AppError::InputClosed) => {
                prompter.say(GOODBYE)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

/// One pass through the menu. `Ok(false)` means the user chose to exit.
fn menu_step<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<bool, AppError> {
    p.say(MENU)?;
    let choice = p.ask("Your choice: ")?;

    let command = match parse_command(&choice) {
        Ok(command) => command,
        Err(e) => {
            debug!("{e}");
            p.say("Invalid choice. Please try again.")?;
            return Ok(true);
        }
    };

    match command {
        MenuCommand::AddContact => add_contact(manager, p)?,
        MenuCommand::FindContact => find_contact(manager, p)?,
        MenuCommand::DeleteContact => delete_contact(manager, p)?,
        MenuCommand::UpdateContact => update_contact(manager, p)?,
        MenuCommand::ListContacts => list_contacts(manager, p)?,
        MenuCommand::Exit => return Ok(false),
    }
    Ok(true)
}

fn add_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let name = p.ask_until("Please enter a name: ", Requirement::Name)?;
    let phone = p.ask_until("Please enter a phone number (12 digits): ", Requirement::Phone)?;
    let email = p.ask_until("Please enter an email: ", Requirement::Email)?;

    manager.add_contact(Contact::new(name, phone, email))?;
    p.say("Contact successfully added!")
}

fn find_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let term = p.ask("Enter a name or phone number to search: ")?;
    let found = manager.find_contacts(&term)?;

    if found.is_empty() {
        return p.say(NOT_FOUND);
    }
    for contact in &found {
        p.say(display_contact(contact))?;
    }
    Ok(())
}

fn delete_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let term = p.ask("Please enter a name or phone number to delete: ")?;

    match manager.delete_contacts(&term)? {
        0 => p.say(NOT_FOUND),
        1 => p.say("Contact deleted!"),
        n => p.say(format!("{n} contacts deleted!")),
    }
}

fn update_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let term = p.ask("Please enter a name or phone number to update: ")?;

    let Some(current) = manager.find_contacts(&term)?.into_iter().next() else {
        return p.say(NOT_FOUND);
    };
    p.say(format!("Contact found: {}", display_contact(&current)))?;

    let changes = ContactUpdate {
        name: p.ask_optional(
            "Please enter a new name (leave blank to keep unchanged): ",
            Requirement::Name,
        )?,
        phone: p.ask_optional(
            "Please enter a phone number (12 digits, leave blank to keep unchanged): ",
            Requirement::Phone,
        )?,
        email: p.ask_optional(
            "Please enter a new email (leave blank to keep unchanged): ",
            Requirement::Email,
        )?,
    };

    match manager.update_contact(&term, changes)? {
        Some(_) => p.say("Contact updated!"),
        None => p.say(NOT_FOUND),
    }
}

fn list_contacts<R: BufRead, W: Write>(
    manager: &ContactManager,
    p: &mut Prompter<R, W>,
) -> Result<(), AppError> {
    let contacts = manager.list_contacts()?;

    if contacts.is_empty() {
        return p.say("List of contacts is empty.");
    }
    p.say("\nList of contacts (sorted by name): ")?;
    for contact in &contacts {
        p.say(display_contact(contact))?;
    }
    Ok(())
}
