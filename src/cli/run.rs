use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use super::command::{Cli, Commands};
use super::{Prompter, display_contact, menu};
use crate::domain::{Contact, ContactManager, ContactUpdate};
use crate::errors::AppError;
use crate::validation::{Requirement, validate_contact};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    let config = cli.config();

    info!(path = %config.path.display(), "using contacts file");
    let manager = ContactManager::new(Box::new(config.store()));

    match cli.command {
        None => menu::run_menu(&manager, &mut Prompter::stdio()),
        Some(command) => run_command(&manager, command, &mut io::stdout()),
    }
}

/// Executes one subcommand. Unlike the menu, a term that matches nothing
/// is reported as `AppError::NotFound` so scripts see a failing status.
pub fn run_command<W: Write>(
    manager: &ContactManager,
    command: Commands,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::Add { name, phone, email } => {
            let new_contact = Contact::new(name.trim(), phone.trim(), email.trim());
            validate_contact(&new_contact)?;

            manager.add_contact(new_contact)?;
            writeln!(out, "Contact successfully added!")?;
        }

        Commands::Find { term } => {
            let found = manager.find_contacts(term.trim())?;
            if found.is_empty() {
                return Err(AppError::NotFound("Contact".to_string()));
            }
            for contact in &found {
                writeln!(out, "{}", display_contact(contact))?;
            }
        }

        Commands::Delete { term } => match manager.delete_contacts(term.trim())? {
            0 => return Err(AppError::NotFound("Contact".to_string())),
            removed => writeln!(out, "Deleted {removed} contact(s)")?,
        },

        Commands::Update {
            term,
            name,
            phone,
            email,
        } => {
            let changes = ContactUpdate {
                name: checked(name, Requirement::Name)?,
                phone: checked(phone, Requirement::Phone)?,
                email: checked(email, Requirement::Email)?,
            };
            if changes.is_empty() {
                return Err(AppError::Validation(
                    "Provide at least one of --name, --phone or --email".to_string(),
                ));
            }

            match manager.update_contact(term.trim(), changes)? {
                Some(previous) => {
                    writeln!(out, "Updated {}", display_contact(&previous))?;
                }
                None => return Err(AppError::NotFound("Contact".to_string())),
            }
        }

        Commands::List => {
            let contacts = manager.list_contacts()?;
            if contacts.is_empty() {
                writeln!(out, "List of contacts is empty.")?;
            }
            for contact in &contacts {
                writeln!(out, "{}", display_contact(contact))?;
            }
        }
    }
    Ok(())
}

fn checked(value: Option<String>, rule: Requirement) -> Result<Option<String>, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !rule.check(&v) => Err(AppError::Validation(rule.to_string())),
        other => Ok(other),
    }
}
