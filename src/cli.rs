pub mod command;
pub mod menu;
pub mod run;

pub use run::run_app;

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::Contact;
use crate::errors::AppError;
use crate::validation::Requirement;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}, Phone: {}, Email: {}",
        contact.name, contact.phone, contact.email
    )
}

/// Line-oriented console I/O. Generic so the menu can be driven from a
/// buffer in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the trimmed reply.
    /// Fails with `AppError::InputClosed` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(input.trim().to_string())
    }

    /// Asks again until `rule` accepts the reply.
    pub fn ask_until(&mut self, prompt: &str, rule: Requirement) -> Result<String, AppError> {
        loop {
            let input = self.ask(prompt)?;
            if rule.check(&input) {
                return Ok(input);
            }
            self.say(rule)?;
        }
    }

    /// Like `ask_until`, but a blank reply means "keep current" and
    /// yields `None`.
    pub fn ask_optional(
        &mut self,
        prompt: &str,
        rule: Requirement,
    ) -> Result<Option<String>, AppError> {
        loop {
            let input = self.ask(prompt)?;
            if input.is_empty() {
                return Ok(None);
            }
            if rule.check(&input) {
                return Ok(Some(input));
            }
            self.say(rule)?;
        }
    }
}
