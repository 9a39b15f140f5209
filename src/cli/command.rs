use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::store::CorruptLinePolicy;
use crate::store::txt::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal contact book")]
pub struct Cli {
    /// File holding one `name,phone,email` record per line
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Skip malformed lines with a warning instead of refusing to load
    #[arg(long, env = "CONTACTS_SKIP_CORRUPT")]
    pub skip_corrupt: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Phone number, 12 digits
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Find contacts whose name or phone contains TERM
    Find { term: String },
    /// Delete every contact whose name or phone contains TERM
    Delete { term: String },
    /// Update the first contact whose name or phone contains TERM
    Update {
        term: String,

        /// Replace name
        #[arg(long)]
        name: Option<String>,

        /// Replace phone number
        #[arg(long)]
        phone: Option<String>,

        /// Replace email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List contacts sorted by name
    List,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            path: self.file.clone(),
            on_corrupt: if self.skip_corrupt {
                CorruptLinePolicy::Skip
            } else {
                CorruptLinePolicy::Reject
            },
        }
    }
}
