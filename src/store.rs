pub mod memory;
pub mod txt;

use std::fs;
use std::path::Path;

use crate::domain::Contact;
use crate::errors::AppError;

pub use memory::MemStore;
pub use txt::TxtStore;

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// What a load does with a line that is not exactly three fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CorruptLinePolicy {
    /// Fail the whole load with `AppError::CorruptRecord`.
    #[default]
    Reject,
    /// Drop the line and log a warning.
    Skip,
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
