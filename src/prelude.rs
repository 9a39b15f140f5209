pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    Contact, ContactManager, ContactUpdate,
    manager::{add, delete, list_sorted, update},
    search::{find, matches},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, CorruptLinePolicy, MemStore, TxtStore};
pub use crate::validation::{Requirement, is_valid_email, is_valid_name, is_valid_phone};
