use std::path::PathBuf;

use crate::store::{CorruptLinePolicy, TxtStore};

/// Resolved settings, injected into the store at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub on_corrupt: CorruptLinePolicy,
}

impl Config {
    pub fn store(&self) -> TxtStore {
        TxtStore::new(self.path.clone()).with_policy(self.on_corrupt)
    }
}
