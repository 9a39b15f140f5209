use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use csv::{QuoteStyle, StringRecord, Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::*;

pub const DEFAULT_STORAGE_PATH: &str = "user_contacts.txt";

const FIELDS_PER_RECORD: usize = 3;

/// Flat file of `name,phone,email` lines.
///
/// Fields are neither quoted nor escaped in either direction, so a comma
/// inside a value turns into an extra field on the next load.
#[derive(Debug, Clone)]
pub struct TxtStore {
    path: PathBuf,
    on_corrupt: CorruptLinePolicy,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            on_corrupt: CorruptLinePolicy::Reject,
        }
    }

    pub fn with_policy(mut self, on_corrupt: CorruptLinePolicy) -> Self {
        self.on_corrupt = on_corrupt;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ContactStore for TxtStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            debug!(path = %self.path.display(), "no contacts file yet");
            return Ok(Vec::new());
        }

        // Lines are read one by one rather than through a csv reader, which
        // would drop blank lines instead of reporting them.
        let reader = BufReader::new(File::open(&self.path)?);
        let mut contacts = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx as u64 + 1;
            let record: StringRecord = line.trim().split(',').collect();

            if record.len() != FIELDS_PER_RECORD {
                match self.on_corrupt {
                    CorruptLinePolicy::Reject => {
                        return Err(AppError::CorruptRecord {
                            line: line_no,
                            fields: record.len(),
                        });
                    }
                    CorruptLinePolicy::Skip => {
                        warn!(
                            line = line_no,
                            fields = record.len(),
                            "skipping malformed contact record"
                        );
                        continue;
                    }
                }
            }

            contacts.push(record.deserialize::<Contact>(None)?);
        }

        debug!(path = %self.path.display(), count = contacts.len(), "contacts loaded");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Write beside the target and rename over it, so a failed write
        // leaves the previous file intact.
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .quote_style(QuoteStyle::Never)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut tmp);

            for contact in contacts {
                writer.serialize(contact)?;
            }
            writer.flush()?;
        }
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), count = contacts.len(), "contacts saved");
        Ok(())
    }
}
