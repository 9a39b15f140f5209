use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: expected 3 fields, found {fields}")]
    CorruptRecord { line: u64, fields: usize },

    #[error("Could not read contact record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not replace contacts file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use crate::validation::{Requirement, is_valid_phone};

    use super::*;

    #[test]
    fn confirm_corrupt_record_message() {
        let err = AppError::CorruptRecord { line: 4, fields: 2 };

        assert_eq!(
            err.to_string(),
            "Malformed record on line 4: expected 3 fields, found 2"
        );
    }

    #[test]
    fn confirm_validation_error() {
        if !is_valid_phone("abc") {
            let err = AppError::Validation(Requirement::Phone.to_string());

            assert_eq!(
                format!("{}", err),
                "Validation failed: Invalid phone number. Phone number must be 12 digits."
            );
        } else {
            panic!();
        }
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();

        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
