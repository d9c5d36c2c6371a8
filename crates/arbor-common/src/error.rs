//! Error types for the Arbor index engine.

use thiserror::Error;

/// Result type alias using ArborError.
pub type Result<T> = std::result::Result<T, ArborError>;

/// Errors that can occur in Arbor operations.
#[derive(Debug, Error)]
pub enum ArborError {
    // B+ tree errors
    #[error("Duplicate key")]
    DuplicateKey,

    // Index wrapper errors
    #[error("Record not found: {id}")]
    RecordNotFound { id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = ArborError::DuplicateKey;
        assert_eq!(err.to_string(), "Duplicate key");
    }

    #[test]
    fn test_record_not_found_display() {
        let err = ArborError::RecordNotFound { id: 42 };
        assert_eq!(err.to_string(), "Record not found: 42");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ArborError::DuplicateKey)
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArborError>();
    }
}
