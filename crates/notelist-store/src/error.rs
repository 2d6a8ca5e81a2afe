//! Error types for the data-access layer.
//!
//! Validation failures are raised before any statement is issued;
//! database failures are classified at this boundary so that nothing
//! above the store needs to inspect SQLSTATE codes.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// SQLSTATE for foreign-key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failures surfaced by the data-access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Sort key or direction outside the whitelist.
    #[error("invalid sort parameters")]
    InvalidRequest,

    /// List identifier contains whitespace.
    #[error("invalid list identifier")]
    InvalidListId,

    /// Write input does not match the exact required field set.
    #[error("invalid note format")]
    InvalidNoteFormat,

    /// No row matched the given identifier(s) for update or delete.
    #[error("note not found")]
    NoteNotFound,

    /// The database rejected the statement over a broken reference.
    #[error("constraint violation")]
    ConstraintViolation,

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        {
            return Self::ConstraintViolation;
        }
        Self::Database(err)
    }
}
