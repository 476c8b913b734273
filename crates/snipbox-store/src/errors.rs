//! Error helpers for snipbox-store
//!
//! Everything the store returns is a `SnipError`; these helpers keep the
//! kind and op naming consistent.

use snipbox_core::errors::{SnipError, SnipErrorKind, SnipboxError};

/// Result type alias using SnipError
pub type Result<T> = std::result::Result<T, SnipError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> SnipError {
    SnipError::new(SnipErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// An applied migration whose SQL no longer matches what is embedded
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> SnipError {
    SnipError::new(SnipErrorKind::Configuration)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> SnipError {
    SnipError::new(SnipErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// A store failure inside a named repository operation
pub fn persistence(op: &str, err: rusqlite::Error) -> SnipError {
    SnipError::new(SnipErrorKind::Persistence)
        .with_op(op)
        .with_message(err.to_string())
}

/// The repository was used without a store connection
pub fn not_configured(op: &str) -> SnipError {
    SnipError::new(SnipErrorKind::Configuration)
        .with_op(op)
        .with_message("database connection is not initialized")
}

/// No live snippet with this id
pub fn snippet_not_found(op: &str, id: i64) -> SnipError {
    SnipError::from(SnipboxError::SnippetNotFound { id }).with_op(op)
}
