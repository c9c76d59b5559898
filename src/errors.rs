/*!
 * Error types for the translatable crate.
 *
 * This module contains the error taxonomy for the translation store,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised by the translation store.
///
/// The resolver has no errors of its own; every failure it surfaces is a
/// `StorageError` propagated unchanged from the store. A failed reconcile
/// should abort the enclosing record save, since a translation row may be
/// left inconsistent with the record text.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error from the underlying SQLite database
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Error creating or accessing the database file
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection mutex was poisoned by a panicking thread
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Could not determine a location for the store file
    #[error("Store path error: {0}")]
    Path(String),

    /// The on-disk schema is in a state this version cannot handle
    #[error("Schema error: {0}")]
    Schema(String),
}
