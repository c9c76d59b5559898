/*!
 * Persistent storage for source messages and their translations.
 *
 * This module provides SQLite-based persistence for:
 * - Source messages (original string + category)
 * - Per-locale translations referencing a source message
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::{StoreConnection, StoreStats};
pub use models::{SourceMessage, Translation};
pub use repository::SqliteStore;

use crate::errors::StorageError;

/// Storage operations the resolver depends on.
///
/// All operations are single-attempt and request-scoped: a persistence
/// failure surfaces as [`StorageError`] with no retry. The store provides
/// no locking or transaction discipline of its own; callers needing
/// stronger guarantees wrap reconciliation in an external transaction.
pub trait TranslationStore {
    /// Register an original string under a category. Always inserts;
    /// duplicates across repeated registrations are accepted.
    fn ensure_source(&self, message: &str, category: &str) -> Result<SourceMessage, StorageError>;

    /// Find source messages matching message and category, in insertion
    /// order. The match may be collation-dependent; callers must re-verify
    /// exactness.
    fn find_sources(
        &self,
        message: &str,
        category: &str,
    ) -> Result<Vec<SourceMessage>, StorageError>;

    /// List all translations for a source message, in insertion order.
    fn list_translations(&self, source_id: i64) -> Result<Vec<Translation>, StorageError>;

    /// Update the translation for (source_id, locale) if one exists,
    /// otherwise insert it.
    fn upsert_translation(
        &self,
        source_id: i64,
        locale: &str,
        text: &str,
    ) -> Result<(), StorageError>;
}
