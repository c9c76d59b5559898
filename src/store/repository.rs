/*!
 * SQLite-backed implementation of the translation store.
 *
 * This module provides the concrete store over the source_messages and
 * translations tables, abstracting away the SQL details and providing
 * type-safe access.
 */

use log::debug;
use rusqlite::{OptionalExtension, params};

use super::TranslationStore;
use super::connection::{StoreConnection, StoreStats};
use super::models::{SourceMessage, Translation};
use crate::errors::StorageError;

/// SQLite-backed translation store
#[derive(Clone)]
pub struct SqliteStore {
    /// Store connection
    db: StoreConnection,
}

impl SqliteStore {
    /// Create a new store with the given connection
    pub fn new(db: StoreConnection) -> Self {
        Self { db }
    }

    /// Create a store at the default database location
    pub fn new_default() -> Result<Self, StorageError> {
        let db = StoreConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a store with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, StorageError> {
        let db = StoreConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Get the underlying connection
    pub fn connection(&self) -> &StoreConnection {
        &self.db
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats, StorageError> {
        self.db.stats()
    }
}

impl TranslationStore for SqliteStore {
    /// Register an original string under a category.
    ///
    /// Always inserts: there is no existence pre-check, so repeated saves of
    /// the same original text produce duplicate rows, and concurrent writers
    /// racing on the same (message, category) can each insert one. Accepted
    /// behavior; lookups resolve duplicates by first exact match.
    fn ensure_source(&self, message: &str, category: &str) -> Result<SourceMessage, StorageError> {
        let message = message.to_string();
        let category = category.to_string();

        self.db.execute(move |conn| {
            conn.execute(
                "INSERT INTO source_messages (category, message) VALUES (?1, ?2)",
                params![category, message],
            )?;

            let id = conn.last_insert_rowid();
            debug!("Registered source message {} in category '{}'", id, category);

            Ok(SourceMessage {
                id,
                category,
                message,
            })
        })
    }

    /// Find source messages by message text and category, in insertion order.
    ///
    /// The SQL equality match may be collation-dependent; callers needing an
    /// exact match must re-verify the message field on the returned rows.
    fn find_sources(
        &self,
        message: &str,
        category: &str,
    ) -> Result<Vec<SourceMessage>, StorageError> {
        let message = message.to_string();
        let category = category.to_string();

        self.db.execute(move |conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, category, message
                FROM source_messages
                WHERE message = ?1 AND category = ?2
                ORDER BY id
                "#,
            )?;

            let rows = stmt.query_map(params![message, category], |row| {
                Ok(SourceMessage {
                    id: row.get(0)?,
                    category: row.get(1)?,
                    message: row.get(2)?,
                })
            })?;

            let sources: Vec<SourceMessage> = rows.filter_map(|r| r.ok()).collect();
            Ok(sources)
        })
    }

    /// List all translations for a source message, in insertion order.
    fn list_translations(&self, source_id: i64) -> Result<Vec<Translation>, StorageError> {
        self.db.execute(move |conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT source_id, locale, text
                FROM translations
                WHERE source_id = ?1
                ORDER BY id
                "#,
            )?;

            let rows = stmt.query_map([source_id], |row| {
                Ok(Translation {
                    source_id: row.get(0)?,
                    locale: row.get(1)?,
                    text: row.get(2)?,
                })
            })?;

            let translations: Vec<Translation> = rows.filter_map(|r| r.ok()).collect();
            Ok(translations)
        })
    }

    /// Update the first translation for (source_id, locale) if one exists,
    /// otherwise insert a new row.
    fn upsert_translation(
        &self,
        source_id: i64,
        locale: &str,
        text: &str,
    ) -> Result<(), StorageError> {
        let locale = locale.to_string();
        let text = text.to_string();

        self.db.execute(move |conn| {
            // The schema permits several rows per (source_id, locale); only
            // the first in insertion order is updated.
            let existing: Option<i64> = conn
                .query_row(
                    r#"
                    SELECT id FROM translations
                    WHERE source_id = ?1 AND locale = ?2
                    ORDER BY id
                    LIMIT 1
                    "#,
                    params![source_id, locale],
                    |row| row.get(0),
                )
                .optional()?;

            match existing {
                Some(id) => {
                    conn.execute(
                        "UPDATE translations SET text = ?1 WHERE id = ?2",
                        params![text, id],
                    )?;
                    debug!("Updated translation {} for source {} [{}]", id, source_id, locale);
                }
                None => {
                    conn.execute(
                        "INSERT INTO translations (source_id, locale, text) VALUES (?1, ?2, ?3)",
                        params![source_id, locale, text],
                    )?;
                    debug!("Inserted translation for source {} [{}]", source_id, locale);
                }
            }

            Ok(())
        })
    }
}
