/*!
 * Store connection management.
 *
 * This module handles SQLite connection creation and initialization for
 * the translation store. Access is synchronous and request-scoped: every
 * operation runs to completion on the caller's thread, matching the
 * single-attempt, no-retry contract of the store.
 */

use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::schema;
use crate::errors::StorageError;

/// Default store filename
const DEFAULT_DB_FILENAME: &str = "translatable.db";

/// Default store directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "translatable";

/// Store connection wrapper with thread-safe access
#[derive(Clone)]
pub struct StoreConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl StoreConnection {
    /// Create a new store connection at the default location
    pub fn new_default() -> Result<Self, StorageError> {
        let db_path = Self::default_store_path()?;
        Self::new(&db_path)
    }

    /// Create a new store connection at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening translation store at: {:?}", db_path);

        let conn = Connection::open(&db_path)?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory store (for testing)
    pub fn new_in_memory() -> Result<Self, StorageError> {
        debug!("Creating in-memory translation store");

        let conn = Connection::open_in_memory()?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default store path
    pub fn default_store_path() -> Result<PathBuf, StorageError> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| StorageError::Path("Could not determine data directory".to_string()))?;

        let db_dir = base_dir.join(DEFAULT_DB_DIRNAME);
        let db_path = db_dir.join(DEFAULT_DB_FILENAME);

        Ok(db_path)
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a store operation with the connection
    ///
    /// This method acquires the mutex lock and executes the provided closure
    /// with access to the connection.
    pub fn execute<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self
            .connection
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        f(&conn)
    }

    /// Vacuum the database to reclaim space
    pub fn vacuum(&self) -> Result<(), StorageError> {
        self.execute(|conn| {
            conn.execute("VACUUM", [])?;
            Ok(())
        })
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats, StorageError> {
        self.execute(|conn| {
            let source_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM source_messages", [], |row| row.get(0))
                .unwrap_or(0);

            let translation_count: i64 = conn
                .query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))
                .unwrap_or(0);

            let category_count: i64 = conn
                .query_row(
                    "SELECT COUNT(DISTINCT category) FROM source_messages",
                    [],
                    |row| row.get(0),
                )
                .unwrap_or(0);

            // Get file size if not in-memory
            let file_size = if self.db_path.to_string_lossy() != ":memory:" {
                std::fs::metadata(&self.db_path)
                    .map(|m| m.len())
                    .unwrap_or(0)
            } else {
                0
            };

            Ok(StoreStats {
                source_count,
                translation_count,
                category_count,
                file_size_bytes: file_size,
            })
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Number of registered source messages
    pub source_count: i64,
    /// Number of stored translations
    pub translation_count: i64,
    /// Number of distinct categories
    pub category_count: i64,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sources: {}, Translations: {}, Categories: {}, Size: {} KB",
            self.source_count,
            self.translation_count,
            self.category_count,
            self.file_size_bytes / 1024
        )
    }
}
