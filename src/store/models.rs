/*!
 * Store entity models.
 *
 * These structures map directly to the store's tables and provide
 * type-safe access to persisted translation data.
 */

use serde::{Deserialize, Serialize};

/// An original-language string registered for translation.
///
/// Identity for lookup purposes is the (message, category) pair, but the
/// store does not enforce uniqueness on it: repeated registrations of the
/// same original text produce duplicate rows, and lookups resolve them by
/// first exact match in insertion order. The message text is immutable
/// after creation and rows are never deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMessage {
    /// Surrogate key assigned by the store on creation
    pub id: i64,
    /// Logical namespace grouping related messages, often a table name
    pub category: String,
    /// Original text in the source locale
    pub message: String,
}

impl SourceMessage {
    /// Create a new source message record (without a store-assigned id)
    pub fn new(category: String, message: String) -> Self {
        Self {
            id: 0, // Will be assigned by the store
            category,
            message,
        }
    }
}

/// A locale-specific rendering of a [`SourceMessage`].
///
/// At most one translation per (source_id, locale) is meaningful, though
/// the store permits multiples; the resolver picks the first locale match.
/// The text is overwritten on subsequent saves for the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Source message this translation belongs to
    pub source_id: i64,
    /// Target language code
    pub locale: String,
    /// Translated text
    pub text: String,
}

impl Translation {
    /// Create a new translation record
    pub fn new(source_id: i64, locale: String, text: String) -> Self {
        Self {
            source_id,
            locale,
            text,
        }
    }
}
