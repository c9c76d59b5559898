/*!
 * Message catalog lookup for the read path.
 *
 * A catalog answers "what does this original text say in this locale".
 * The resolver treats a miss as a silent fallback to the original text,
 * so catalog lookups never fail.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::store::TranslationStore;

/// Message lookup keyed by category, original text and locale.
pub trait MessageCatalog {
    /// Look up the translation of an original text for a locale.
    /// Returns `None` on a miss; misses are not errors.
    fn lookup(&self, category: &str, original: &str, locale: &str) -> Option<String>;
}

/// Catalog key combining category, original text, and locale
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CatalogKey {
    /// Message category
    category: String,

    /// Original source text
    original: String,

    /// Target locale
    locale: String,
}

impl CatalogKey {
    /// Create a new catalog key
    fn new(category: &str, original: &str, locale: &str) -> Self {
        Self {
            category: category.to_string(),
            original: original.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// In-memory message catalog for preloaded bundles and tests
pub struct InMemoryCatalog {
    /// Internal catalog storage
    entries: Arc<RwLock<HashMap<CatalogKey, String>>>,

    /// Lookup hit counter
    hits: Arc<RwLock<usize>>,

    /// Lookup miss counter
    misses: Arc<RwLock<usize>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
        }
    }

    /// Add a translation to the catalog
    pub fn insert(&self, category: &str, original: &str, locale: &str, translation: &str) {
        let key = CatalogKey::new(category, original, locale);
        let mut entries = self.entries.write();
        entries.insert(key, translation.to_string());
    }

    /// Get lookup statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Remove all entries and reset counters
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();

        let mut hits = self.hits.write();
        *hits = 0;

        let mut misses = self.misses.write();
        *misses = 0;

        debug!("Message catalog cleared");
    }

    /// Get the number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog for InMemoryCatalog {
    fn lookup(&self, category: &str, original: &str, locale: &str) -> Option<String> {
        let key = CatalogKey::new(category, original, locale);
        let entries = self.entries.read();

        match entries.get(&key) {
            Some(translation) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!(
                    "Catalog hit for '{}' [{} -> {}]",
                    truncate_text(original, 30),
                    category,
                    locale
                );

                Some(translation.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!(
                    "Catalog miss for '{}' [{} -> {}]",
                    truncate_text(original, 30),
                    category,
                    locale
                );

                None
            }
        }
    }
}

/// Catalog backed by the translation store.
///
/// Resolves through the source_messages and translations tables: find the
/// source rows for (original, category), re-check the message for an exact
/// match, then take the first translation whose locale matches. Store
/// failures degrade to a miss, since the read path never fails.
pub struct StoreCatalog<S: TranslationStore> {
    store: S,
}

impl<S: TranslationStore> StoreCatalog<S> {
    /// Create a catalog over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TranslationStore> MessageCatalog for StoreCatalog<S> {
    fn lookup(&self, category: &str, original: &str, locale: &str) -> Option<String> {
        let sources = match self.store.find_sources(original, category) {
            Ok(sources) => sources,
            Err(e) => {
                warn!("Catalog lookup failed, falling back to original text: {}", e);
                return None;
            }
        };

        // The SQL match may be collation-lossy; re-check exactness.
        let source = sources.iter().find(|s| s.message == original)?;

        let translations = match self.store.list_translations(source.id) {
            Ok(translations) => translations,
            Err(e) => {
                warn!("Catalog lookup failed, falling back to original text: {}", e);
                return None;
            }
        };

        translations
            .into_iter()
            .find(|t| t.locale == locale)
            .map(|t| t.text)
    }
}

/// Truncate text for log output
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
