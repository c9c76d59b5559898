/*!
 * Common test utilities for the translatable test suite
 */

use std::collections::HashMap;

use translatable::{
    InMemoryCatalog, SqliteStore, TranslatableRecord, TranslateBehavior, TranslationResolver,
};

/// Initialize test logging; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a resolver over a fresh in-memory store
pub fn create_test_resolver() -> TranslationResolver<SqliteStore, InMemoryCatalog> {
    init_test_logging();
    let store = SqliteStore::new_in_memory().expect("Failed to create in-memory store");
    TranslationResolver::new(store, InMemoryCatalog::new())
}

/// Build a behavior over a fresh in-memory store
pub fn create_test_behavior(
    category: &str,
    attributes: &[&str],
) -> TranslateBehavior<SqliteStore, InMemoryCatalog> {
    TranslateBehavior::new(
        create_test_resolver(),
        category,
        attributes.iter().map(|a| a.to_string()).collect(),
    )
}

/// Minimal host record with save/reload semantics.
///
/// `save` promotes current values to old values, the way a record layer
/// snapshots attributes after a successful persist.
pub struct MemoryRecord {
    current: HashMap<String, String>,
    old: HashMap<String, String>,
}

impl MemoryRecord {
    pub fn new(values: &[(&str, &str)]) -> Self {
        let map: HashMap<String, String> = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            current: map.clone(),
            old: map,
        }
    }

    /// Simulate an edit to an attribute
    pub fn edit(&mut self, name: &str, value: &str) {
        self.current.insert(name.to_string(), value.to_string());
    }

    /// Simulate a successful persist: current values become the old ones
    pub fn save(&mut self) {
        self.old = self.current.clone();
    }
}

impl TranslatableRecord for MemoryRecord {
    fn attribute(&self, name: &str) -> Option<String> {
        self.current.get(name).cloned()
    }

    fn old_attribute(&self, name: &str) -> Option<String> {
        self.old.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        self.current.insert(name.to_string(), value);
    }
}
