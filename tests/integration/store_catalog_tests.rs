/*!
 * Integration tests for the store-backed catalog and a file-backed store.
 */

use translatable::{
    LocaleContext, MessageCatalog, SqliteStore, StoreCatalog, StoreConnection,
    TranslationResolver, TranslationStore,
};

#[test]
fn test_storeCatalog_readPath_shouldResolveStoredTranslations() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");
    let source = store.ensure_source("Hello", "database").unwrap();
    store.upsert_translation(source.id, "fr", "Bonjour").unwrap();

    let resolver = TranslationResolver::new(store.clone(), StoreCatalog::new(store));

    let fr = LocaleContext::new("fr", "en");
    let de = LocaleContext::new("de", "en");
    let en = LocaleContext::new("en", "en");

    assert_eq!(resolver.translate("Hello", "database", &fr), "Bonjour");
    // Miss falls back to the original text
    assert_eq!(resolver.translate("Hello", "database", &de), "Hello");
    // Source locale bypasses the catalog entirely
    assert_eq!(resolver.translate("Hello", "database", &en), "Hello");
}

#[test]
fn test_storeCatalog_withDuplicateSources_shouldUseFirstExactMatch() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");
    let first = store.ensure_source("Hello", "database").unwrap();
    let second = store.ensure_source("Hello", "database").unwrap();
    store.upsert_translation(first.id, "fr", "Bonjour").unwrap();
    store.upsert_translation(second.id, "fr", "Salut").unwrap();

    let catalog = StoreCatalog::new(store);
    assert_eq!(
        catalog.lookup("database", "Hello", "fr"),
        Some("Bonjour".to_string())
    );
}

#[test]
fn test_reconcileThenStoreCatalog_shouldExposeNewTranslation() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");
    store.ensure_source("Hello", "database").unwrap();

    let resolver = TranslationResolver::new(store.clone(), StoreCatalog::new(store));
    let fr = LocaleContext::new("fr", "en");

    let outcome = resolver
        .reconcile("Hello", "Bonjour", "database", &fr)
        .unwrap();
    assert_eq!(outcome.field_text, "Hello");

    // The store-backed catalog sees the row immediately
    assert_eq!(resolver.translate("Hello", "database", &fr), "Bonjour");
}

#[test]
fn test_fileBackedStore_shouldPersistAcrossReopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("translatable.db");

    {
        let conn = StoreConnection::new(&db_path).expect("Failed to open store");
        let store = SqliteStore::new(conn);
        let source = store.ensure_source("Hello", "database").unwrap();
        store.upsert_translation(source.id, "fr", "Bonjour").unwrap();
    }

    // Reopen and resolve through a fresh connection
    let conn = StoreConnection::new(&db_path).expect("Failed to reopen store");
    let store = SqliteStore::new(conn);

    let sources = store.find_sources("Hello", "database").unwrap();
    assert_eq!(sources.len(), 1);

    let translations = store.list_translations(sources[0].id).unwrap();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].text, "Bonjour");

    let stats = store.stats().unwrap();
    assert_eq!(stats.source_count, 1);
    assert_eq!(stats.translation_count, 1);
    assert!(stats.file_size_bytes > 0);
}
