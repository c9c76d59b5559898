/*!
 * End-to-end tests for the read/reconcile lifecycle over a host record.
 */

use translatable::{LocaleContext, ReconcileAction, TranslatableRecord, TranslationStore};

use crate::common::{MemoryRecord, create_test_behavior};

#[test]
fn test_sourceLocaleEdit_shouldRegisterOriginalAndKeepField() {
    let behavior = create_test_behavior("database", &["title"]);
    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("en", "en");

    record.edit("title", "Hi");
    let actions = behavior.on_before_write(&mut record, &locales).unwrap();

    assert_eq!(actions.len(), 1);
    assert!(matches!(
        actions[0].1,
        ReconcileAction::SourceRegistered { .. }
    ));
    // The edited text stays visible; no translation is touched
    assert_eq!(record.attribute("title"), Some("Hi".to_string()));

    let store = behavior.resolver().store();
    let sources = store.find_sources("Hi", "database").unwrap();
    assert_eq!(sources.len(), 1);
    assert!(store.list_translations(sources[0].id).unwrap().is_empty());
}

#[test]
fn test_translationEdit_shouldUpdateRowAndRevertField() {
    let behavior = create_test_behavior("database", &["title"]);
    let store = behavior.resolver().store();
    let source = store.ensure_source("Hello", "database").unwrap();
    store.upsert_translation(source.id, "fr", "Bonjour").unwrap();

    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("fr", "en");

    record.edit("title", "Salut");
    let actions = behavior.on_before_write(&mut record, &locales).unwrap();

    assert_eq!(
        actions,
        vec![(
            "title".to_string(),
            ReconcileAction::TranslationUpdated {
                source_id: source.id
            }
        )]
    );
    // The canonical original is restored on the record
    assert_eq!(record.attribute("title"), Some("Hello".to_string()));

    let translations = behavior
        .resolver()
        .store()
        .list_translations(source.id)
        .unwrap();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].text, "Salut");
}

#[test]
fn test_firstTranslation_thenRead_shouldRoundTripThroughCatalog() {
    let behavior = create_test_behavior("database", &["title"]);
    behavior
        .resolver()
        .store()
        .ensure_source("Hello", "database")
        .unwrap();

    // A translator saves the first French rendering
    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("fr", "en");
    record.edit("title", "Bonjour");
    behavior.on_before_write(&mut record, &locales).unwrap();
    record.save();

    // The catalog is fed the stored translation, as a host message source
    // would after reloading its bundles
    behavior
        .resolver()
        .catalog()
        .insert("database", "Hello", "fr", "Bonjour");

    behavior.on_read(&mut record, &locales);
    assert_eq!(record.attribute("title"), Some("Bonjour".to_string()));
}

#[test]
fn test_read_inSourceLocale_shouldNotConsultCatalog() {
    let behavior = create_test_behavior("database", &["title"]);
    behavior
        .resolver()
        .catalog()
        .insert("database", "Hello", "en", "SHOULD NOT APPEAR");

    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("en", "en");

    behavior.on_read(&mut record, &locales);

    assert_eq!(record.attribute("title"), Some("Hello".to_string()));
    let (hits, misses, _) = behavior.resolver().catalog().stats();
    assert_eq!(hits + misses, 0);
}

#[test]
fn test_unknownOriginal_editedInForeignLocale_shouldDegradeToRegistration() {
    let behavior = create_test_behavior("database", &["title"]);
    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("fr", "en");

    record.edit("title", "Bonjour");
    let actions = behavior.on_before_write(&mut record, &locales).unwrap();

    // No source matches "Hello", so "Bonjour" is registered as a new
    // original and stays visible on the record
    assert!(matches!(
        actions[0].1,
        ReconcileAction::SourceRegistered { .. }
    ));
    assert_eq!(record.attribute("title"), Some("Bonjour".to_string()));

    let store = behavior.resolver().store();
    assert_eq!(store.find_sources("Bonjour", "database").unwrap().len(), 1);
}

#[test]
fn test_foreignLocaleTranslationsOnly_shouldDropNewTextAndRevert() {
    let behavior = create_test_behavior("database", &["title"]);
    let store = behavior.resolver().store();
    let source = store.ensure_source("Hello", "database").unwrap();
    store.upsert_translation(source.id, "de", "Hallo").unwrap();

    let mut record = MemoryRecord::new(&[("title", "Hello")]);
    let locales = LocaleContext::new("fr", "en");

    record.edit("title", "Bonjour");
    let actions = behavior.on_before_write(&mut record, &locales).unwrap();

    assert_eq!(
        actions,
        vec![(
            "title".to_string(),
            ReconcileAction::TranslationSkipped {
                source_id: source.id
            }
        )]
    );
    assert_eq!(record.attribute("title"), Some("Hello".to_string()));

    // The German translation is untouched and no French row appeared
    let translations = behavior
        .resolver()
        .store()
        .list_translations(source.id)
        .unwrap();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].locale, "de");
}

#[test]
fn test_repeatedTranslationEdits_shouldKeepSingleRowPerLocale() {
    let behavior = create_test_behavior("database", &["title"]);
    let store = behavior.resolver().store();
    let source = store.ensure_source("Hello", "database").unwrap();

    let locales = LocaleContext::new("fr", "en");
    let mut record = MemoryRecord::new(&[("title", "Hello")]);

    // First translation inserts
    record.edit("title", "Bonjour");
    behavior.on_before_write(&mut record, &locales).unwrap();
    record.save();

    // Second translation updates the same row
    record.edit("title", "Salut");
    behavior.on_before_write(&mut record, &locales).unwrap();

    let translations = behavior
        .resolver()
        .store()
        .list_translations(source.id)
        .unwrap();
    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].text, "Salut");
}

#[test]
fn test_multipleAttributes_shouldReconcileIndependently() {
    let behavior = create_test_behavior("{{%post}}", &["title", "body"]);
    assert_eq!(behavior.category(), "post");

    let mut record = MemoryRecord::new(&[("title", "Hello"), ("body", "World")]);
    let locales = LocaleContext::new("en", "en");

    record.edit("title", "Hi");
    record.edit("body", "Everyone");
    let actions = behavior.on_before_write(&mut record, &locales).unwrap();

    assert_eq!(actions.len(), 2);
    let store = behavior.resolver().store();
    assert_eq!(store.find_sources("Hi", "post").unwrap().len(), 1);
    assert_eq!(store.find_sources("Everyone", "post").unwrap().len(), 1);
}
