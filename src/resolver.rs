/*!
 * Translation resolution and reconciliation.
 *
 * The resolver implements the read path (substitute a stored message with
 * its active-locale translation) and the write path (decide whether a
 * changed attribute registers a new source message or updates an existing
 * translation). It holds no state beyond the collaborators it talks to;
 * category and locales arrive as per-call parameters.
 */

use log::debug;

use crate::catalog::MessageCatalog;
use crate::errors::StorageError;
use crate::locale::LocaleContext;
use crate::store::TranslationStore;

/// What a reconcile call did against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Old and new text were equal; nothing was done
    NoChange,
    /// The new text was registered as a source message
    SourceRegistered { source_id: i64 },
    /// An existing translation for the active locale was overwritten
    TranslationUpdated { source_id: i64 },
    /// A first translation was inserted for the source message
    TranslationInserted { source_id: i64 },
    /// The source had translations for other locales but none for the
    /// active locale; the new text was dropped. Faithful to the original
    /// behavior this crate reproduces, surfaced so callers can observe it.
    TranslationSkipped { source_id: i64 },
}

/// Outcome of a reconcile call: the action taken and the text the caller's
/// visible attribute should hold afterwards.
///
/// When a translation was stored the canonical original is preserved on the
/// record, so `field_text` reverts to the old text; translations live
/// side-by-side in the store, never in the original-language column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Action taken against the store
    pub action: ReconcileAction,
    /// Value the caller should write back to the visible attribute
    pub field_text: String,
}

/// Resolver over a translation store and a message catalog.
pub struct TranslationResolver<S, C> {
    store: S,
    catalog: C,
}

impl<S, C> TranslationResolver<S, C>
where
    S: TranslationStore,
    C: MessageCatalog,
{
    /// Create a resolver over the given store and catalog
    pub fn new(store: S, catalog: C) -> Self {
        Self { store, catalog }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the underlying catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve an original text to its active-locale rendering.
    ///
    /// When the active locale is the source locale the original is returned
    /// unchanged without any lookup; that fast path is part of the contract,
    /// not an optimization. Otherwise the catalog is consulted and a miss
    /// silently falls back to the original text. No side effects, never
    /// fails.
    pub fn translate(&self, original: &str, category: &str, locales: &LocaleContext) -> String {
        if locales.is_source_language() {
            return original.to_string();
        }

        self.catalog
            .lookup(category, original, &locales.active)
            .unwrap_or_else(|| original.to_string())
    }

    /// Reconcile a changed attribute value against the store.
    ///
    /// Callers invoke this only for attributes whose value changed; equal
    /// old and new text is tolerated and treated as a no-op. In the source
    /// locale the new text is registered as an original message, always
    /// inserting. In any other locale the old text is resolved to an
    /// existing source message and the new text is stored as its
    /// translation; when no source matches, the new text degenerates to a
    /// fresh source registration instead of an error.
    pub fn reconcile(
        &self,
        old_text: &str,
        new_text: &str,
        category: &str,
        locales: &LocaleContext,
    ) -> Result<ReconcileOutcome, StorageError> {
        if old_text == new_text {
            return Ok(ReconcileOutcome {
                action: ReconcileAction::NoChange,
                field_text: new_text.to_string(),
            });
        }

        if locales.is_source_language() {
            // Editing in the canonical language: record the new original.
            let source = self.store.ensure_source(new_text, category)?;
            debug!(
                "Registered source message {} for category '{}'",
                source.id, category
            );
            return Ok(ReconcileOutcome {
                action: ReconcileAction::SourceRegistered {
                    source_id: source.id,
                },
                field_text: new_text.to_string(),
            });
        }

        // Editing in a non-source locale: the old text identifies the source
        // message the new text translates.
        let candidates = self.store.find_sources(old_text, category)?;

        // The store's query may be case-insensitive or collation-dependent;
        // an exact re-check is mandatory.
        let source = candidates.iter().find(|s| s.message == old_text);

        let Some(source) = source else {
            // No source to attach the translation to; register the new text
            // as a fresh original instead.
            let registered = self.store.ensure_source(new_text, category)?;
            debug!(
                "No source matched '{}'; registered new source {} instead",
                old_text, registered.id
            );
            return Ok(ReconcileOutcome {
                action: ReconcileAction::SourceRegistered {
                    source_id: registered.id,
                },
                field_text: new_text.to_string(),
            });
        };

        let translations = self.store.list_translations(source.id)?;

        let action = if translations.is_empty() {
            self.store
                .upsert_translation(source.id, &locales.active, new_text)?;
            ReconcileAction::TranslationInserted {
                source_id: source.id,
            }
        } else if translations.iter().any(|t| t.locale == locales.active) {
            self.store
                .upsert_translation(source.id, &locales.active, new_text)?;
            ReconcileAction::TranslationUpdated {
                source_id: source.id,
            }
        } else {
            // Translations exist for other locales but not this one; the
            // new text is dropped rather than inserted.
            debug!(
                "Source {} has translations but none for locale '{}'; skipping",
                source.id, locales.active
            );
            ReconcileAction::TranslationSkipped {
                source_id: source.id,
            }
        };

        // The canonical original stays on the record.
        Ok(ReconcileOutcome {
            action,
            field_text: old_text.to_string(),
        })
    }
}
