/*!
 * Record hooks for translatable attributes.
 *
 * The host record layer calls two named operations directly: `on_read`
 * after loading a record and `on_before_write` before persisting one.
 * There is no implicit event registration; the host decides when its
 * lifecycle reaches these points.
 */

use log::debug;

use crate::catalog::MessageCatalog;
use crate::errors::StorageError;
use crate::locale::LocaleContext;
use crate::resolver::{ReconcileAction, TranslationResolver};
use crate::store::TranslationStore;

/// Attribute access the behavior needs from a host record.
///
/// The host owns loading, persistence and dirty tracking; the behavior
/// only reads current and previously-persisted values and writes the
/// resolved text back.
pub trait TranslatableRecord {
    /// Current value of an attribute, if present
    fn attribute(&self, name: &str) -> Option<String>;

    /// Previously persisted value of an attribute, if present
    fn old_attribute(&self, name: &str) -> Option<String>;

    /// Overwrite the current value of an attribute
    fn set_attribute(&mut self, name: &str, value: String);
}

/// Translation hooks over a fixed set of record attributes.
///
/// Configured once per record type with the attribute names to translate
/// and the message category (often the table name). The category is
/// sanitized at construction: `{`, `}` and `%` are stripped, so quoted
/// table names like `{{%post}}` collapse to `post`.
pub struct TranslateBehavior<S, C> {
    resolver: TranslationResolver<S, C>,
    category: String,
    attributes: Vec<String>,
}

impl<S, C> TranslateBehavior<S, C>
where
    S: TranslationStore,
    C: MessageCatalog,
{
    /// Default category when none is configured
    pub const DEFAULT_CATEGORY: &'static str = "database";

    /// Create a behavior translating the given attributes under a category
    pub fn new(
        resolver: TranslationResolver<S, C>,
        category: &str,
        attributes: Vec<String>,
    ) -> Self {
        Self {
            resolver,
            category: sanitize_category(category),
            attributes,
        }
    }

    /// Create a behavior with the default category
    pub fn with_default_category(
        resolver: TranslationResolver<S, C>,
        attributes: Vec<String>,
    ) -> Self {
        Self::new(resolver, Self::DEFAULT_CATEGORY, attributes)
    }

    /// Get the sanitized category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the configured attribute names
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Get the underlying resolver
    pub fn resolver(&self) -> &TranslationResolver<S, C> {
        &self.resolver
    }

    /// Read hook: replace each translatable attribute with its rendering
    /// for the active locale. Missing attributes are skipped; lookup misses
    /// leave the original text in place.
    pub fn on_read<R: TranslatableRecord>(&self, record: &mut R, locales: &LocaleContext) {
        for name in &self.attributes {
            let Some(original) = record.attribute(name) else {
                continue;
            };
            let translated = self.resolver.translate(&original, &self.category, locales);
            record.set_attribute(name, translated);
        }
    }

    /// Write hook: reconcile every attribute whose value changed against
    /// the store, writing the outcome's field text back to the record.
    ///
    /// Returns the action taken per reconciled attribute. A storage failure
    /// aborts immediately and should abort the enclosing save, since a
    /// translation row may be out of step with the record text.
    pub fn on_before_write<R: TranslatableRecord>(
        &self,
        record: &mut R,
        locales: &LocaleContext,
    ) -> Result<Vec<(String, ReconcileAction)>, StorageError> {
        let mut actions = Vec::new();

        for name in &self.attributes {
            let (Some(new_text), Some(old_text)) =
                (record.attribute(name), record.old_attribute(name))
            else {
                continue;
            };

            if new_text == old_text {
                continue;
            }

            debug!("Reconciling changed attribute '{}'", name);
            let outcome =
                self.resolver
                    .reconcile(&old_text, &new_text, &self.category, locales)?;

            record.set_attribute(name, outcome.field_text);
            actions.push((name.clone(), outcome.action));
        }

        Ok(actions)
    }
}

/// Strip brace and percent characters from a configured category
pub fn sanitize_category(category: &str) -> String {
    category
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '%'))
        .collect()
}
