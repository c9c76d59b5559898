use isolang::Language;
use serde::{Deserialize, Serialize};

/// Locale utilities and per-request locale context.
///
/// The pair of locales that used to live in global mutable application
/// state is passed explicitly instead: every translate/reconcile call
/// receives a [`LocaleContext`] describing the request it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContext {
    /// Language currently in effect for the request/session
    pub active: String,
    /// Canonical language in which original strings are authored
    pub source: String,
}

impl LocaleContext {
    /// Create a new locale context
    pub fn new(active: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            source: source.into(),
        }
    }

    /// True when the request is running in the canonical source language,
    /// i.e. no translation lookup or storage applies.
    pub fn is_source_language(&self) -> bool {
        self.active == self.source
    }
}

/// Validate that a locale code starts with a known ISO 639-1 or ISO 639-3
/// language code. Region subtags ("en-US", "pt_BR") are accepted; only the
/// language part is checked.
pub fn validate_locale(code: &str) -> bool {
    language_part(code)
        .map(|lang| match lang.len() {
            2 => Language::from_639_1(&lang).is_some(),
            3 => Language::from_639_3(&lang).is_some(),
            _ => false,
        })
        .unwrap_or(false)
}

/// Get the English name of the language a locale code refers to, if known.
pub fn language_name(code: &str) -> Option<&'static str> {
    let lang = language_part(code)?;
    let language = match lang.len() {
        2 => Language::from_639_1(&lang),
        3 => Language::from_639_3(&lang),
        _ => None,
    }?;
    Some(language.to_name())
}

/// Extract the lowercase language subtag from a locale code
fn language_part(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lang = trimmed
        .split(['-', '_'])
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();
    Some(lang)
}
