//! Text to translation resolution.
//!
//! Resolution order for a text value:
//! 1. whitespace-stripped text ending in `.message` is used as the key as-is
//! 2. text containing CJK ideographs gets a derived key
//! 3. anything else is not translatable and comes back unchanged
//!
//! A catalog miss, or any other lookup failure, also returns the text unchanged.

use tracing::debug;

use super::catalog::MessageCatalog;
use super::key::{contains_target_script, derive_key, explicit_key};
use super::locale::Locale;

/// Catalog key for `text`, or `None` when the text is not a translation candidate.
pub fn catalog_key(text: &str) -> Option<String> {
    if let Some(key) = explicit_key(text) {
        return Some(key);
    }
    if contains_target_script(text) {
        return Some(derive_key(text));
    }
    None
}

#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a dyn MessageCatalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a dyn MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, text: &str, locale: &Locale) -> String {
        let Some(key) = catalog_key(text) else {
            return text.to_string();
        };

        match self.catalog.lookup(&key, locale) {
            Ok(translated) => translated,
            Err(e) if e.is_missing() => text.to_string(),
            Err(e) => {
                debug!(key = %key, locale = %locale, error = %e, "catalog lookup failed");
                text.to_string()
            }
        }
    }
}
