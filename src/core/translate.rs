use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use super::locale::{Locale, LocaleSource};
use super::resolve::Resolver;
use super::walk::TreeWalker;

/// Produces translated copies of response data.
///
/// Any value that round-trips through serde can be translated; the translated
/// copy has the same shape, with only text leaves outside excluded fields
/// rewritten.
pub struct Translator<'a> {
    resolver: Resolver<'a>,
    walker: TreeWalker,
}

impl<'a> Translator<'a> {
    pub fn new(resolver: Resolver<'a>, walker: TreeWalker) -> Self {
        Self { resolver, walker }
    }

    /// Translate `data` for the locale supplied by `locale_source`.
    ///
    /// Never fails: if conversion to or from a structured value fails the
    /// error is logged and `data` is returned untouched.
    pub fn translate<T, L>(&self, data: T, locale_source: &L) -> T
    where
        T: Serialize + DeserializeOwned,
        L: LocaleSource + ?Sized,
    {
        let locale = locale_source.current_locale();
        match self.try_translate(&data, &locale) {
            Ok(translated) => translated,
            Err(e) => {
                warn!(locale = %locale, error = %format!("{e:#}"), "translation skipped");
                data
            }
        }
    }

    pub fn try_translate<T>(&self, data: &T, locale: &Locale) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let tree = serde_json::to_value(data).context("Failed to convert data to a structured value")?;
        let translated = self.translate_value(tree, locale);
        serde_json::from_value(translated).context("Failed to rebuild data from the translated value")
    }

    /// Translate a structured value directly.
    pub fn translate_value(&self, value: Value, locale: &Locale) -> Value {
        self.translate_value_counted(value, locale).0
    }

    /// Like [`Translator::translate_value`], also returning how many text leaves changed.
    pub fn translate_value_counted(&self, value: Value, locale: &Locale) -> (Value, usize) {
        let mut changed = 0;
        let translated = self.walker.transform(value, &mut |text: &str| {
            let resolved = self.resolver.resolve(text, locale);
            if resolved != text {
                changed += 1;
            }
            resolved
        });
        (translated, changed)
    }
}
