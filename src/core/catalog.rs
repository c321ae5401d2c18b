//! Message catalogs: read-only, per-locale key to text lookup.
//!
//! Catalog files follow the resource-bundle naming convention: a base name plus
//! an optional locale suffix, e.g. `messages.properties` (root bundle),
//! `messages_zh.properties`, `messages_zh_CN.properties`.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use thiserror::Error;

use super::locale::Locale;

const PROPERTIES_EXTENSION: &str = "properties";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No bundle in the locale's fallback chain holds the key.
    #[error("no message for key '{key}' in locale {locale}")]
    Missing { key: String, locale: Locale },
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl CatalogError {
    pub fn is_missing(&self) -> bool {
        matches!(self, CatalogError::Missing { .. })
    }
}

/// Lookup contract consumed by the resolver.
pub trait MessageCatalog: Send + Sync {
    fn lookup(&self, key: &str, locale: &Locale) -> Result<String, CatalogError>;

    fn contains(&self, key: &str, locale: &Locale) -> bool {
        self.lookup(key, locale).is_ok()
    }
}

/// In-memory catalog made of one bundle per locale suffix.
#[derive(Debug, Default, Clone)]
pub struct BundleCatalog {
    bundles: HashMap<String, HashMap<String, String>>,
}

/// A catalog file that could not be loaded.
#[derive(Debug, Clone)]
pub struct BundleWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct CatalogLoadResult {
    pub catalog: BundleCatalog,
    pub warnings: Vec<BundleWarning>,
}

impl BundleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or extend the bundle for `locale`.
    pub fn insert_bundle<I, K, V>(&mut self, locale: &Locale, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let bundle = self.bundles.entry(locale.as_str().to_string()).or_default();
        bundle.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn bundle(&self, locale: &Locale) -> Option<&HashMap<String, String>> {
        self.bundles.get(locale.as_str())
    }

    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.bundles.keys().map(Locale::new).collect();
        locales.sort();
        locales
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Load every `<base_name>[_<locale>].properties` file in `dir`.
    ///
    /// Files that fail to read or parse are reported as warnings.
    pub fn load(dir: impl AsRef<Path>, base_name: &str) -> Result<CatalogLoadResult> {
        let dir = dir.as_ref();
        let mut result = CatalogLoadResult::default();

        if !dir.exists() {
            bail!(
                "Messages directory '{}' does not exist.\n\
                 Hint: Check your .autoglotrc.json 'messagesRoot' setting.",
                dir.display()
            );
        }

        if !dir.is_dir() {
            bail!("'{}' is not a directory.", dir.display());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.extension().and_then(|e| e.to_str()) == Some(PROPERTIES_EXTENSION)
                && let Some(locale) = bundle_locale(&path, base_name)
            {
                match parse_properties_file(&path) {
                    Ok(entries) => result.catalog.insert_bundle(&locale, entries),
                    Err(e) => result.warnings.push(BundleWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: e.to_string(),
                    }),
                }
            }
        }

        Ok(result)
    }
}

impl MessageCatalog for BundleCatalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Result<String, CatalogError> {
        locale
            .fallback_chain()
            .into_iter()
            .filter_map(|suffix| self.bundles.get(suffix))
            .find_map(|bundle| bundle.get(key))
            .cloned()
            .ok_or_else(|| CatalogError::Missing {
                key: key.to_string(),
                locale: locale.clone(),
            })
    }
}

/// Extracts the bundle locale from a catalog file name.
///
/// Examples (base name `messages`):
/// - "messages.properties" -> Some(root)
/// - "messages_zh_CN.properties" -> Some("zh_CN")
/// - "labels_en.properties" -> None
pub fn bundle_locale(path: impl AsRef<Path>, base_name: &str) -> Option<Locale> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let rest = stem.strip_prefix(base_name)?;
    if rest.is_empty() {
        return Some(Locale::root());
    }
    rest.strip_prefix('_')
        .filter(|tag| !tag.is_empty())
        .map(Locale::new)
}

pub fn parse_properties_file(path: &Path) -> Result<HashMap<String, String>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_properties(&content, path)
}

/// Parse `.properties` content into key/value pairs.
///
/// Supports `#`/`!` comments, `=`, `:` or whitespace separators, trailing
/// backslash continuation and the usual escapes including `\uXXXX`.
pub fn parse_properties(
    content: &str,
    path: &Path,
) -> Result<HashMap<String, String>, CatalogError> {
    let mut entries = HashMap::new();
    let mut lines = content.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let line_num = idx + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (raw_key, raw_value) = split_entry(&logical);
        let malformed = |reason: String| CatalogError::Malformed {
            path: path.to_path_buf(),
            line: line_num,
            reason,
        };
        let key = unescape(raw_key).map_err(malformed)?;
        let value = unescape(raw_value).map_err(malformed)?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// Escape a key so [`parse_properties`] reads it back unchanged.
pub fn escape_properties_key(key: &str) -> String {
    escape_properties(key, true)
}

/// Escape a value so [`parse_properties`] reads it back unchanged.
///
/// Non-ASCII text is written as-is; catalog files are read as UTF-8.
pub fn escape_properties_value(value: &str) -> String {
    escape_properties(value, false)
}

fn escape_properties(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            // Leading value whitespace would be trimmed as part of the separator
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if is_key && i == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped separator.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\u{c}']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t', '\u{c}']);
    }
    (key, rest)
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .ok_or_else(|| format!("invalid unicode escape '\\u{}'", hex))?;
                let ch = char::from_u32(code)
                    .ok_or_else(|| format!("invalid code point '\\u{}'", hex))?;
                out.push(ch);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}
