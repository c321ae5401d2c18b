//! New-content discovery: candidates the catalog does not cover yet.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::catalog::{MessageCatalog, escape_properties_key, escape_properties_value};
use super::locale::Locale;
use super::store::CandidateEntry;

/// Entries whose keys `catalog` cannot resolve for `locale`, sorted by key.
pub fn pending_entries(
    entries: &[CandidateEntry],
    catalog: &dyn MessageCatalog,
    locale: &Locale,
) -> Vec<CandidateEntry> {
    let mut pending: Vec<CandidateEntry> = entries
        .iter()
        .filter(|entry| !catalog.contains(&entry.key, locale))
        .cloned()
        .collect();
    pending.sort();
    pending
}

/// Write entries as escaped `key=value` lines, ready to be merged into a catalog file.
pub fn write_properties(path: &Path, entries: &[CandidateEntry]) -> Result<()> {
    let content: String = entries
        .iter()
        .map(|entry| {
            format!(
                "{}={}\n",
                escape_properties_key(&entry.key),
                escape_properties_value(&entry.value)
            )
        })
        .collect();
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
