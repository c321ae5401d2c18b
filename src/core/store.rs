//! Candidate store: a `key=value` text file of untranslated text awaiting catalog entries.
//!
//! The file is append-only in practice. Readers apply "last matching key wins"
//! when several lines share a key.
//!
//! Recording is a read-check-append sequence. It runs under an in-process
//! mutex, so threads sharing one `CandidateStore` never race each other.
//! Separate processes writing the same file are not coordinated and may still
//! produce duplicate rows.

use std::{
    collections::HashMap,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};

/// A candidate as stored: catalog key and the raw text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateEntry {
    pub key: String,
    pub value: String,
}

impl CandidateEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug)]
pub struct CandidateStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl CandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `key=value` unless the store already maps `key` to `value`.
    ///
    /// Returns true if a line was appended.
    pub fn record(&self, key: &str, value: &str) -> Result<bool> {
        let value = encode_value(value);
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());

        let content = self.read_content()?;
        let existing = latest_values(&content);
        if existing.get(key).is_some_and(|stored| *stored == value) {
            return Ok(false);
        }

        let mut line = String::new();
        if !content.is_empty() && !content.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(key);
        line.push('=');
        line.push_str(&value);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open candidate file: {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to append to candidate file: {}", self.path.display()))?;

        Ok(true)
    }

    /// Distinct entries in first-seen key order, each with its latest decoded value.
    pub fn entries(&self) -> Result<Vec<CandidateEntry>> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let content = self.read_content()?;

        let mut order: Vec<&str> = Vec::new();
        let mut values: HashMap<&str, &str> = HashMap::new();
        for (key, value) in content.lines().filter_map(parse_line) {
            if values.insert(key, value).is_none() {
                order.push(key);
            }
        }

        Ok(order
            .into_iter()
            .map(|key| CandidateEntry::new(key, decode_value(values[key])))
            .collect())
    }

    fn read_content(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read candidate file: {}", self.path.display())),
        }
    }
}

/// Split a store line at its first `=`. Lines without `=` carry no entry.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}

fn latest_values(content: &str) -> HashMap<&str, &str> {
    content.lines().filter_map(parse_line).collect()
}

/// Keep one entry per line: backslashes and line breaks are written as
/// `\\`, `\n` and `\r` escapes.
fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`encode_value`]. Unknown escapes keep the escaped character.
fn decode_value(stored: &str) -> String {
    let mut out = String::with_capacity(stored.len());
    let mut chars = stored.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
