use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use super::key::{contains_target_script, derive_key};
use super::store::{CandidateEntry, CandidateStore};
use super::walk::TreeWalker;

/// Counts from one extraction pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Text leaves visited.
    pub texts: usize,
    /// Text leaves containing CJK ideographs.
    pub candidates: usize,
    /// Lines appended to the candidate store.
    pub written: usize,
}

impl ExtractionReport {
    pub fn merge(&mut self, other: ExtractionReport) {
        self.texts += other.texts;
        self.candidates += other.candidates;
        self.written += other.written;
    }
}

/// Collects CJK text from structured data into a candidate store.
pub struct Extractor<'a> {
    store: &'a CandidateStore,
    walker: TreeWalker,
}

impl<'a> Extractor<'a> {
    pub fn new(store: &'a CandidateStore, walker: TreeWalker) -> Self {
        Self { store, walker }
    }

    /// Best-effort extraction: failures are logged, never returned.
    pub fn extract_and_write<T>(&self, data: &T)
    where
        T: Serialize + ?Sized,
    {
        if let Err(e) = self.try_extract(data) {
            warn!(
                store = %self.store.path().display(),
                error = %format!("{e:#}"),
                "candidate extraction incomplete"
            );
        }
    }

    /// Extract candidates from `data`, stopping at the first store failure.
    pub fn try_extract<T>(&self, data: &T) -> Result<ExtractionReport>
    where
        T: Serialize + ?Sized,
    {
        let tree = serde_json::to_value(data).context("Failed to convert data to a structured value")?;

        let mut report = ExtractionReport::default();
        let mut found = Vec::new();
        self.walker.visit(&tree, &mut |text: &str| {
            report.texts += 1;
            if contains_target_script(text) {
                found.push(CandidateEntry::new(derive_key(text), text));
            }
        });
        report.candidates = found.len();

        for entry in &found {
            if self.store.record(&entry.key, &entry.value)? {
                debug!(key = %entry.key, "recorded candidate");
                report.written += 1;
            }
        }

        Ok(report)
    }
}
