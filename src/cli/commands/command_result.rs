use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{CandidateEntry, ExtractionReport, Locale};

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Extract(ExtractSummary),
    Pending(PendingSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub locale: Locale,
    pub text_count: usize,
    pub translated_count: usize,
    /// None when the document went to stdout.
    pub output: Option<PathBuf>,
}

/// An input that could not be extracted.
#[derive(Debug)]
pub struct InputFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub file_count: usize,
    pub report: ExtractionReport,
    pub store: PathBuf,
    pub failures: Vec<InputFailure>,
}

#[derive(Debug)]
pub struct PendingSummary {
    pub locale: Locale,
    pub entries: Vec<CandidateEntry>,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an autoglot command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, status: ExitStatus) -> Self {
        Self { summary, status }
    }
}
