//! Command summary printing.
//!
//! Kept apart from the commands so autoglot can be used as a library.
//! Translate summaries go to stderr because stdout may carry the document.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, PendingSummary, TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CandidateEntry;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Translate(summary) => {
            print_translate(summary, &mut io::stderr().lock());
        }
        CommandSummary::Extract(summary) => {
            print_extract(summary, verbose, &mut io::stdout().lock());
        }
        CommandSummary::Pending(summary) => {
            print_pending(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    let target = match &summary.output {
        Some(path) => format!(" -> {}", path.display()),
        None => String::new(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Translated {} of {} text value(s) for locale {}{}",
            summary.translated_count, summary.text_count, summary.locale, target
        )
        .green()
    );
}

pub fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    for failure in &summary.failures {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            "error:".bold().red(),
            failure.path.display(),
            failure.error
        );
    }

    let report = &summary.report;
    let processed = summary.file_count - summary.failures.len();
    if verbose {
        let _ = writeln!(
            writer,
            "  {} text value(s) scanned, {} contained CJK text",
            report.texts, report.candidates
        );
    }

    let mark = if summary.failures.is_empty() {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };
    let _ = writeln!(
        writer,
        "{} Recorded {} new candidate(s) from {} file(s) in {}",
        mark,
        report.written,
        processed,
        summary.store.display()
    );
}

pub fn print_pending<W: Write>(summary: &PendingSummary, writer: &mut W) {
    if summary.entries.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No pending candidates for locale {}", summary.locale).green()
        );
        return;
    }

    let key_width = max_key_width(&summary.entries);
    for entry in &summary.entries {
        let padding = key_width - entry.key.width();
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            entry.key.cyan(),
            " ".repeat(padding),
            entry.value
        );
    }

    let _ = writeln!(writer);
    let written = match &summary.output {
        Some(path) => format!(", written to {}", path.display()),
        None => String::new(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} candidate(s) missing from locale {}{}",
            summary.entries.len(),
            summary.locale,
            written
        )
        .bold()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

/// Display width of the widest key; CJK keys take two columns per ideograph.
fn max_key_width(entries: &[CandidateEntry]) -> usize {
    entries.iter().map(|e| e.key.width()).max().unwrap_or(0)
}
