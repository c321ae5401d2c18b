use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;
use walkdir::WalkDir;

use super::super::{args::ExtractCommand, exit_status::ExitStatus};
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, ExtractSummary, InputFailure};
use crate::core::{ExtractionReport, Extractor};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let store = ctx.candidate_store();
    let extractor = Extractor::new(&store, ctx.config.tree_walker());

    let files = collect_inputs(&cmd.paths, ctx.verbose);

    // Files are processed in parallel; the store serializes its own appends.
    let results: Vec<(PathBuf, Result<ExtractionReport>)> = files
        .par_iter()
        .map(|path| (path.clone(), extract_file(&extractor, path)))
        .collect();

    let mut report = ExtractionReport::default();
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(file_report) => report.merge(file_report),
            Err(e) => failures.push(InputFailure {
                path,
                error: format!("{:#}", e),
            }),
        }
    }

    let status = if failures.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Error
    };

    Ok(CommandResult::new(
        CommandSummary::Extract(ExtractSummary {
            file_count: files.len(),
            report,
            store: store.path().to_path_buf(),
            failures,
        }),
        status,
    ))
}

fn extract_file(extractor: &Extractor<'_>, path: &Path) -> Result<ExtractionReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    extractor.try_extract(&document)
}

/// Expand inputs: files are kept as given, directories contribute their `*.json` files.
///
/// Directory entries are sorted so runs over the same tree visit files in a stable order.
pub fn collect_inputs(paths: &[PathBuf], verbose: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(path) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() && is_json_file(entry.path()) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        files.extend(found);
    }

    files
}

fn is_json_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
