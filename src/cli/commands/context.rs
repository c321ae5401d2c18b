use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::{BundleCatalog, CandidateStore, Locale};

/// Configuration merged with command line overrides.
pub struct CommandContext {
    pub config: Config,
    pub messages_root: PathBuf,
    pub candidate_file: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(&cwd, args)
    }

    pub fn from_dir(dir: &Path, args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(dir)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let messages_root = args
            .messages_root
            .clone()
            .unwrap_or_else(|| dir.join(&config.messages_root));
        let candidate_file = args
            .candidate_file
            .clone()
            .unwrap_or_else(|| dir.join(&config.candidate_file));

        Ok(Self {
            config,
            messages_root,
            candidate_file,
            verbose: args.verbose,
        })
    }

    pub fn locale(&self, requested: Option<&str>) -> Locale {
        Locale::new(requested.unwrap_or(&self.config.default_locale))
    }

    /// Load the message catalogs, printing a warning per unreadable bundle.
    pub fn load_catalog(&self) -> Result<BundleCatalog> {
        let result = BundleCatalog::load(&self.messages_root, &self.config.bundle_name)?;
        for warning in &result.warnings {
            eprintln!(
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
        Ok(result.catalog)
    }

    pub fn candidate_store(&self) -> CandidateStore {
        CandidateStore::new(&self.candidate_file)
    }
}
