use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_EXCLUDED_FIELDS, TreeWalker};

pub const CONFIG_FILE_NAME: &str = ".autoglotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<bundleName>[_<locale>].properties` files.
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_bundle_name")]
    pub bundle_name: String,
    /// Locale used when a command is not given `--locale`.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Candidate store file that extraction appends to.
    #[serde(default = "default_candidate_file")]
    pub candidate_file: String,
    /// Fields copied untranslated, whatever their content.
    #[serde(default = "default_excluded_fields")]
    pub excluded_fields: Vec<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_bundle_name() -> String {
    "messages".to_string()
}

fn default_locale() -> String {
    "zh_CN".to_string()
}

fn default_candidate_file() -> String {
    "extracted-messages.txt".to_string()
}

fn default_excluded_fields() -> Vec<String> {
    DEFAULT_EXCLUDED_FIELDS.iter().map(|f| f.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            bundle_name: default_bundle_name(),
            default_locale: default_locale(),
            candidate_file: default_candidate_file(),
            excluded_fields: default_excluded_fields(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.bundle_name.trim().is_empty() {
            bail!("'bundleName' must not be empty");
        }
        if self.candidate_file.trim().is_empty() {
            bail!("'candidateFile' must not be empty");
        }
        if self.excluded_fields.iter().any(|f| f.is_empty()) {
            bail!("'excludedFields' must not contain empty field names");
        }
        Ok(())
    }

    pub fn tree_walker(&self) -> TreeWalker {
        TreeWalker::new(self.excluded_fields.iter().cloned())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
