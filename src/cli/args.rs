//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Translate a JSON document against the message catalogs
//! - `extract`: Record untranslated CJK text from JSON documents as candidates
//! - `pending`: List candidates the catalog for a locale does not cover yet
//! - `init`: Initialize autoglot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Pending(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Candidate store file (overrides config file)
    #[arg(long)]
    pub candidate_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// JSON document to translate, or `-` for stdin
    pub input: PathBuf,

    /// Target locale, e.g. en_US (defaults to config `defaultLocale`)
    #[arg(short, long, env = "AUTOGLOT_LOCALE")]
    pub locale: Option<String>,

    /// Write the translated document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// JSON files, or directories searched recursively for `*.json`
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PendingCommand {
    /// Locale whose catalog is compared (defaults to config `defaultLocale`)
    #[arg(short, long, env = "AUTOGLOT_LOCALE")]
    pub locale: Option<String>,

    /// Write pending entries as `key=value` lines to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate text values of a JSON document using the message catalogs
    Translate(TranslateCommand),
    /// Record CJK text from JSON documents in the candidate store
    Extract(ExtractCommand),
    /// List candidate entries missing from a locale's catalog
    Pending(PendingCommand),
    /// Initialize a new .autoglotrc.json configuration file
    Init,
}
