use std::{fs, path::Path};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::new(
            CommandSummary::Init(InitSummary { created: false }),
            ExitStatus::Failure,
        ));
    }

    fs::write(&config_path, default_config_json()? + "\n")?;
    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { created: true }),
        ExitStatus::Success,
    ))
}
