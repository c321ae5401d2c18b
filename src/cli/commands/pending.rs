use anyhow::Result;

use super::super::{args::PendingCommand, exit_status::ExitStatus};
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, PendingSummary};
use crate::core::{pending::write_properties, pending_entries};

pub fn pending(cmd: PendingCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = ctx.load_catalog()?;
    let locale = ctx.locale(cmd.locale.as_deref());

    let candidates = ctx.candidate_store().entries()?;
    let entries = pending_entries(&candidates, &catalog, &locale);

    if let Some(path) = &cmd.output {
        write_properties(path, &entries)?;
    }

    let status = if entries.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };

    Ok(CommandResult::new(
        CommandSummary::Pending(PendingSummary {
            locale,
            entries,
            output: cmd.output,
        }),
        status,
    ))
}
