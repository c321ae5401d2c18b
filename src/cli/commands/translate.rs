use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde_json::Value;

use super::super::{args::TranslateCommand, exit_status::ExitStatus};
use super::context::CommandContext;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::core::{Resolver, Translator};

const STDIN_PATH: &str = "-";

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = ctx.load_catalog()?;
    let locale = ctx.locale(cmd.locale.as_deref());

    let document = read_document(&cmd.input)?;
    let walker = ctx.config.tree_walker();
    let text_count = walker.transformable_leaf_count(&document);

    let translator = Translator::new(Resolver::new(&catalog), walker);
    let (translated, translated_count) = translator.translate_value_counted(document, &locale);

    let mut rendered = serde_json::to_string_pretty(&translated)?;
    rendered.push('\n');
    match &cmd.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write file: {}", path.display()))?,
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(CommandResult::new(
        CommandSummary::Translate(TranslateSummary {
            locale,
            text_count,
            translated_count,
            output: cmd.output,
        }),
        ExitStatus::Success,
    ))
}

fn read_document(input: &Path) -> Result<Value> {
    let content = if input.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read file: {}", input.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON input: {}", input.display()))
}
