//! Command dispatch for the trlint CLI.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use crate::commands::{CommandResult, CommandSummary, InitSummary};
use crate::commands::{check::check, diff::diff, normalize::normalize, patch::patch};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Diff(cmd)) => diff(cmd),
        Some(Command::Patch(cmd)) => patch(cmd),
        Some(Command::Normalize(cmd)) => normalize(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                error_count: 0,
                exit_on_errors: true,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
