//! The `diff` command: directed key differences between two dictionaries.

use anyhow::Result;

use super::{CommandResult, CommandSummary, DiffSummary};
use crate::cli::args::DiffCommand;
use crate::dictionary::Dictionary;
use crate::reconcile::diff_dictionaries;

pub fn diff(cmd: DiffCommand) -> Result<CommandResult> {
    let reference = Dictionary::load(&cmd.args.reference)?;
    let target = Dictionary::load(&cmd.args.target)?;

    let result = diff_dictionaries(&reference, &target);

    Ok(CommandResult {
        summary: CommandSummary::Diff(DiffSummary {
            reference_name: reference.file_name(),
            reference_key_count: reference.len(),
            target_name: target.file_name(),
            target_key_count: target.len(),
            missing_in_target: result.missing_in_target,
            missing_in_reference: result.missing_in_reference,
        }),
        error_count: 0,
        exit_on_errors: false,
    })
}
