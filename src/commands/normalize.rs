//! The `normalize` command: rewrite dictionaries with stable formatting.
//!
//! Load, then re-serialize through the in-memory map. A file that cannot be
//! parsed is left untouched and counted as a failure; remaining files are
//! still processed, and the run exits non-zero if anything failed.

use anyhow::Result;

use super::{CommandResult, CommandSummary, NormalizeSummary};
use crate::cli::args::NormalizeCommand;
use crate::dictionary::Dictionary;

pub fn normalize(cmd: NormalizeCommand) -> Result<CommandResult> {
    let mut normalized = Vec::new();
    let mut failures = Vec::new();

    for path in &cmd.args.files {
        match Dictionary::load(path).and_then(|dict| dict.save()) {
            Ok(()) => normalized.push(path.clone()),
            Err(err) => failures.push((path.clone(), format!("{:#}", err))),
        }
    }

    let error_count = failures.len();
    Ok(CommandResult {
        summary: CommandSummary::Normalize(NormalizeSummary {
            normalized,
            failures,
        }),
        error_count,
        exit_on_errors: true,
    })
}
