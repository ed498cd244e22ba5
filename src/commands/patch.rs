//! The `patch` command: synthesize missing keys for a target dictionary.
//!
//! The patch copies values from the reference dictionary as placeholders and
//! is written next to the target (or printed), never merged into it. Merging
//! stays a manual review step.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, PatchSummary};
use crate::cli::args::PatchCommand;
use crate::config::load_config;
use crate::dictionary::{Dictionary, to_pretty_string};
use crate::reconcile::generate_patch;

pub fn patch(cmd: PatchCommand) -> Result<CommandResult> {
    let config = load_config(Path::new("."))?.config;

    let reference_path = cmd
        .args
        .reference
        .clone()
        .unwrap_or_else(|| config.primary_dictionary_path());

    let reference = Dictionary::load(&reference_path)?;
    let target = Dictionary::load(&cmd.args.target)?;

    let patch = generate_patch(&reference, &target);

    let written_to = match &cmd.args.output {
        Some(output) if !patch.is_empty() => {
            let content = to_pretty_string(&patch)?;
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(output, content)
                .with_context(|| format!("Failed to write file: {}", output.display()))?;
            Some(output.clone())
        }
        _ => None,
    };

    Ok(CommandResult {
        summary: CommandSummary::Patch(PatchSummary {
            reference_name: reference.file_name(),
            target_name: target.file_name(),
            patch,
            written_to,
        }),
        error_count: 0,
        exit_on_errors: false,
    })
}
