//! Report formatting and printing utilities.
//!
//! Separate from the command handlers so output can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;

use crate::commands::{
    CheckSummary, CommandResult, CommandSummary, DiffSummary, InitSummary, NormalizeSummary,
    PatchSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::dictionary::to_pretty_string;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Diff(summary) => print_diff(summary, writer),
        CommandSummary::Patch(summary) => print_patch(summary, writer),
        CommandSummary::Normalize(summary) => print_normalize(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_check<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} source {}, found {} translation {}",
        summary.files_scanned,
        if summary.files_scanned == 1 {
            "file"
        } else {
            "files"
        },
        summary.used_key_count,
        if summary.used_key_count == 1 {
            "key"
        } else {
            "keys"
        }
    );

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read during the scan",
            "warning:".bold().yellow(),
            summary.skipped_count
        );
    }

    for locale in &summary.locales {
        if let Some(err) = &locale.load_error {
            let _ = writeln!(
                writer,
                "{} {} could not be loaded, treated as empty: {}",
                "warning:".bold().yellow(),
                locale.name,
                err
            );
            continue;
        }

        let key_count = locale.key_count.unwrap_or(0);
        if locale.missing.is_empty() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{}: {} keys, no missing keys", locale.name, key_count).green()
            );
        } else {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!(
                    "{}: {} keys, {} missing {}:",
                    locale.name,
                    key_count,
                    locale.missing.len(),
                    if locale.missing.len() == 1 {
                        "key"
                    } else {
                        "keys"
                    }
                )
                .red()
            );
            print_key_list(&locale.missing, writer);
        }
    }
}

fn print_diff<W: Write>(summary: &DiffSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {} keys",
        summary.reference_name, summary.reference_key_count
    );
    let _ = writeln!(
        writer,
        "{}: {} keys",
        summary.target_name, summary.target_key_count
    );
    let _ = writeln!(writer);

    print_direction(
        &summary.missing_in_target,
        &summary.target_name,
        writer,
    );
    print_direction(
        &summary.missing_in_reference,
        &summary.reference_name,
        writer,
    );
}

fn print_direction<W: Write>(missing: &[String], name: &str, writer: &mut W) {
    if missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("no keys missing in {}", name).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} {} missing in {}:",
                missing.len(),
                if missing.len() == 1 { "key" } else { "keys" },
                name
            )
            .red()
        );
        print_key_list(missing, writer);
    }
}

fn print_patch<W: Write>(summary: &PatchSummary, writer: &mut W) {
    if summary.patch.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} is not missing any keys from {}",
                summary.target_name, summary.reference_name
            )
            .green()
        );
        return;
    }

    match &summary.written_to {
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} keys missing in {} (patch written to {})",
                summary.patch.len(),
                summary.target_name,
                path.display()
            );
        }
        None => {
            if let Ok(json) = to_pretty_string(&summary.patch) {
                let _ = write!(writer, "{}", json);
            }
            let _ = writeln!(
                writer,
                "{} keys missing in {} (values copied from {}, review before merging)",
                summary.patch.len(),
                summary.target_name,
                summary.reference_name
            );
        }
    }
}

fn print_normalize<W: Write>(summary: &NormalizeSummary, writer: &mut W) {
    for path in &summary.normalized {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Normalized {}", path.display()).green()
        );
    }
    for (path, err) in &summary.failures {
        let _ = writeln!(
            writer,
            "{} could not normalize {}: {}",
            "error:".bold().red(),
            path.display(),
            err
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_key_list<W: Write>(keys: &[String], writer: &mut W) {
    for key in keys {
        let _ = writeln!(writer, "  - {}", key);
    }
}
