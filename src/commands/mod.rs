//! One handler per subcommand.
//!
//! Each handler does the file work and returns a [`CommandResult`]; printing
//! happens afterwards in `cli::report` so the handlers stay testable.

use std::path::PathBuf;

use serde_json::{Map, Value};

pub mod check;
pub mod diff;
pub mod normalize;
pub mod patch;

/// Outcome of running a command, carried to the reporter and exit code.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of unrecoverable per-input failures (e.g. files `normalize`
    /// could not rewrite). Fail-soft diagnostics do not count.
    pub error_count: usize,
    pub exit_on_errors: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Diff(DiffSummary),
    Patch(PatchSummary),
    Normalize(NormalizeSummary),
    Init(InitSummary),
}

/// Result of `trlint check`: used keys vs. every locale dictionary.
#[derive(Debug)]
pub struct CheckSummary {
    pub files_scanned: usize,
    pub skipped_count: usize,
    pub used_key_count: usize,
    pub locales: Vec<LocaleCheck>,
}

/// Per-dictionary outcome within a check run.
#[derive(Debug)]
pub struct LocaleCheck {
    /// Dictionary file name, e.g. `en.json`.
    pub name: String,
    /// Number of keys in the dictionary, when it loaded.
    pub key_count: Option<usize>,
    /// Used keys absent from this dictionary, sorted. Empty when the
    /// dictionary failed to load (fail-soft: its key set is unknown).
    pub missing: Vec<String>,
    /// Load diagnostic, when the dictionary could not be parsed.
    pub load_error: Option<String>,
}

/// Result of `trlint diff`: directed differences between two dictionaries.
#[derive(Debug)]
pub struct DiffSummary {
    pub reference_name: String,
    pub reference_key_count: usize,
    pub target_name: String,
    pub target_key_count: usize,
    pub missing_in_target: Vec<String>,
    pub missing_in_reference: Vec<String>,
}

/// Result of `trlint patch`: the generated patch mapping.
#[derive(Debug)]
pub struct PatchSummary {
    pub reference_name: String,
    pub target_name: String,
    pub patch: Map<String, Value>,
    /// Where the patch file was written, if `--output` was given.
    pub written_to: Option<PathBuf>,
}

/// Result of `trlint normalize`.
#[derive(Debug)]
pub struct NormalizeSummary {
    pub normalized: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}
