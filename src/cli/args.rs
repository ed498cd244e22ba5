//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan the source tree and report keys missing from each locale
//! - `diff`: Compare the key sets of two dictionary files
//! - `patch`: Generate a review-only patch of missing keys for a dictionary
//! - `normalize`: Rewrite dictionary files with stable formatting
//! - `init`: Initialize trlint configuration file

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
}

/// Common arguments shared by tree-wide commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Translations directory path (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct DiffArgs {
    /// Reference dictionary file
    pub reference: PathBuf,

    /// Target dictionary file to compare against the reference
    pub target: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DiffCommand {
    #[command(flatten)]
    pub args: DiffArgs,
}

#[derive(Debug, Parser)]
pub struct PatchArgs {
    /// Target dictionary file to generate missing keys for
    pub target: PathBuf,

    /// Reference dictionary file (default: the primary locale's dictionary)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Write the patch to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PatchCommand {
    #[command(flatten)]
    pub args: PatchArgs,
}

#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// Dictionary files to rewrite
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    #[command(flatten)]
    pub args: NormalizeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the source tree and report translation keys missing from each locale
    Check(CheckCommand),
    /// Compare the key sets of two translation dictionaries
    Diff(DiffCommand),
    /// Generate a patch of missing keys for a dictionary (never auto-merged)
    Patch(PatchCommand),
    /// Rewrite translation dictionaries with stable formatting
    Normalize(NormalizeCommand),
    /// Initialize a new .trlintrc.json configuration file
    Init,
}
