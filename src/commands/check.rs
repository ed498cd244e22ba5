//! The `check` command: extract used keys and compare against every locale.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::{CheckSummary, CommandResult, CommandSummary, LocaleCheck};
use crate::cli::args::CheckCommand;
use crate::config::{Config, load_config};
use crate::dictionary::Dictionary;
use crate::extractor::extract_keys;
use crate::reconcile::missing_keys;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let mut config = load_config(Path::new("."))?.config;
    apply_overrides(&mut config, &cmd);

    let source_root = Path::new(&config.source_root);
    if !source_root.is_dir() {
        bail!("Source root not found: {}", source_root.display());
    }

    let scan = extract_keys(
        source_root,
        &config.source_extension,
        &config.ignores,
        cmd.args.common.verbose,
    );

    let translations_root = Path::new(&config.translations_root);
    let dictionary_paths = list_dictionaries(translations_root)?;

    // Fail-soft per dictionary: a broken locale file degrades to an empty
    // comparison so the remaining locales still get checked.
    let locales = dictionary_paths
        .iter()
        .map(|path| match Dictionary::load(path) {
            Ok(dict) => LocaleCheck {
                name: dict.file_name(),
                key_count: Some(dict.len()),
                missing: missing_keys(&scan.keys, &dict),
                load_error: None,
            },
            Err(err) => LocaleCheck {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                key_count: None,
                missing: Vec::new(),
                load_error: Some(format!("{:#}", err)),
            },
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            files_scanned: scan.files_scanned,
            skipped_count: scan.skipped_count,
            used_key_count: scan.keys.len(),
            locales,
        }),
        error_count: 0,
        exit_on_errors: false,
    })
}

fn apply_overrides(config: &mut Config, cmd: &CheckCommand) {
    let common = &cmd.args.common;
    if let Some(source_root) = &common.source_root {
        config.source_root = source_root.display().to_string();
    }
    if let Some(translations_root) = &common.translations_root {
        config.translations_root = translations_root.display().to_string();
    }
    if let Some(primary_locale) = &common.primary_locale {
        config.primary_locale = primary_locale.clone();
    }
}

/// Every `*.json` directly under the translations root, in file-name order.
fn list_dictionaries(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Translations root not found: {}", root.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
        })
        .collect();
    paths.sort();
    Ok(paths)
}
