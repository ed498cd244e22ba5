//! Translation key extraction from the source tree.
//!
//! Finds every `'key'.tr(` / `"key".tr(` call in the Dart sources. The
//! matcher is a regex over the raw file text, not a Dart parser: it accepts a
//! quoted run of ASCII word characters immediately followed by `.tr(` and
//! ignores everything after the opening parenthesis. Keys containing
//! characters outside `[A-Za-z0-9_]` never match.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::{fs, io};

use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

static TR_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([0-9A-Za-z_]+)['"]\.tr\("#).unwrap());

/// Result of scanning a source tree for translation keys.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every key referenced anywhere in the tree. Duplicates across files
    /// collapse; visitation order cannot affect the result.
    pub keys: HashSet<String>,
    /// Number of source files scanned.
    pub files_scanned: usize,
    /// Files or directory entries skipped because they could not be read.
    pub skipped_count: usize,
}

/// Extract translation keys from a single source string.
pub fn extract_from_str(content: &str) -> HashSet<String> {
    TR_CALL_REGEX
        .captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Scan `root` recursively and extract keys from every file carrying
/// `extension`, skipping paths matched by `ignore_patterns`.
///
/// Unreadable files contribute zero keys and are counted as skipped; the scan
/// never aborts on a single bad file. Per-file extraction runs in parallel.
pub fn extract_keys(
    root: &Path,
    extension: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut glob_patterns = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if glob_patterns
            .iter()
            .any(|p| p.matches(&path.to_string_lossy()))
        {
            continue;
        }

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path.to_path_buf());
        }
    }

    let outcomes: Vec<Result<HashSet<String>, (PathBuf, io::Error)>> = files
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(content) => Ok(extract_from_str(&content)),
            Err(e) => Err((path.clone(), e)),
        })
        .collect();

    let mut keys = HashSet::new();
    let mut files_scanned = 0;
    for outcome in outcomes {
        match outcome {
            Ok(file_keys) => {
                files_scanned += 1;
                keys.extend(file_keys);
            }
            Err((path, e)) => {
                skipped_count += 1;
                eprintln!(
                    "{} Cannot read {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    e
                );
            }
        }
    }

    ScanResult {
        keys,
        files_scanned,
        skipped_count,
    }
}
