//! Key set comparison and patch generation.
//!
//! All difference lists come back sorted so that output is stable across runs
//! and diffs cleanly under review.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::dictionary::Dictionary;

/// Keys used in code but absent from `dict`, sorted.
pub fn missing_keys(used: &HashSet<String>, dict: &Dictionary) -> Vec<String> {
    let mut missing: Vec<String> = used
        .iter()
        .filter(|key| !dict.contains_key(key))
        .cloned()
        .collect();
    missing.sort();
    missing
}

/// Directed key differences between two dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryDiff {
    /// Keys present in the reference but absent from the target, sorted.
    pub missing_in_target: Vec<String>,
    /// Keys present in the target but absent from the reference, sorted.
    pub missing_in_reference: Vec<String>,
}

/// Compare the key sets of two dictionaries in both directions.
pub fn diff_dictionaries(reference: &Dictionary, target: &Dictionary) -> DictionaryDiff {
    let reference_keys = reference.keys();
    let target_keys = target.keys();

    let mut missing_in_target: Vec<String> = reference_keys
        .difference(&target_keys)
        .map(|k| (*k).to_owned())
        .collect();
    missing_in_target.sort();

    let mut missing_in_reference: Vec<String> = target_keys
        .difference(&reference_keys)
        .map(|k| (*k).to_owned())
        .collect();
    missing_in_reference.sort();

    DictionaryDiff {
        missing_in_target,
        missing_in_reference,
    }
}

/// Build a patch mapping for `target`: every reference key it lacks, mapped to
/// the reference value as a placeholder.
///
/// The patch keeps the reference's key order and is meant for manual review
/// and merging; `target` itself is never touched. Merging the patch yields a
/// dictionary whose key set is `keys(target) ∪ keys(reference)`.
pub fn generate_patch(reference: &Dictionary, target: &Dictionary) -> Map<String, Value> {
    reference
        .entries()
        .iter()
        .filter(|(key, _)| !target.contains_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
