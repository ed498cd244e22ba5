//! Trlint - translation key checker for easy_localization
//!
//! Trlint is a CLI tool and library for keeping the translation assets of a
//! Flutter project using easy_localization in sync with the code. It extracts
//! `'key'.tr()` usages from the Dart source tree, compares the used keys
//! against the JSON locale dictionaries, generates review-only patches for
//! missing keys, and normalizes dictionary formatting.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and reporting)
//! - `commands`: One handler per subcommand (check, diff, patch, normalize)
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: Loading and stable serialization of locale dictionaries
//! - `extractor`: Translation key extraction from the source tree
//! - `reconcile`: Key set comparison and patch generation

pub mod cli;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod extractor;
pub mod reconcile;
