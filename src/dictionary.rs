//! Loading and stable serialization of locale dictionaries.
//!
//! A dictionary is a flat JSON object mapping translation keys to localized
//! strings (`assets/translations/en.json` and friends). Files are parsed with
//! insertion order preserved so that re-serializing is byte-stable, and
//! markdown code fences left behind by machine-translation tooling are
//! stripped before parsing.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

/// A locale dictionary loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct Dictionary {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl Dictionary {
    /// Load a dictionary from a JSON file.
    ///
    /// The root of the file must be a JSON object. Duplicate keys in the
    /// source collapse last-write-wins. Markdown code fences around the JSON
    /// body are tolerated and removed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let stripped = strip_code_fences(&content);
        let value: Value = serde_json::from_str(stripped)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        let entries = match value {
            Value::Object(map) => map,
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the backing file, used as the locale label in reports.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The key set of this dictionary.
    pub fn keys(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Rewrite the backing file with stable formatting.
    ///
    /// Uses 4-space indentation, preserves key order and non-ASCII characters,
    /// and adds a trailing newline. Normalizing twice in a row yields
    /// byte-identical output.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = to_pretty_string(&self.entries)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        Ok(())
    }
}

/// Serialize a key/value map with 4-space indentation and a trailing newline.
///
/// serde_json never escapes non-ASCII characters, so Arabic values survive
/// round-trips literally.
pub fn to_pretty_string(entries: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    buf.push(b'\n');
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}

/// Remove a markdown code fence wrapping the JSON body, if present.
///
/// Machine-translated dictionaries sometimes come back as
/// ```` ```json { ... } ``` ````; the fence lines carry no content.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return content;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").map_or(rest, str::trim_end)
}
