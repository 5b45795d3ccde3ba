//! Per-language JSON dictionaries on disk.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::scanner::MatchedKeys;

/// A flat key to text mapping backed by `<lang_dir>/<code>.json`.
///
/// Key order is preserved as read from disk.
#[derive(Debug, Clone)]
pub struct Dictionary {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl Dictionary {
    /// Load the dictionary at `path`. A missing file is an empty dictionary.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Self {
                    path: path.to_path_buf(),
                    entries: Map::new(),
                });
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read file: {}", path.display()));
            }
        };

        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse {}", path.display()))?;
        let Value::Object(entries) = value else {
            bail!("Cannot parse {}: root must be a JSON object", path.display());
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language code, taken from the file stem.
    pub fn language(&self) -> Option<&str> {
        language_of(&self.path)
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Text for `key`, if present and a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconcile the dictionary with the keys found in source.
    ///
    /// Keys absent from the dictionary are added with an empty value. A key
    /// that is present keeps its value, even when that value is empty. With
    /// `delete`, keys no longer referenced are dropped regardless of value.
    ///
    /// New keys come first in discovery order, followed by the retained keys
    /// in their original order.
    pub fn merge(&mut self, keys: &MatchedKeys, delete: bool) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        let mut merged = Map::new();

        for key in keys {
            if !self.entries.contains_key(&key.token) {
                merged.insert(key.token.clone(), Value::String(String::new()));
                outcome.added.push(AddedKey {
                    token: key.token.clone(),
                    source_path: key.source_path.clone(),
                });
            }
        }

        for (token, value) in std::mem::take(&mut self.entries) {
            if delete && !keys.contains(&token) {
                outcome.deleted.push(token);
                continue;
            }
            merged.insert(token, value);
        }

        self.entries = merged;
        outcome
    }

    /// Pretty-printed JSON with 2-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize JSON")?;
        Ok(format!("{content}\n"))
    }

    /// Overwrite the file in full.
    ///
    /// Content goes to a temporary file next to the target first and is then
    /// renamed over it, so a crash never leaves a truncated dictionary.
    /// A symlinked dictionary is written through to its target, and an
    /// existing file keeps its permissions.
    pub fn save(&self) -> Result<()> {
        let content = self.to_json_string()?;
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        }
        temp.persist(&target)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        Ok(())
    }
}

/// A key added by [`Dictionary::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedKey {
    pub token: String,
    pub source_path: String,
}

/// Changes made by one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: Vec<AddedKey>,
    pub deleted: Vec<String>,
}

impl MergeOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }
}

/// Language code for a dictionary path, e.g. `lang/pt-BR.json` -> `pt-BR`.
pub fn language_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Path of the dictionary for `language` inside `lang_dir`.
pub fn dictionary_path(lang_dir: &Path, language: &str) -> PathBuf {
    lang_dir.join(format!("{language}.json"))
}

/// Every non-hidden `*.json` file in `lang_dir`, sorted by name.
pub fn list_dictionaries(lang_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(lang_dir)
        .with_context(|| format!("Failed to read directory: {}", lang_dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", lang_dir.display()))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
        {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
