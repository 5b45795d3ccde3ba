//! Runtime key lookup over the dictionaries present on disk.

use std::{collections::HashMap, path::Path};

use anyhow::Result;

use super::dictionary::{Dictionary, language_of, list_dictionaries};

/// Marks `key` as translatable for the scanner. Returns it unchanged.
pub fn marker(key: &str) -> &str {
    key
}

/// Loaded dictionaries plus the language used when a requested language has
/// none.
#[derive(Debug, Clone, Default)]
pub struct ResolutionTable {
    default_language: String,
    dictionaries: HashMap<String, Dictionary>,
}

impl ResolutionTable {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            dictionaries: HashMap::new(),
        }
    }

    /// Load every dictionary in `lang_dir`. A missing directory loads nothing.
    pub fn load(lang_dir: &Path, default_language: impl Into<String>) -> Result<Self> {
        let mut table = Self::new(default_language);
        if !lang_dir.is_dir() {
            return Ok(table);
        }
        for path in list_dictionaries(lang_dir)? {
            let dictionary = Dictionary::load(&path)?;
            if let Some(language) = language_of(&path) {
                table.dictionaries.insert(language.to_string(), dictionary);
            }
        }
        Ok(table)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.dictionaries.contains_key(language)
    }

    /// Text for `key` in `language`.
    ///
    /// The default language is only consulted when `language` has no
    /// dictionary at all. Within a loaded dictionary, a missing or empty
    /// entry resolves to the key itself.
    pub fn resolve<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        let dictionary = self
            .dictionaries
            .get(language)
            .or_else(|| self.dictionaries.get(&self.default_language));

        dictionary
            .and_then(|dict| dict.get(key))
            .filter(|text| !text.is_empty())
            .unwrap_or(key)
    }
}
