use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_IGNORES, IgnoreList};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<code>.json` dictionaries, relative to the project root.
    #[serde(default = "default_lang_dir")]
    pub lang_dir: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Root-relative path prefixes excluded from scanning.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_lang_dir() -> String {
    "lang".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_ignores() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_dir: default_lang_dir(),
            default_language: default_language(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Ignore entries are matched against root-relative paths, so each must
    /// start with `/`.
    pub fn validate(&self) -> Result<()> {
        for prefix in &self.ignores {
            if !prefix.starts_with('/') {
                bail!(
                    "Invalid entry in 'ignores': \"{}\" (must start with '/')",
                    prefix
                );
            }
        }

        if self.default_language.trim().is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }

        Ok(())
    }

    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(self.ignores.iter().cloned())
    }

    /// Absolute language directory for a project rooted at `root`.
    pub fn lang_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.lang_dir)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
