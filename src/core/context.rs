use std::path::{Path, PathBuf};

use super::{
    reporter::{Reporter, Verbosity},
    scanner::MatchedKeys,
    walker::IgnoreList,
};

/// Options for one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub verbosity: Verbosity,
    /// Where scanning starts. A leading separator makes it relative to the
    /// project root; anything else is relative to the root's parent.
    pub from: String,
    pub recursive: bool,
    /// Remove dictionary keys no longer referenced in source.
    pub delete: bool,
    /// Compute and report changes without writing dictionaries.
    pub dry_run: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::NORMAL,
            from: "/".to_string(),
            recursive: true,
            delete: false,
            dry_run: false,
        }
    }
}

/// State owned by a single run.
///
/// Built fresh for every run and passed to each stage, so repeated or
/// concurrent runs never observe each other's discovered keys or depth.
#[derive(Debug)]
pub struct RunContext {
    pub project_root: PathBuf,
    pub lang_dir: PathBuf,
    pub options: ParseOptions,
    pub ignores: IgnoreList,
    pub matched: MatchedKeys,
    pub reporter: Reporter,
    pub files_scanned: usize,
}

impl RunContext {
    pub fn new(
        project_root: &Path,
        lang_dir: &Path,
        options: ParseOptions,
        ignores: IgnoreList,
        reporter: Reporter,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            lang_dir: lang_dir.to_path_buf(),
            options,
            ignores,
            matched: MatchedKeys::new(),
            reporter,
            files_scanned: 0,
        }
    }

    /// Directory the walk starts from, resolved from `options.from`.
    pub fn scan_root(&self) -> PathBuf {
        resolve_from(&self.project_root, &self.options.from)
    }
}

fn resolve_from(project_root: &Path, from: &str) -> PathBuf {
    let is_separator = |c: char| c == '/' || c == std::path::MAIN_SEPARATOR;
    if from.starts_with(is_separator) {
        let relative = from.trim_start_matches(is_separator);
        if relative.is_empty() {
            project_root.to_path_buf()
        } else {
            project_root.join(relative)
        }
    } else {
        project_root
            .parent()
            .unwrap_or(project_root)
            .join(from)
    }
}
