//! Depth-first enumeration of the source tree.
//!
//! Traversal is driven by [`walkdir`], whose iterator keeps an explicit stack
//! of open directories: a subdirectory is exhausted before the walk moves on
//! to the next sibling, and siblings are visited sorted by file name so that
//! first-seen attribution stays deterministic from one run to the next.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Root-relative prefixes that are never scanned.
pub const DEFAULT_IGNORES: &[&str] = &[
    "/uploads",
    "/migration",
    "/sql",
    "/config",
    "/datasets",
    "/logs",
];

/// Prefix-based exclusion rules, matched against root-relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `rel_path` starts with any ignored prefix.
    ///
    /// This is a plain string prefix test: `/config` also excludes
    /// `/configuration`.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| rel_path.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORES.iter().copied())
    }
}

/// One step of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// A directory the walk entered (or, when not recursive, merely listed).
    Directory { rel_path: String, depth: usize },
    /// A directory skipped together with its whole subtree.
    Ignored { rel_path: String, depth: usize },
    /// A regular file to scan.
    File {
        path: PathBuf,
        rel_path: String,
        depth: usize,
    },
}

impl WalkEntry {
    pub fn depth(&self) -> usize {
        match self {
            WalkEntry::Directory { depth, .. }
            | WalkEntry::Ignored { depth, .. }
            | WalkEntry::File { depth, .. } => *depth,
        }
    }

    pub fn rel_path(&self) -> &str {
        match self {
            WalkEntry::Directory { rel_path, .. }
            | WalkEntry::Ignored { rel_path, .. }
            | WalkEntry::File { rel_path, .. } => rel_path,
        }
    }
}

/// Lazily walks `start`, yielding entries in depth-first order.
///
/// Hidden entries are skipped silently, as are symbolic links: only regular
/// files and directories are visited. Directories whose root-relative path
/// matches `ignores`, `start` included, are reported once as
/// [`WalkEntry::Ignored`] and never listed. Without `recursive`,
/// subdirectories of `start` are reported but not descended into.
///
/// Listing failures are yielded as errors; callers are expected to stop at
/// the first one.
pub struct SourceWalker {
    inner: walkdir::IntoIter,
    project_root: PathBuf,
    start: PathBuf,
    ignores: IgnoreList,
}

impl SourceWalker {
    pub fn new(project_root: &Path, start: &Path, ignores: IgnoreList, recursive: bool) -> Self {
        let mut walk = WalkDir::new(start).sort_by_file_name();
        if !recursive {
            walk = walk.max_depth(1);
        }

        Self {
            inner: walk.into_iter(),
            project_root: project_root.to_path_buf(),
            start: start.to_path_buf(),
            ignores,
        }
    }

    /// Path of `path` relative to the project root, with a leading `/`.
    ///
    /// Starting points outside the project root are made relative to the
    /// walk start instead.
    fn rel_path(&self, path: &Path) -> String {
        let relative = path
            .strip_prefix(&self.project_root)
            .or_else(|_| path.strip_prefix(&self.start))
            .unwrap_or(path);

        let joined = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{joined}")
    }
}

impl Iterator for SourceWalker {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    return Some(
                        Err(err).with_context(|| format!("Failed to read directory: {path}")),
                    );
                }
            };

            let depth = entry.depth();
            let is_dir = entry.file_type().is_dir();

            if depth > 0 && is_hidden(entry.file_name()) {
                if is_dir {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            let rel_path = self.rel_path(entry.path());

            if is_dir {
                if self.ignores.matches(&rel_path) {
                    self.inner.skip_current_dir();
                    return Some(Ok(WalkEntry::Ignored { rel_path, depth }));
                }
                return Some(Ok(WalkEntry::Directory { rel_path, depth }));
            }

            if entry.file_type().is_file() {
                return Some(Ok(WalkEntry::File {
                    path: entry.into_path(),
                    rel_path,
                    depth,
                }));
            }
        }
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
