pub mod init;
pub mod lookup;
pub mod sync;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::CommonArgs, exit_status::ExitStatus};
use crate::{
    config::{Config, load_config},
    core::SyncSummary,
};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncReport),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncReport {
    pub summary: SyncSummary,
    /// Nothing is printed after the run at verbosity 0.
    pub quiet: bool,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub created: bool,
}

/// Result of running a langsync command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }
}

/// Project root and configuration resolved from common arguments.
pub(crate) struct Project {
    pub root: PathBuf,
    pub lang_dir: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let root = canonical_root(&args.root)?;
        let mut config = load_config(&root)?.config;
        if let Some(lang_dir) = &args.lang_dir {
            config.lang_dir = lang_dir.clone();
        }
        let lang_dir = config.lang_dir_in(&root);

        Ok(Self {
            root,
            lang_dir,
            config,
        })
    }
}

pub(crate) fn canonical_root(root: &Path) -> Result<PathBuf> {
    fs::canonicalize(root)
        .with_context(|| format!("Project root not found: {}", root.display()))
}
