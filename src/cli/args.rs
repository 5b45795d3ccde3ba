//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Scan sources and reconcile language dictionaries
//! - `lookup`: Resolve a key against the dictionaries on disk
//! - `init`: Write a default `.langsyncrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{ParseOptions, Verbosity};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, env = "LANGSYNC_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Language directory, relative to the root (overrides config file)
    #[arg(long)]
    pub lang_dir: Option<String>,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only synchronize this language (default: every dictionary)
    pub language: Option<String>,

    /// Output detail, 0 (silent) to 3 (every token)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub verbosity: u8,

    /// Where to start scanning; a leading '/' is relative to the root,
    /// anything else to the root's parent
    #[arg(long, default_value = "/", allow_hyphen_values = true)]
    pub from: String,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Remove keys no longer referenced in source
    #[arg(long)]
    pub delete: bool,

    /// Report changes without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            verbosity: Verbosity::new(self.verbosity),
            from: self.from.clone(),
            recursive: !self.no_recursive,
            delete: self.delete,
            dry_run: self.dry_run,
        }
    }
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key to resolve
    pub key: String,

    /// Language to resolve in (default: the configured default language)
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config file into
    #[arg(long, env = "LANGSYNC_ROOT", default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add missing keys to language dictionaries (and optionally drop unused ones)
    Sync(SyncCommand),
    /// Print the text a key resolves to
    Lookup(LookupCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init(InitCommand),
}
