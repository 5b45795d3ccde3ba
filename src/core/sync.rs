//! A synchronization run: scan the source tree, then reconcile every target
//! dictionary with the keys found.
//!
//! Stages run strictly in sequence. The walk completes before any dictionary
//! is touched, dictionaries are processed one at a time, and the first error
//! aborts the run, leaving files not yet reached untouched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    context::RunContext,
    dictionary::{Dictionary, MergeOutcome, dictionary_path, language_of, list_dictionaries},
    scanner::scan_content,
    walker::{SourceWalker, WalkEntry},
};

/// What happened to one dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySync {
    pub path: PathBuf,
    pub language: String,
    pub outcome: MergeOutcome,
    /// False for dry runs.
    pub written: bool,
}

/// Result of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub files_scanned: usize,
    pub keys_found: usize,
    pub dictionaries: Vec<DictionarySync>,
}

impl SyncSummary {
    pub fn added_count(&self) -> usize {
        self.dictionaries.iter().map(|d| d.outcome.added.len()).sum()
    }

    pub fn deleted_count(&self) -> usize {
        self.dictionaries.iter().map(|d| d.outcome.deleted.len()).sum()
    }
}

/// Run the whole pipeline against `target_language`, or against every
/// dictionary in the language directory when `None`.
pub fn synchronize(ctx: &mut RunContext, target_language: Option<&str>) -> Result<SyncSummary> {
    scan_sources(ctx)?;

    let targets = match target_language {
        Some(language) => vec![dictionary_path(&ctx.lang_dir, language)],
        None => list_dictionaries(&ctx.lang_dir)?,
    };

    let mut summary = SyncSummary {
        files_scanned: ctx.files_scanned,
        keys_found: ctx.matched.len(),
        dictionaries: Vec::with_capacity(targets.len()),
    };
    for path in targets {
        summary.dictionaries.push(sync_dictionary(ctx, &path)?);
    }

    Ok(summary)
}

/// Walk the source tree and collect every referenced key into `ctx.matched`.
pub fn scan_sources(ctx: &mut RunContext) -> Result<()> {
    let start = ctx.scan_root();
    ctx.reporter
        .report(&[2, 3], format!("Scanning {}", start.display()));

    let walker = SourceWalker::new(
        &ctx.project_root,
        &start,
        ctx.ignores.clone(),
        ctx.options.recursive,
    );
    for entry in walker {
        let entry = entry?;
        ctx.reporter.set_depth(entry.depth());
        match entry {
            WalkEntry::Directory { rel_path, depth } => {
                if depth > 0 {
                    ctx.reporter.report_nested(&[3], format!("{rel_path}/"));
                }
            }
            WalkEntry::Ignored { rel_path, .. } => {
                ctx.reporter
                    .report_nested(&[2, 3], format!("{rel_path}/ (ignored)"));
            }
            WalkEntry::File { path, rel_path, .. } => {
                scan_file(ctx, &path, &rel_path)?;
            }
        }
    }
    ctx.reporter.set_depth(0);

    Ok(())
}

fn scan_file(ctx: &mut RunContext, path: &Path, rel_path: &str) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);
    ctx.files_scanned += 1;

    let scan = scan_content(&content, rel_path, &mut ctx.matched);
    if scan.new_tokens.is_empty() {
        ctx.reporter.report_nested(&[3], rel_path);
    } else {
        ctx.reporter.report_nested(
            &[2, 3],
            format!("{rel_path} ({} new)", scan.new_tokens.len()),
        );
    }

    ctx.reporter.descend();
    for token in &scan.occurrences {
        ctx.reporter.report_nested(&[3], format!("\"{token}\""));
    }
    ctx.reporter.ascend();

    Ok(())
}

/// Load, merge and (unless dry-running) rewrite one dictionary.
pub fn sync_dictionary(ctx: &mut RunContext, path: &Path) -> Result<DictionarySync> {
    let mut dictionary = Dictionary::load(path)?;
    let display = path.strip_prefix(&ctx.project_root).unwrap_or(path);

    ctx.reporter.set_depth(0);
    ctx.reporter
        .report(&[1, 2, 3], format!("Synchronizing {}", display.display()));

    let outcome = dictionary.merge(&ctx.matched, ctx.options.delete);

    ctx.reporter.descend();
    for added in &outcome.added {
        ctx.reporter
            .report_nested(&[1], format!("+ \"{}\"", added.token));
        ctx.reporter.report_nested(
            &[2, 3],
            format!("+ \"{}\" (from {})", added.token, added.source_path),
        );
    }
    for token in &outcome.deleted {
        ctx.reporter.report_nested(&[1, 2, 3], format!("- \"{token}\""));
    }
    if outcome.is_unchanged() {
        ctx.reporter.report_nested(&[1, 2, 3], "nothing to do");
    }
    ctx.reporter.ascend();

    let written = !ctx.options.dry_run;
    if written {
        dictionary.save()?;
    }

    Ok(DictionarySync {
        path: path.to_path_buf(),
        language: language_of(path).unwrap_or_default().to_string(),
        outcome,
        written,
    })
}
