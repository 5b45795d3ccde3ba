//! Final command output.
//!
//! The engine traces through its own reporter while it runs; this module
//! only prints what a command produced once it has finished.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, LookupSummary, SyncReport};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Sync(report) => print_sync_to(report, &mut io::stdout().lock()),
        CommandSummary::Lookup(summary) => print_lookup_to(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) if summary.created => {
            print_init_to(summary, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stderr().lock()),
    }
}

pub fn print_sync_to<W: Write>(report: &SyncReport, writer: &mut W) {
    if report.quiet {
        return;
    }

    let summary = &report.summary;
    if summary.dictionaries.is_empty() {
        let _ = writeln!(
            writer,
            "{} No dictionaries to synchronize ({} {} scanned, {} {} found)",
            "warning:".bold().yellow(),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.keys_found,
            plural(summary.keys_found, "key", "keys"),
        );
        return;
    }

    let dictionaries = summary.dictionaries.len();
    let added = summary.added_count();
    let deleted = summary.deleted_count();

    let msg = if report.dry_run {
        format!(
            "Dry run: {} {} would be added, {} deleted across {} {} (no files written)",
            added,
            plural(added, "key", "keys"),
            deleted,
            dictionaries,
            plural(dictionaries, "dictionary", "dictionaries"),
        )
    } else {
        format!(
            "Synchronized {} {}: {} added, {} deleted ({} {} in {} source {})",
            dictionaries,
            plural(dictionaries, "dictionary", "dictionaries"),
            added,
            deleted,
            summary.keys_found,
            plural(summary.keys_found, "key", "keys"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
        )
    };

    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

pub fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
