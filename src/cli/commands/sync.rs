use anyhow::Result;

use super::{CommandResult, CommandSummary, Project, SyncReport};
use crate::{
    cli::args::SyncCommand,
    core::{Reporter, RunContext, Verbosity, synchronize},
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let project = Project::load(&cmd.common)?;
    let options = cmd.parse_options();
    let verbosity = options.verbosity;
    let dry_run = options.dry_run;

    let mut ctx = RunContext::new(
        &project.root,
        &project.lang_dir,
        options,
        project.config.ignore_list(),
        Reporter::stdout(verbosity),
    );
    let summary = synchronize(&mut ctx, cmd.language.as_deref())?;

    Ok(CommandResult::success(CommandSummary::Sync(SyncReport {
        summary,
        quiet: verbosity == Verbosity::SILENT,
        dry_run,
    })))
}
