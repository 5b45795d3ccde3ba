use anyhow::Result;

use super::{CommandResult, CommandSummary, LookupSummary, Project};
use crate::{cli::args::LookupCommand, core::ResolutionTable};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let project = Project::load(&cmd.common)?;
    let table = ResolutionTable::load(&project.lang_dir, &project.config.default_language)?;

    let language = cmd
        .lang
        .unwrap_or_else(|| table.default_language().to_string());
    let text = table.resolve(&cmd.key, &language).to_string();

    Ok(CommandResult::success(CommandSummary::Lookup(LookupSummary { text })))
}
