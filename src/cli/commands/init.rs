use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, canonical_root};
use crate::{
    cli::{args::InitCommand, exit_status::ExitStatus},
    config::{CONFIG_FILE_NAME, default_config_json},
};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = canonical_root(&cmd.root)?.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                path: config_path,
                created: false,
            }),
            status: ExitStatus::Failure,
        });
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;

    Ok(CommandResult::success(CommandSummary::Init(InitSummary {
        path: config_path,
        created: true,
    })))
}
