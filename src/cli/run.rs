use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, lookup::lookup, sync::sync},
};

/// Dispatch to the handler for the parsed command.
///
/// Returns `Err` if the command fails (unreadable source tree, malformed
/// dictionary or config, write failure).
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
