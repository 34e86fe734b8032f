use crate::cli::core::{CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::output;

use super::{find, COMMANDS};

pub(crate) fn cmd_help(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = find(name).ok_or_else(|| {
            CommandError::InvalidArguments(format!("no help for unknown command `{name}`"))
        })?;
        output::section(entry.name);
        output::info(entry.description);
        output::info(format!("usage: {}", entry.usage));
        return Ok(LoopControl::Continue);
    }

    output::section("Commands");
    let width = COMMANDS
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or_default();
    let lines: Vec<String> = COMMANDS
        .iter()
        .map(|entry| format!("  {:<width$}  {}", entry.name, entry.description))
        .collect();
    output::lines(&lines);
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}
