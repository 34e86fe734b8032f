use std::path::Path;

use crate::cli::core::{CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::{output, render};
use crate::storage::export_snapshot;

pub(crate) fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.controller.snapshot();
    output::section("Scenario");
    output::lines(&render::summary(snapshot));
    for warning in &snapshot.warnings {
        output::warning(warning);
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Checking balance");
    output::lines(&render::balance_table(context.controller.snapshot()));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_savings(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Cumulative savings");
    output::lines(&render::savings_table(context.controller.snapshot()));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_spending(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Monthly spending");
    output::lines(&render::spending_table(context.controller.snapshot()));
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: export <path>".into(),
        ));
    };
    export_snapshot(context.controller.snapshot(), Path::new(path))?;
    output::success(format!("Snapshot written to {path}."));
    Ok(LoopControl::Continue)
}
