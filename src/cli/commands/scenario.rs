use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cli::core::{CommandError, CommandResult, LoopControl, ShellContext};
use crate::cli::{output, render};
use crate::core::scenario::ScenarioSnapshot;

/// `rate 20` or `rate 12.5` sets the rate in percent.
pub(crate) fn cmd_rate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: rate <percent>".into(),
        ));
    };
    let percent = Decimal::from_str(raw.trim_end_matches('%')).map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a percentage"))
    })?;
    let snapshot = context
        .controller
        .set_savings_rate(percent / Decimal::ONE_HUNDRED)?;
    report_transition(snapshot);
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_preset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: preset <{}>",
            super::preset_names().replace(", ", "|")
        )));
    };
    let snapshot = context.controller.apply_preset(name)?;
    report_transition(snapshot);
    Ok(LoopControl::Continue)
}

pub(crate) fn cmd_toggle_travel(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "toggle-travel takes no arguments".into(),
        ));
    }
    let snapshot = context.controller.toggle_travel_included()?;
    report_transition(snapshot);
    Ok(LoopControl::Continue)
}

fn report_transition(snapshot: &ScenarioSnapshot) {
    let params = snapshot.parameters;
    output::success(format!(
        "Scenario updated: savings {}, travel {}{}.",
        render::percent(params.savings_rate),
        if params.travel_included { "included" } else { "removed" },
        if params.split_travel { " (split)" } else { "" },
    ));
    for warning in &snapshot.warnings {
        output::warning(warning);
    }
}
