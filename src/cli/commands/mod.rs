pub mod report;
pub mod scenario;
pub mod system;

use crate::cli::core::{CommandResult, ShellContext};
use crate::core::scenario::Preset;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone, Copy)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub static COMMANDS: &[CommandDefinition] = &[
    CommandDefinition::new(
        "rate",
        "Set the projected savings rate",
        "rate <percent>",
        scenario::cmd_rate,
    ),
    CommandDefinition::new(
        "preset",
        "Apply a named scenario preset",
        "preset <aggressive|conservative|remove-travel|split-travel|reset>",
        scenario::cmd_preset,
    ),
    CommandDefinition::new(
        "toggle-travel",
        "Include or remove the travel expense",
        "toggle-travel",
        scenario::cmd_toggle_travel,
    ),
    CommandDefinition::new(
        "show",
        "Summarize the current scenario",
        "show",
        report::cmd_show,
    ),
    CommandDefinition::new(
        "balance",
        "List the checking balance series",
        "balance",
        report::cmd_balance,
    ),
    CommandDefinition::new(
        "savings",
        "List projected and recorded savings",
        "savings",
        report::cmd_savings,
    ),
    CommandDefinition::new(
        "spending",
        "Show the monthly spending breakdown",
        "spending",
        report::cmd_spending,
    ),
    CommandDefinition::new(
        "export",
        "Write the current snapshot as JSON",
        "export <path>",
        report::cmd_export,
    ),
    CommandDefinition::new(
        "help",
        "Show available commands",
        "help [command]",
        system::cmd_help,
    ),
    CommandDefinition::new("exit", "Exit the shell", "exit", system::cmd_exit),
];

pub fn find(name: &str) -> Option<&'static CommandDefinition> {
    let name = name.to_ascii_lowercase();
    let name = match name.as_str() {
        "quit" => "exit",
        "?" => "help",
        other => other,
    };
    COMMANDS.iter().find(|entry| entry.name == name)
}

pub(crate) fn preset_names() -> String {
    Preset::ALL
        .iter()
        .map(Preset::name)
        .collect::<Vec<_>>()
        .join(", ")
}
