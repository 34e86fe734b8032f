//! Shell context, command dispatch and CLI error types.

use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::ConfigManager,
    core::scenario::ScenarioController,
    errors::StoryError,
    ledger::Ledger,
    storage::{CsvLedgerSource, LedgerSource},
};

use super::{commands, output, render};

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] StoryError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure of a single command; reported and the loop keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{command}`")]
    UnknownCommand {
        command: String,
        suggestion: Option<&'static str>,
    },
    #[error(transparent)]
    Core(#[from] StoryError),
}

pub type CommandResult = Result<LoopControl, CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Command-line arguments of `finance_story_cli`.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub ledger: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl CliOptions {
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--ledger" | "-l" => &mut options.ledger,
                "--config" | "-c" => &mut options.config,
                other => return Err(CliError::Input(format!("unexpected argument `{other}`"))),
            };
            let value = args
                .next()
                .ok_or_else(|| CliError::Input(format!("`{arg}` expects a path")))?;
            *slot = Some(PathBuf::from(value));
        }
        Ok(options)
    }
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    pub(crate) last_command: Option<String>,
    pub(crate) controller: ScenarioController,
}

impl ShellContext {
    pub fn new(mode: CliMode, options: &CliOptions) -> Result<Self, CliError> {
        let config_manager = match &options.config {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new(),
        };
        let config = config_manager.load()?;

        let ledger = match &options.ledger {
            Some(path) => CsvLedgerSource::new(path).load()?,
            None => {
                output::warning("No ledger given (use --ledger <file.csv>); starting empty.");
                Ledger::default()
            }
        };

        let controller = ScenarioController::new(ledger, config)?;
        Ok(Self::with_controller(mode, controller))
    }

    pub fn with_controller(mode: CliMode, controller: ScenarioController) -> Self {
        if mode == CliMode::Script {
            output::set_plain(true);
        }
        Self {
            mode,
            running: true,
            last_command: None,
            controller,
        }
    }

    pub fn controller(&self) -> &ScenarioController {
        &self.controller
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        commands::COMMANDS.iter().map(|entry| entry.name).collect()
    }

    pub fn prompt(&self) -> String {
        let params = self.controller.parameters();
        let travel = if !params.travel_included {
            "removed"
        } else if params.split_travel {
            "split"
        } else {
            "included"
        };
        format!(
            "finance-story [{} | travel {}]> ",
            render::percent(params.savings_rate),
            travel
        )
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match commands::find(command) {
            Some(entry) => (entry.handler)(self, args),
            None => Err(CommandError::UnknownCommand {
                command: command.to_string(),
                suggestion: suggest_command(command),
            }),
        }
    }

    /// Prefix naming the rejected line; script mode only.
    pub(crate) fn error_context(&self) -> Option<String> {
        match (self.mode, &self.last_command) {
            (CliMode::Script, Some(command)) => Some(format!("`{command}`: ")),
            _ => None,
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        let prefix = self.error_context().unwrap_or_default();
        match err {
            CommandError::UnknownCommand {
                command,
                suggestion,
            } => {
                output::error(format!("{prefix}Unknown command `{command}`."));
                match suggestion {
                    Some(name) => output::hint(format!("Did you mean `{name}`?")),
                    None => output::hint("Type `help` to list commands."),
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(format!("{prefix}{message}"));
                output::hint("Type `help` for usage details.");
            }
            CommandError::Core(StoryError::UnknownPreset { name, suggestion }) => {
                output::error(format!("{prefix}Unknown preset `{name}`."));
                match suggestion {
                    Some(known) => output::hint(format!("Did you mean `{known}`?")),
                    None => output::hint(format!("Presets: {}", commands::preset_names())),
                }
            }
            CommandError::Core(err) => output::error(format!("{prefix}{err}")),
        }
    }
}

fn suggest_command(input: &str) -> Option<&'static str> {
    commands::COMMANDS
        .iter()
        .map(|entry| (entry.name, levenshtein(entry.name, input)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}
