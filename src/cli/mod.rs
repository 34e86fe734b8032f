//! Text shell over the scenario controller: one command per UI entry point
//! plus read-only views of the current snapshot.

pub mod commands;
pub mod core;
pub mod output;
pub mod render;
mod shell;

pub use self::core::{CliError, CliMode, CliOptions, CommandError, ShellContext};
pub use shell::run_cli;
