use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, detect::detect, import::import, init::init,
        locales::locales, translate::translate,
    },
};

/// Dispatches parsed arguments to the matching command handler.
///
/// Returns `Err` when the command cannot run at all (config errors, an
/// unreadable catalog); issues found by a command are part of the result.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Detect(cmd)) => detect(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
