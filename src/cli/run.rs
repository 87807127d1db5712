use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, generate::generate, init::init},
    prompt::Prompter,
};

/// Dispatch a command.
///
/// `dir` is the working directory: config lookup starts there and `init`
/// writes into it.
///
/// # Returns
/// - `Ok(CommandResult)` for completed and aborted runs alike
/// - `Err` if the command fails (I/O error, invalid config, closed input)
pub fn run<R: BufRead, W: Write>(
    command: Command,
    dir: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<CommandResult> {
    match command {
        Command::Generate(cmd) => generate(cmd, dir, prompter),
        Command::Init => init(dir),
    }
}
