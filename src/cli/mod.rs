use std::{env, io};

use anyhow::{Context, Result};

mod args;
pub mod commands;
mod exit_status;
mod prompt;
pub mod report;
mod run;

pub use args::{Arguments, Command, GenerateArgs, GenerateCommand};
pub use exit_status::ExitStatus;
pub use prompt::Prompter;
pub use run::run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    let cwd = env::current_dir().context("Failed to read the current directory")?;

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let result = run(args.command_or_default(), &cwd, &mut prompter)?;
    report::print(&result, verbose, &cwd);

    Ok(result.exit_status())
}
