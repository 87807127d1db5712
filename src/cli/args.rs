//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate` (default): extract labels from one component
//! - `init`: write a default `.lwclabelsrc.json`

use clap::{Args, Parser, Subcommand};

use crate::core::NamingStyle;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; no subcommand means an interactive `generate`.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Generate(GenerateCommand::default()))
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Component name (prompted when omitted)
    pub component: Option<String>,

    /// Label naming style (overrides config file; prompted when neither is set)
    #[arg(short, long, value_enum)]
    pub style: Option<NamingStyle>,

    /// Overwrite a previously generated labels.js without asking
    #[arg(short, long)]
    pub force: bool,

    /// Print every extracted label
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace hardcoded text in a component template with custom labels
    Generate(GenerateCommand),
    /// Initialize a new .lwclabelsrc.json configuration file
    Init,
}
