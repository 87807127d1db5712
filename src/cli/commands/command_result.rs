use super::super::exit_status::ExitStatus;
use crate::core::GenerateOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateOutcome),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running an lwc-labels command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Generate(GenerateOutcome::Generated(_)) => ExitStatus::Success,
            CommandSummary::Generate(GenerateOutcome::Aborted(_)) => ExitStatus::Failure,
            CommandSummary::Init(InitSummary { created: true }) => ExitStatus::Success,
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        }
    }
}
