use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::Result;

use super::super::{args::GenerateCommand, prompt::Prompter};
use super::{CommandResult, CommandSummary};
use crate::config::load_config;
use crate::core::{GenerateRequest, NamingStyle, generate as generate_labels};

/// Resolve missing inputs (flags, then config, then prompts) and run the
/// generator for one component.
pub fn generate<R: BufRead, W: Write>(
    cmd: GenerateCommand,
    dir: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<CommandResult> {
    let args = cmd.args;
    // Config errors (e.g. an unsupported namingStyle) surface before any prompt.
    let loaded = load_config(dir)?;
    let configured_style = loaded.config.naming_style()?;

    prompter.heading("=== LWC Label Generator ===")?;

    let component = match args.component {
        Some(component) => component,
        None => prompter.component_name()?,
    };
    let style: NamingStyle = match args.style.or(configured_style) {
        Some(style) => style,
        None => prompter.naming_style()?,
    };

    let request = GenerateRequest::from_config(component.trim(), style, &loaded);
    let force = args.force;
    let outcome = generate_labels(&request, |module_path| {
        if force {
            return Ok(true);
        }
        let file_name = module_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        prompter.confirm_overwrite(&file_name)
    })?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(outcome),
    })
}
