//! Console output for command results.
//!
//! Kept apart from the engine so lwc-labels can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{AbortReason, GenerateOutcome, GenerationReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const ARROW: &str = "\u{2192}"; // →
const BULLET: &str = "\u{2022}"; // •

const PACKAGE_XML_DOCS: &str =
    "https://developer.salesforce.com/docs/atlas.en-us.api_meta.meta/api_meta/manifest_samples.htm";

/// Print a command result. Successes go to stdout, aborts to stderr.
///
/// Paths under `cwd` are shown relative to it.
pub fn print(result: &CommandResult, verbose: bool, cwd: &Path) {
    match &result.summary {
        CommandSummary::Generate(GenerateOutcome::Aborted(_))
        | CommandSummary::Init(InitSummary { created: false }) => {
            print_to(result, verbose, cwd, &mut io::stderr().lock())
        }
        _ => print_to(result, verbose, cwd, &mut io::stdout().lock()),
    }
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, cwd: &Path, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(GenerateOutcome::Generated(report)) => {
            print_generated(report, verbose, cwd, writer)
        }
        CommandSummary::Generate(GenerateOutcome::Aborted(reason)) => print_aborted(reason, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_generated<W: Write>(report: &GenerationReport, verbose: bool, cwd: &Path, writer: &mut W) {
    let metrics = &report.metrics;
    let _ = writeln!(
        writer,
        "\n{}",
        "=== Generation Complete ===".green()
    );
    let _ = writeln!(writer, "\n{}\n", "[Metrics]".cyan());
    let _ = writeln!(writer, "{} Total labels created: {}", BULLET, metrics.total_labels);
    let _ = writeln!(writer, "{} Button labels: {}", BULLET, metrics.button_labels);
    let _ = writeln!(writer, "{} Text elements: {}", BULLET, metrics.text_elements);

    if verbose && !report.labels.is_empty() {
        let _ = writeln!(writer, "\n{}\n", "[Labels]".cyan());
        for (name, text) in report.labels.iter() {
            let _ = writeln!(writer, "  {} \u{2190} \"{}\"", name.bold(), text);
        }
    }

    for collision in &report.collisions {
        let _ = writeln!(
            writer,
            "\n{} \"{}\" and \"{}\" both map to {}; keeping \"{}\"",
            "warning:".bold().yellow(),
            collision.previous,
            collision.text,
            collision.name.cyan(),
            collision.text
        );
    }

    let paths = &report.paths;
    let module = display_path(&paths.module(), cwd);
    let markup = display_path(&paths.generated_markup(), cwd);
    let metadata = display_path(&paths.metadata(), cwd);
    let custom_labels = paths
        .output_dir
        .parent()
        .map(|labels_root| labels_root.join("CustomLabels.labels-meta.xml"))
        .map(|path| display_path(&path, cwd))
        .unwrap_or_else(|| "CustomLabels.labels-meta.xml".to_string());

    let _ = writeln!(writer, "\n{}", "[Next Steps]".cyan());

    let _ = writeln!(writer, "\n1. {}", "JavaScript Labels File:".yellow());
    let _ = writeln!(writer, "   {} Location: {}", ARROW, module);
    let _ = writeln!(
        writer,
        "   {} Move to your component folder and import it in your main JS file using:",
        ARROW
    );
    let _ = writeln!(
        writer,
        "
     import {{ label }} from './labels';
     export default class YourLWCComponent extends LightningElement {{
         label = label;
     }}"
    );

    let _ = writeln!(writer, "\n2. {}", "Labeled HTML File:".yellow());
    let _ = writeln!(writer, "   {} Location: {}", ARROW, markup);
    let _ = writeln!(
        writer,
        "   {} Replace your original HTML file with this one after importing the labels.js",
        ARROW
    );

    let _ = writeln!(writer, "\n3. {}", "XML Labels File:".yellow());
    let _ = writeln!(writer, "   {} Location: {}", ARROW, metadata);
    let _ = writeln!(writer, "   {} Append contents to: {}", ARROW, custom_labels);
    let _ = writeln!(
        writer,
        "   {} If the labels file doesn't exist, add to package.xml:",
        ARROW
    );
    let _ = writeln!(
        writer,
        "     <types>
        <members>*</members>
        <name>CustomLabels</name>
    </types>"
    );
    let _ = writeln!(writer, "   {} More info: {}\n", ARROW, PACKAGE_XML_DOCS);
}

fn print_aborted<W: Write>(reason: &AbortReason, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        reason.to_string().red()
    );
    let _ = writeln!(writer, "\n{}", "=== Generation Exited ===".cyan());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(writer, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
