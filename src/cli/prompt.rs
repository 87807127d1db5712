//! Interactive prompts.
//!
//! Generic over the reader and writer so tests can script the answers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::core::NamingStyle;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn heading(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "{}\n", title.cyan())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until a non-empty component name is entered.
    pub fn component_name(&mut self) -> Result<String> {
        loop {
            let answer = self.ask("Enter LWC component name: ")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Show the numbered style menu until a valid choice is entered.
    pub fn naming_style(&mut self) -> Result<NamingStyle> {
        loop {
            writeln!(self.output, "\n{}\n", "=== Choose label naming style ===".cyan())?;
            for (i, style) in NamingStyle::all().iter().enumerate() {
                writeln!(self.output, "[{}] {}", i + 1, style)?;
            }
            writeln!(self.output)?;

            let answer = self.ask("Your choice: ")?;
            if let Some(style) = NamingStyle::from_menu_choice(&answer) {
                return Ok(style);
            }
        }
    }

    /// Ask before replacing an existing label module. Only `y`/`Y` confirms.
    pub fn confirm_overwrite(&mut self, file_name: &str) -> Result<bool> {
        writeln!(self.output, "\n{}\n", "=== File already found ===".cyan())?;
        let answer = self.ask(&format!(
            "A '{}' file already exists for this component. Proceeding will make the content of this file be lost. Are you sure (y/n)? ",
            file_name
        ))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", format!("[?] {}", question).cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            writeln!(self.output)?;
            bail!("No answer provided (input closed)");
        }
        Ok(line.trim().to_string())
    }
}
