//! Label name generation.
//!
//! Turns arbitrary human text (any language) into an identifier usable both as
//! a custom label API name and as a JavaScript import binding.

use std::{fmt, str::FromStr};

use anyhow::{Error, bail};
use clap::ValueEnum;

/// Casing convention applied to generated label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NamingStyle {
    #[value(name = "camelCase", alias = "camel-case")]
    CamelCase,
    #[value(name = "snake_case", alias = "snake-case")]
    SnakeCase,
    #[value(name = "PascalCase", alias = "pascal-case")]
    PascalCase,
    #[value(name = "UPPER_CASE", alias = "upper-case")]
    UpperCase,
}

impl NamingStyle {
    /// Styles in interactive menu order (`[1]` is the first entry).
    pub fn all() -> [NamingStyle; 4] {
        [
            NamingStyle::CamelCase,
            NamingStyle::SnakeCase,
            NamingStyle::PascalCase,
            NamingStyle::UpperCase,
        ]
    }

    /// Resolve a 1-based menu choice.
    pub fn from_menu_choice(choice: &str) -> Option<NamingStyle> {
        let index: usize = choice.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i).copied())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::SnakeCase => "snake_case",
            NamingStyle::PascalCase => "PascalCase",
            NamingStyle::UpperCase => "UPPER_CASE",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Some(style) = Self::from_menu_choice(value) {
            return Ok(style);
        }
        match <NamingStyle as ValueEnum>::from_str(value, false) {
            Ok(style) => Ok(style),
            Err(_) => bail!("Unsupported naming style: \"{}\"", value),
        }
    }
}

/// Build a label name from `text`.
///
/// Returns an empty string when the text has no letters or digits left after
/// transliteration; callers treat that as "no label".
///
/// ```
/// use lwc_labels::core::naming::{NamingStyle, make_label_name};
///
/// assert_eq!(make_label_name("Submit Order!", None, NamingStyle::CamelCase), "submitOrder");
/// assert_eq!(make_label_name("Submit Order!", Some("btn"), NamingStyle::CamelCase), "btnSubmitOrder");
/// ```
pub fn make_label_name(text: &str, prefix: Option<&str>, style: NamingStyle) -> String {
    let normalized = deunicode::deunicode(text.trim());
    let clean: String = normalized
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let mut words: Vec<String> = clean.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return String::new();
    }

    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        words.insert(0, prefix.to_string());
    }

    match style {
        NamingStyle::SnakeCase => words.join("_"),
        NamingStyle::CamelCase => {
            let mut name = words[0].to_lowercase();
            name.extend(words[1..].iter().map(|w| title_case(w)));
            name
        }
        NamingStyle::PascalCase => words.iter().map(|w| title_case(w)).collect(),
        NamingStyle::UpperCase => words.join("_").to_uppercase(),
    }
}

/// Upper-case every letter that follows a non-letter, lower-case the rest
/// (`2fa` → `2Fa`).
fn title_case(word: &str) -> String {
    let mut after_letter = false;
    word.chars()
        .map(|c| {
            let mapped = if after_letter {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            after_letter = c.is_ascii_alphabetic();
            mapped
        })
        .collect()
}
