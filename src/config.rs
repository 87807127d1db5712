use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    emit::DEFAULT_LANGUAGE,
    extract::{ExtractionRules, default_button_elements, default_text_elements},
    naming::NamingStyle,
};

pub const CONFIG_FILE_NAME: &str = ".lwclabelsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one folder per component.
    #[serde(default = "default_lwc_root")]
    pub lwc_root: String,
    /// Directory receiving one output folder per component.
    #[serde(default = "default_labels_root")]
    pub labels_root: String,
    #[serde(default = "default_text_elements")]
    pub text_elements: Vec<String>,
    #[serde(default = "default_button_elements")]
    pub button_elements: Vec<String>,
    /// Skips the style prompt when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_style: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_lwc_root() -> String {
    "force-app/main/default/lwc".to_string()
}

fn default_labels_root() -> String {
    "force-app/main/default/labels".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_indent() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lwc_root: default_lwc_root(),
            labels_root: default_labels_root(),
            text_elements: default_text_elements(),
            button_elements: default_button_elements(),
            naming_style: None,
            language: default_language(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(1..=8).contains(&self.indent) {
            bail!("Invalid 'indent': {} (expected 1 to 8)", self.indent);
        }
        if self.text_elements.iter().all(|e| e.trim().is_empty()) {
            bail!("'textElements' must list at least one element");
        }
        if self.button_elements.iter().all(|e| e.trim().is_empty()) {
            bail!("'buttonElements' must list at least one element");
        }
        if self.language.trim().is_empty() {
            bail!("'language' must not be empty");
        }
        self.naming_style()
            .context("Invalid 'namingStyle' in config")?;

        Ok(())
    }

    pub fn naming_style(&self) -> Result<Option<NamingStyle>> {
        self.naming_style
            .as_deref()
            .map(str::parse::<NamingStyle>)
            .transpose()
    }

    pub fn extraction_rules(&self) -> ExtractionRules {
        ExtractionRules {
            text_elements: normalize_elements(&self.text_elements),
            button_elements: normalize_elements(&self.button_elements),
        }
    }
}

fn normalize_elements(elements: &[String]) -> Vec<String> {
    elements
        .iter()
        .map(|e| e.trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the relative roots resolve against: the config file's
    /// directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn lwc_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.lwc_root)
    }

    pub fn labels_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.labels_root)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
