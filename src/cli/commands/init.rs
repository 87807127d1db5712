use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config into `dir`; an existing file is left alone.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        true
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_loadable_config() {
        let dir = tempdir().unwrap();
        let result = init(dir.path()).unwrap();
        assert!(matches!(
            result.summary,
            CommandSummary::Init(InitSummary { created: true })
        ));

        let loaded = load_config(dir.path()).unwrap();
        assert!(loaded.from_file);
        assert_eq!(loaded.config.indent, 4);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let result = init(dir.path()).unwrap();
        assert!(matches!(
            result.summary,
            CommandSummary::Init(InitSummary { created: false })
        ));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(),
            "{}"
        );
    }
}
