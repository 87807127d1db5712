use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run_with_input, stderr};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["lwcRoot", "labelsRoot", "textElements", "buttonElements", "language"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }
    assert_eq!(parsed["language"], "en_US");
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let content = test.read_file(".lwclabelsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lwclabelsrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".lwclabelsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_component("hello", "<template><p>Hi</p></template>")?;

    test.command().arg("init").output()?;

    let output = run_with_input(test.generate_command().arg("hello"), "1\n")?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
