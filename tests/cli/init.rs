use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for key in ["configModule", "schemaDir", "output", "collectionsExport"] {
        assert!(parsed.get(key).is_some(), "Config should have '{}' field", key);
    }
    assert_eq!(parsed["configModule"], "src/content.config.ts");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Created .embodirc.json"));
    assert!(stdout.contains(
        "collections are read from src/content.config.ts and written to .embodi/cms.config.json"
    ));

    assert!(test.root().join(".embodirc.json").exists());
    let content = test.read_file(".embodirc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".embodirc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".embodirc.json already exists"));
    assert_eq!(test.read_file(".embodirc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_content_project()?;

    test.command().arg("init").output()?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".embodi/cms.config.json").exists());

    Ok(())
}
