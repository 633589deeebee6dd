use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["defaultLocale"], "en");
    assert!(parsed["aliases"].is_object());
    assert!(parsed["ignoreKeys"].is_array());

    // 2-space indentation
    assert!(content.contains("\n  \"messagesRoot\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "✓ Created .locatrc.json\n");
    assert!(test.root().join(".locatrc.json").exists());

    let content = test.read_file(".locatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert_eq!(out.stderr, "error: .locatrc.json already exists\n");
    assert_eq!(test.read_file(".locatrc.json")?, "{}");

    Ok(())
}
