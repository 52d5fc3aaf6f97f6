use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file(".bb2htmlrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["outputDir"], "html");
    assert_eq!(parsed["sources"], serde_json::json!(["."]));
    assert_eq!(parsed["ignores"], serde_json::json!([]));

    // No conversion happens on --init.
    assert!(!test.root().join("html").exists());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bb2htmlrc.json", "{}")?;

    let output = test.command().arg("--init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".bb2htmlrc.json already exists"));
    assert_eq!(test.read_file(".bb2htmlrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("--init").output()?;
    test.write_file("post.bb", "[i]ok[/i]")?;

    let output = test.command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("html/post.html")?, "<i>ok</i>");
    Ok(())
}
