use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_help_prints_usage_and_converts_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("post.bb", "[b]x[/b]")?;

    for flag in ["-h", "--help"] {
        let output = test.command().arg(flag).output()?;

        assert!(output.status.success());
        assert!(stdout(&output).contains("Usage: bb2html [OPTIONS] [SOURCES]..."));
        assert!(!test.root().join("html").exists());
    }
    Ok(())
}

#[test]
fn test_unknown_flag_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("post.bb", "[b]x[/b]")?;

    let output = test.command().arg("--frobnicate").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unexpected argument '--frobnicate'"));
    assert!(!test.root().join("html").exists());
    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--version").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("bb2html "));
    Ok(())
}
