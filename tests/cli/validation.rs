use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_missing_path_fails_before_any_write() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "keep 😀")?;

    let output = test
        .destroy_command()
        .args(["notes.txt", "missing.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.contains("Error: Path 'missing.txt' does not exist."),
        "{err}"
    );
    assert!(!stdout(&output).contains("Starting emoji destruction mission"));
    assert_eq!(test.read_file("notes.txt")?, "keep 😀");
    Ok(())
}

#[test]
fn test_unknown_flag_is_usage_error() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "keep 😀")?;

    let output = test.command().arg("--bogus").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("notes.txt")?, "keep 😀");
    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Because sometimes you just need to say F$@# EMOJIS!"));
    Ok(())
}
