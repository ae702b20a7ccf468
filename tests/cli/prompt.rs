use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_input, stdout};

#[test]
fn test_answer_n_aborts() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "keep 😀")?;

    let output = run_with_input(test.command().arg("notes.txt"), "n\n")?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(
        out.contains("Are you sure you want to DESTROY all emojis? (Y/n): "),
        "{out}"
    );
    assert!(out.contains("Mission aborted."), "{out}");
    assert_eq!(test.read_file("notes.txt")?, "keep 😀");
    Ok(())
}

#[test]
fn test_empty_answer_confirms() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "gone 😀")?;

    let output = run_with_input(test.command().args(["--no-banner", "notes.txt"]), "\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Total emojis destroyed: 1"));
    assert_eq!(test.read_file("notes.txt")?, "gone ");
    Ok(())
}

#[test]
fn test_closed_stdin_aborts() -> Result<()> {
    let test = CliTest::with_file("notes.txt", "keep 😀")?;

    let output = test.command().arg("notes.txt").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Mission aborted."));
    assert_eq!(test.read_file("notes.txt")?, "keep 😀");
    Ok(())
}
