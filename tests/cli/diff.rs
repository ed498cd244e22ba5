use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_diff_reports_both_directions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": "1", "b": "2", "c": "3"}"#)?;
    test.write_file("ar.json", r#"{"a": "١", "d": "٤"}"#)?;

    let output = test.run(&["diff", "en.json", "ar.json"])?;
    let out = stdout(&output);

    assert!(out.contains("en.json: 3 keys"), "stdout: {out}");
    assert!(out.contains("ar.json: 2 keys"));
    assert!(out.contains("2 keys missing in ar.json:"));
    assert!(out.contains("  - b"));
    assert!(out.contains("  - c"));
    assert!(out.contains("1 key missing in en.json:"));
    assert!(out.contains("  - d"));
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_diff_identical_dictionaries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": "1"}"#)?;
    test.write_file("de.json", r#"{"a": "eins"}"#)?;

    let output = test.run(&["diff", "en.json", "de.json"])?;
    let out = stdout(&output);

    assert!(out.contains("no keys missing in de.json"));
    assert!(out.contains("no keys missing in en.json"));
    Ok(())
}

#[test]
fn test_diff_fails_on_unreadable_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": "1"}"#)?;

    let output = test.run(&["diff", "en.json", "missing.json"])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error:"));
    Ok(())
}
