use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_normalize_rewrites_with_stable_formatting() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", "{\"b\":\"2\",\"a\":\"1\",\"ar\":\"مرحبا\"}")?;

    let output = test.run(&["normalize", "en.json"])?;
    assert!(stdout(&output).contains("Normalized en.json"));
    assert!(output.status.success());

    let first = test.read_file("en.json")?;
    assert_eq!(first, "{\n    \"b\": \"2\",\n    \"a\": \"1\",\n    \"ar\": \"مرحبا\"\n}\n");

    // Second pass is byte-identical.
    let output = test.run(&["normalize", "en.json"])?;
    assert!(output.status.success());
    assert_eq!(test.read_file("en.json")?, first);
    Ok(())
}

#[test]
fn test_normalize_strips_markdown_fences() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ar.json", "```json\n{\"welcome\": \"أهلاً\"}\n```")?;

    let output = test.run(&["normalize", "ar.json"])?;
    assert!(output.status.success());

    let content = test.read_file("ar.json")?;
    assert_eq!(content, "{\n    \"welcome\": \"أهلاً\"\n}\n");
    Ok(())
}

#[test]
fn test_normalize_continues_past_broken_file_but_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("broken.json", r#"{"truncated"#)?;
    test.write_file("good.json", r#"{"a":"1"}"#)?;

    let output = test.run(&["normalize", "broken.json", "good.json"])?;
    let out = stdout(&output);

    assert!(out.contains("could not normalize broken.json"), "stdout: {out}");
    assert!(out.contains("Normalized good.json"));
    assert!(!output.status.success());

    // The broken file is left untouched, the good one is rewritten.
    assert_eq!(test.read_file("broken.json")?, r#"{"truncated"#);
    assert_eq!(test.read_file("good.json")?, "{\n    \"a\": \"1\"\n}\n");
    Ok(())
}

#[test]
fn test_normalize_requires_a_path() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["normalize"])?;
    assert!(!output.status.success());
    Ok(())
}
