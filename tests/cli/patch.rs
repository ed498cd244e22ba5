use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_patch_prints_missing_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "assets/translations/en.json",
        r#"{"a": "1", "b": "2"}"#,
    )?;
    test.write_file("assets/translations/ar.json", r#"{"a": "١"}"#)?;

    // Reference defaults to the primary locale's dictionary.
    let output = test.run(&["patch", "assets/translations/ar.json"])?;
    let out = stdout(&output);

    assert!(out.contains("\"b\": \"2\""), "stdout: {out}");
    assert!(out.contains("1 keys missing in ar.json"));
    assert!(out.contains("review before merging"));
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_patch_writes_output_file_without_touching_target() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": "1", "b": "2"}"#)?;
    test.write_file("ar.json", r#"{"a": "١"}"#)?;

    let output = test.run(&[
        "patch",
        "ar.json",
        "--reference",
        "en.json",
        "--output",
        "missing_ar.json",
    ])?;
    let out = stdout(&output);

    assert!(out.contains("patch written to missing_ar.json"), "stdout: {out}");

    let patch = test.read_file("missing_ar.json")?;
    assert!(patch.contains("\"b\": \"2\""));
    assert!(!patch.contains("\"a\""));

    // The target dictionary is never merged into.
    assert_eq!(test.read_file("ar.json")?, r#"{"a": "١"}"#);
    Ok(())
}

#[test]
fn test_patch_nothing_missing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.json", r#"{"a": "1"}"#)?;
    test.write_file("ar.json", r#"{"a": "١"}"#)?;

    let output = test.run(&["patch", "ar.json", "--reference", "en.json"])?;
    let out = stdout(&output);

    assert!(out.contains("ar.json is not missing any keys from en.json"));
    assert!(output.status.success());
    Ok(())
}
