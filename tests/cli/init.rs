use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(stdout(&output).contains("Created .trlintrc.json"));
    assert!(output.status.success());

    let config = test.read_file(".trlintrc.json")?;
    assert!(config.contains("sourceRoot"));
    assert!(config.contains("assets/translations"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trlintrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));
    Ok(())
}
