use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert!(output.status.success());
    assert!(stdout.contains("Created .langsyncrc.json"));

    let content = test.read_file(".langsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["langDir"], "lang");
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["ignores"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", "{}")?;

    let (output, _, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("already exists"));
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");
    Ok(())
}
