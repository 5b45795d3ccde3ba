use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_lookup_in_requested_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en.json", r#"{"Key": "Key"}"#)?;
    test.write_file("lang/es.json", r#"{"Key": "Clave"}"#)?;

    let (output, stdout, _) = run({
        let mut cmd = test.lookup_command("Key");
        cmd.args(["--lang", "es"]);
        cmd
    })?;

    assert!(output.status.success());
    assert_eq!(stdout, "Clave\n");
    Ok(())
}

#[test]
fn test_lookup_falls_back_to_default_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", r#"{ "defaultLanguage": "de" }"#)?;
    test.write_file("lang/de.json", r#"{"Save": "Speichern", "Empty": ""}"#)?;

    let (_, stdout, _) = run({
        let mut cmd = test.lookup_command("Save");
        cmd.args(["--lang", "fr"]);
        cmd
    })?;
    assert_eq!(stdout, "Speichern\n");

    let (_, stdout, _) = run({
        let mut cmd = test.lookup_command("Empty");
        cmd.args(["--lang", "fr"]);
        cmd
    })?;
    assert_eq!(stdout, "Empty\n");
    Ok(())
}

#[test]
fn test_lookup_without_dictionaries_returns_key() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.lookup_command("Untranslated"))?;

    assert!(output.status.success());
    assert_eq!(stdout, "Untranslated\n");
    Ok(())
}
