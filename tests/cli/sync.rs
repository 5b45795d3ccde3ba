use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn setup_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/routes/home.js",
        r#"
router.get("/", (req, res) => {
    res.render("home", { title: __("Welcome", req.lang) });
});
"#,
    )?;
    test.write_file(
        "views/home.html",
        r#"<h1>{{ _("Hello") }}</h1><p>{{ _("Read the docs!") }}</p>"#,
    )
}

#[test]
fn test_sync_adds_placeholders() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/en.json", "{}")?;

    let (output, stdout, _) = run(test.sync_command())?;

    assert!(output.status.success());
    assert!(stdout.contains("Synchronizing lang/en.json"));
    assert!(stdout.contains("+ \"Welcome\""));
    assert_snapshot!(test.read_file("lang/en.json")?, @r#"
    {
      "Welcome": "",
      "Hello": "",
      "Read the docs!": ""
    }
    "#);
    Ok(())
}

#[test]
fn test_sync_preserves_translations() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file(
        "lang/fr.json",
        r#"{"Hello": "Bonjour", "Unused": "Inutile", "Welcome": ""}"#,
    )?;

    let (output, _, _) = run(test.sync_command())?;

    assert!(output.status.success());
    assert_snapshot!(test.read_file("lang/fr.json")?, @r#"
    {
      "Read the docs!": "",
      "Hello": "Bonjour",
      "Unused": "Inutile",
      "Welcome": ""
    }
    "#);
    Ok(())
}

#[test]
fn test_sync_delete_removes_unused() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file(
        "lang/fr.json",
        r#"{"Hello": "Bonjour", "Unused": "Inutile"}"#,
    )?;

    let (output, stdout, _) = run({
        let mut cmd = test.sync_command();
        cmd.args(["fr", "--delete"]);
        cmd
    })?;

    assert!(output.status.success());
    assert!(stdout.contains("- \"Unused\""));
    assert_snapshot!(test.read_file("lang/fr.json")?, @r#"
    {
      "Welcome": "",
      "Read the docs!": "",
      "Hello": "Bonjour"
    }
    "#);
    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/en.json", r#"{"Hello": "Hello"}"#)?;

    run(test.sync_command())?;
    let first = test.read_file("lang/en.json")?;
    let (_, stdout, _) = run(test.sync_command())?;

    assert_eq!(test.read_file("lang/en.json")?, first);
    assert!(stdout.contains("nothing to do"));
    Ok(())
}

#[test]
fn test_sync_skips_ignored_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("config/mail.js", r#"_("Config only")"#)?;
    test.write_file("logs/app.log", r#"_("Logged")"#)?;
    test.write_file(".cache/tmp.js", r#"_("Hidden")"#)?;
    test.write_file("app.js", r#"_("Visible")"#)?;

    let (output, _, _) = run({
        let mut cmd = test.sync_command();
        cmd.arg("en");
        cmd
    })?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n  \"Visible\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_sync_custom_ignores_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", r#"{ "ignores": ["/vendor"] }"#)?;
    test.write_file("vendor/lib.js", r#"_("Vendored")"#)?;
    test.write_file("config/app.js", r#"_("Configured")"#)?;

    run({
        let mut cmd = test.sync_command();
        cmd.arg("en");
        cmd
    })?;

    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n  \"Configured\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_sync_respects_root_env() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("project/app.js", r#"_("Rooted")"#)?;
    test.write_file("outside.js", r#"_("Outside")"#)?;

    let (output, _, _) = run({
        let mut cmd = test.sync_command();
        cmd.env("LANGSYNC_ROOT", test.root().join("project"));
        cmd.arg("en");
        cmd
    })?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("project/lang/en.json")?,
        "{\n  \"Rooted\": \"\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_sync_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/en.json", "{}")?;

    let (output, stdout, _) = run({
        let mut cmd = test.sync_command();
        cmd.arg("--dry-run");
        cmd
    })?;

    assert!(output.status.success());
    assert!(stdout.contains("Dry run: 3 keys would be added"));
    assert_eq!(test.read_file("lang/en.json")?, "{}");
    Ok(())
}

#[test]
fn test_sync_verbosity_zero_is_silent() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/en.json", "{}")?;

    let (output, stdout, _) = run({
        let mut cmd = test.sync_command();
        cmd.args(["--verbosity", "0"]);
        cmd
    })?;

    assert!(output.status.success());
    assert_eq!(stdout, "");
    Ok(())
}

#[test]
fn test_sync_malformed_dictionary_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/de.json", "{ not json")?;
    test.write_file("lang/en.json", "{}")?;

    let (output, _, stderr) = run(test.sync_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: Cannot parse"));
    assert!(stderr.contains("de.json"));
    // en.json sorts after de.json and is never reached
    assert_eq!(test.read_file("lang/en.json")?, "{}");
    Ok(())
}

#[test]
fn test_sync_without_dictionaries_warns() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("lang/README.md", "")?;

    let (output, stdout, _) = run(test.sync_command())?;

    assert!(output.status.success());
    assert!(stdout.contains("No dictionaries to synchronize"));
    Ok(())
}
