use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BG, CliTest, EN, run};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_messages(&[("en", EN), ("bg", BG)])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "✓ Checked 3 keys in 2 locales - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"welcome_back": "Welcome back, {username}!"}"#),
        ("bg", r#"{"welcome_back": "Здравей, {user}!"}"#),
    ])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(
        out.stdout
            .contains("error: \"welcome_back\"  placeholder-mismatch"),
        "{}",
        out.stdout
    );
    assert!(out.stdout.contains("--> ./messages/bg.json:1:1"));
    assert!(out.stdout.contains("in bg: missing {username}; unexpected {user}"));
    assert!(out.stdout.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_messages(&[
        (
            "en",
            r#"{
  "filter_under20": "Under 20",
  "brand": "Photo Market"
}"#,
        ),
        (
            "ru",
            r#"{
  "brand": "Photo Market",
  "sell_moreTag": "еще"
}"#,
        ),
    ])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"sell_moreTag\"  orphan-key"));
    assert!(out.stdout.contains("--> ./messages/ru.json:3:1"));
    assert!(out.stdout.contains("warning: \"filter_under20\"  missing-variant"));
    assert!(out.stdout.contains("(\"Under 20\") falls back to en in: ru"));
    assert!(out.stdout.contains("warning: \"brand\"  untranslated"));
    assert!(out.stdout.contains("3 problems (0 errors, 3 warnings)"));
    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"photos": "{count} photo{s}", "brand": "Photo Market"}"#),
        ("bg", r#"{"photos": "{count} снимки", "brand": "Photo Market"}"#),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("plural");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"photos\"  naive-plural"));
    assert!(!out.stdout.contains("untranslated"));
    Ok(())
}

#[test]
fn test_ignore_keys_from_config() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"legacy_title": "Shop"}"#),
        ("bg", r#"{"legacy_title": "Shop"}"#),
    ])?;
    test.write_file(".locatrc.json", r#"{ "ignoreKeys": ["legacy_*"] }"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_broken_locale_file_is_reported() -> Result<()> {
    let test = CliTest::with_messages(&[("en", EN), ("de", "{ not json")])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"), "{}", out.stdout);
    assert!(out.stdout.contains("--> ./messages/de.json\n"));
    assert!(
        out.stderr
            .contains("1 catalog file could not be loaded; its keys were not checked")
    );
    Ok(())
}

#[test]
fn test_duplicate_key_is_a_warning() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", r#"{"hello": "Hello"}"#),
        ("bg", r#"{"hello": "Здравей"}"#),
    ])?;
    test.write_file("messages/en.yaml", "hello: Hi there\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0), "{}", out.stdout);
    assert!(
        out.stdout.contains("warning: \"hello\"  duplicate-key"),
        "{}",
        out.stdout
    );
    assert!(out.stdout.contains("--> ./messages/en.yaml:1:1"));
    assert!(out.stdout.contains("defined more than once in en; using (\"Hi there\")"));
    assert!(out.stdout.contains("1 problems (0 errors, 1 warning)"));
    assert!(!out.stdout.contains("parse-error"));
    assert_eq!(out.stderr, "");
    Ok(())
}

#[test]
fn test_missing_messages_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.starts_with("Error: Failed to load catalog from"));
    assert!(out.stderr.contains("does not exist"));
    Ok(())
}

#[test]
fn test_combined_catalog_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n.yaml",
        "welcome_back:\n  en: \"Welcome back, {username}!\"\n  bg: \"Добре дошъл, {username}!\"\n",
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--catalog-file", "i18n.yaml"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert_eq!(
        out.stdout,
        "✓ Checked 1 key in 2 locales - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(out.code, Some(0));
    for command in ["check", "translate", "locales", "detect", "import", "init", "serve"] {
        assert!(out.stdout.contains(command), "missing {command} in help");
    }
    Ok(())
}
