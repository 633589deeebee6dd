use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, EN, run};

#[test]
fn test_locales_table() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", EN),
        ("bg", r#"{"welcome_back": "Добре дошъл отново, {username}!"}"#),
    ])?;
    test.write_file(
        ".locatrc.json",
        r#"{ "localeNames": { "en": "English", "bg": "Български" } }"#,
    )?;

    let mut cmd = test.command();
    cmd.arg("locales");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "  bg  Български  1 translated, 2 inherited\n\
         * en  English    3 translated, 0 inherited\n\
         \n\
         ✓ 3 keys in 2 locales (* default)\n"
    );
    Ok(())
}

#[test]
fn test_locales_default_override() -> Result<()> {
    let test = CliTest::with_messages(&[("en", EN), ("bg", EN)])?;

    let mut cmd = test.command();
    cmd.args(["locales", "--default-locale", "bg"]);
    let out = run(cmd)?;

    assert!(out.stdout.starts_with("* bg"), "{}", out.stdout);
    Ok(())
}
