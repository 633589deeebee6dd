use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{BG, CliTest, EN, run};

fn project() -> Result<CliTest> {
    let test = CliTest::with_messages(&[("en", EN), ("bg", BG), ("ru", "{}")])?;
    test.write_file(
        ".locatrc.json",
        r#"{ "aliases": { "uk": "en" }, "localeNames": { "bg": "Български" } }"#,
    )?;
    Ok(test)
}

fn detect(test: &CliTest, args: &[&str]) -> Result<String> {
    let mut cmd = test.command();
    cmd.arg("detect").args(args);
    let out = run(cmd)?;
    assert_eq!(out.code, Some(0), "{}", out.stderr);
    Ok(out.stdout)
}

#[test]
fn test_detect_priority() -> Result<()> {
    let test = project()?;

    assert_eq!(
        detect(&test, &["--url-path", "/bg/home", "--cookie", "ru"])?,
        "bg  Български\n"
    );
    assert_eq!(
        detect(&test, &["--query-locale", "ru", "--cookie", "bg"])?,
        "ru\n"
    );
    assert_eq!(
        detect(&test, &["--cookie", "xx", "--header", "bg-BG,en;q=0.8"])?,
        "bg  Български\n"
    );
    Ok(())
}

#[test]
fn test_detect_cookie_must_match_exactly() -> Result<()> {
    let test = project()?;

    assert_eq!(detect(&test, &["--cookie", "BG"])?, "en\n");
    assert_eq!(
        detect(&test, &["--query-locale", "uk", "--header", "bg"])?,
        "bg  Български\n"
    );
    Ok(())
}

#[test]
fn test_detect_alias_and_default() -> Result<()> {
    let test = project()?;

    assert_eq!(detect(&test, &["--header", "uk"])?, "en\n");
    assert_eq!(detect(&test, &["--url-path", "/about"])?, "en\n");
    assert_eq!(detect(&test, &[])?, "en\n");
    Ok(())
}
