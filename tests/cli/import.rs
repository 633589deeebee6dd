use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn with_paraglide_modules() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "paraglide/messages/en.js",
        "export const hello = () => `Hello`\n\
         export const welcome_back = (params) => `Welcome back, ${params.username}!`\n\
         export const close = () => `Close`\n",
    )?;
    test.write_file(
        "paraglide/messages/bg.js",
        "export const hello = () => `Здравей`\n\
         export const welcome_back = (params) => `Добре дошъл, ${params.username}!`\n\
         export { close } from \"./en.js\"\n\
         export const fancy = (params) => params.n > 1 ? `many` : `one`\n",
    )?;
    Ok(test)
}

#[test]
fn test_import_into_messages_root() -> Result<()> {
    let test = with_paraglide_modules()?;

    let mut cmd = test.command();
    cmd.args(["import", "paraglide/messages"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stdout.contains("warning: \"fancy\""), "{}", out.stdout);
    assert!(out.stdout.contains("--> paraglide/messages/bg.js:4"));
    assert!(
        out.stdout
            .contains("✓ bg: 2 messages, 1 inherited, 1 skipped -> ./messages/bg.json")
    );
    assert!(
        out.stdout
            .contains("✓ en: 3 messages, 0 inherited, 0 skipped -> ./messages/en.json")
    );
    assert!(out.stdout.ends_with("Imported 5 messages into 2 files\n"));

    assert_eq!(
        test.read_file("messages/bg.json")?,
        "{\n  \"hello\": \"Здравей\",\n  \"welcome_back\": \"Добре дошъл, {username}!\"\n}\n"
    );

    let mut cmd = test.translate_command("close");
    cmd.args(["-l", "bg"]);
    assert_eq!(run(cmd)?.stdout, "Close\n");
    Ok(())
}

#[test]
fn test_import_respects_existing_files() -> Result<()> {
    let test = with_paraglide_modules()?;
    test.write_file("i18n/en.json", "{\"keep\": \"me\"}")?;

    let mut cmd = test.command();
    cmd.args(["import", "paraglide/messages", "--out", "i18n"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("already exists (use --force to overwrite)"));
    assert_eq!(test.read_file("i18n/en.json")?, "{\"keep\": \"me\"}");
    assert!(!test.root().join("i18n/bg.json").exists());

    let mut cmd = test.command();
    cmd.args(["import", "paraglide/messages", "--out", "i18n", "--force"]);
    assert_eq!(run(cmd)?.code, Some(0));
    assert!(test.read_file("i18n/en.json")?.contains("\"close\": \"Close\""));
    Ok(())
}
