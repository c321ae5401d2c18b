use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn setup_candidates(test: &CliTest) -> Result<()> {
    test.write_file(
        "candidates.txt",
        "你好世界.message=你好世界\n新闻.message=新闻\n公告.message=公告!\n公告.message=公告?\nnoise\n",
    )
}

#[test]
fn test_pending_lists_uncatalogued_candidates() -> Result<()> {
    let test = CliTest::with_catalog()?;
    setup_candidates(&test)?;

    let output = test.pending_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  公告.message  公告?",
            "  新闻.message  新闻",
            "",
            "✘ 2 candidate(s) missing from locale en",
        ]
    );
    Ok(())
}

#[test]
fn test_pending_writes_properties_file() -> Result<()> {
    let test = CliTest::with_catalog()?;
    setup_candidates(&test)?;

    let output = test
        .pending_command()
        .args(["--locale", "en_GB", "--output", "new.properties"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_snapshot!(
        stdout.lines().last().unwrap_or_default(),
        @"✘ 2 candidate(s) missing from locale en_GB, written to new.properties"
    );
    assert_eq!(
        test.read_file("new.properties")?,
        "公告.message=公告?\n新闻.message=新闻\n"
    );
    Ok(())
}

#[test]
fn test_pending_none_left() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("candidates.txt", "你好.message=你好\n")?;

    let output = test.pending_command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("No pending candidates for locale en"));
    Ok(())
}

#[test]
fn test_pending_without_store_file() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.pending_command().output()?;

    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_pending_output_escapes_backslashes() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("path.json", r#"{"path": "C:\\文件\\路径"}"#)?;
    test.extract_command().arg("path.json").output()?;

    let output = test
        .pending_command()
        .args(["--output", "new.properties"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        test.read_file("new.properties")?,
        "C文件路径.message=C:\\\\文件\\\\路径\n"
    );
    Ok(())
}
