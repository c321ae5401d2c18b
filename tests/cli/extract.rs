use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn sorted_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort();
    lines
}

#[test]
fn test_extract_records_single_candidate() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("note.json", r#"{"note": "Price: 你好 100"}"#)?;

    let output = test.extract_command().arg("note.json").output()?;

    assert!(output.status.success());
    let content = test.read_file("candidates.txt")?;
    assert_snapshot!(content.trim_end(), @"你好100.message=Price: 你好 100");
    Ok(())
}

#[test]
fn test_extract_twice_leaves_one_line() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("note.json", r#"{"note": "Price: 你好 100"}"#)?;

    test.extract_command().arg("note.json").output()?;
    let output = test.extract_command().arg("note.json").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("candidates.txt")?.lines().count(), 1);
    assert!(String::from_utf8(output.stdout)?.contains("Recorded 0 new candidate(s) from 1 file(s)"));
    Ok(())
}

#[test]
fn test_extract_walks_directories() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("responses/users.json", r#"[{"id": "管理员", "name": "admin"}]"#)?;
    test.write_file("responses/nested/menu.json", r#"{"title": "系统设置", "children": [{"title": "用户管理"}]}"#)?;
    test.write_file("responses/readme.txt", "忽略")?;

    let output = test.extract_command().arg("responses").output()?;

    assert!(output.status.success());
    let content = test.read_file("candidates.txt")?;
    assert_eq!(
        sorted_lines(&content),
        vec![
            "用户管理.message=用户管理",
            "管理员.message=管理员",
            "系统设置.message=系统设置",
        ]
    );
    Ok(())
}

#[test]
fn test_extract_skips_text_without_cjk() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("plain.json", r#"{"a": "Hello", "b": ["world", 1]}"#)?;

    let output = test.extract_command().arg("plain.json").output()?;

    assert!(output.status.success());
    assert!(!test.root().join("candidates.txt").exists());
    Ok(())
}

#[test]
fn test_extract_reports_bad_input_and_keeps_going() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("good.json", r#"["好"]"#)?;
    test.write_file("bad.json", "{ nope")?;

    let output = test
        .extract_command()
        .args(["good.json", "bad.json", "--candidate-file", "custom.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("bad.json"));
    assert!(stdout.contains("Recorded 1 new candidate(s) from 1 file(s)"));
    assert_eq!(test.read_file("custom.txt")?, "好.message=好\n");
    Ok(())
}

#[test]
fn test_extract_requires_paths() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;

    assert!(!output.status.success());
    Ok(())
}
