use std::{io::Write, process::Stdio};

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_translate_replaces_catalogued_text() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(
        "response.json",
        r#"{"id": 7, "title": "你好世界", "delFlag": "你好", "items": ["你好", "plain .message", "未知", 3]}"#,
    )?;

    let output = test.translate_command().arg("response.json").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)?,
        json!({
            "id": 7,
            "title": "Hello World",
            "delFlag": "你好",
            "items": ["Hello", "Plain", "未知", 3]
        })
    );
    let stderr = String::from_utf8(output.stderr)?;
    assert_snapshot!(
        stderr.trim_end(),
        @"✓ Translated 3 of 4 text value(s) for locale en"
    );
    Ok(())
}

#[test]
fn test_translate_keeps_field_order() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("response.json", r#"{"z": "你好", "a": 1, "m": "你好世界"}"#)?;

    let output = test.translate_command().arg("response.json").output()?;

    let text = String::from_utf8(output.stdout)?;
    let z = text.find("\"z\"").unwrap();
    let a = text.find("\"a\"").unwrap();
    let m = text.find("\"m\"").unwrap();
    assert!(z < a && a < m, "field order changed:\n{}", text);
    Ok(())
}

#[test]
fn test_translate_keeps_large_numbers_verbatim() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(
        "response.json",
        r#"{"id": 123456789012345678901234567890, "price": 1.10, "title": "你好"}"#,
    )?;

    let output = test.translate_command().arg("response.json").output()?;

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout)?;
    assert!(text.contains(r#""id": 123456789012345678901234567890"#), "{}", text);
    assert!(text.contains(r#""price": 1.10"#), "{}", text);
    assert!(text.contains(r#""title": "Hello""#), "{}", text);
    Ok(())
}

#[test]
fn test_translate_locale_falls_back_to_root_bundle() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("response.json", r#"{"title": "你好世界", "note": "你好"}"#)?;

    let output = test
        .translate_command()
        .args(["response.json", "--locale", "fr-FR"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)?,
        json!({"title": "你好世界", "note": "你好"})
    );
    Ok(())
}

#[test]
fn test_translate_reads_stdin_and_writes_output_file() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let mut child = test
        .translate_command()
        .args(["-", "--output", "out.json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .unwrap()
        .write_all(r#"["你好世界"]"#.as_bytes())?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written: Value = serde_json::from_str(&test.read_file("out.json")?)?;
    assert_eq!(written, json!(["Hello World"]));
    Ok(())
}

#[test]
fn test_translate_honours_configured_excluded_fields() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(
        ".autoglotrc.json",
        r#"{ "defaultLocale": "en", "excludedFields": ["code"] }"#,
    )?;
    test.write_file("response.json", r#"{"code": "你好", "id": "你好"}"#)?;

    let output = test.translate_command().arg("response.json").output()?;

    assert_eq!(stdout_json(&output)?, json!({"code": "你好", "id": "Hello"}));
    Ok(())
}

#[test]
fn test_translate_invalid_json_is_error() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("response.json", "{ not json")?;

    let output = test.translate_command().arg("response.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to parse JSON input"));
    Ok(())
}

#[test]
fn test_translate_missing_messages_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("response.json", "{}")?;

    let output = test.translate_command().arg("response.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("does not exist"));
    Ok(())
}
