use anyhow::Result;
use thai_baht_text::core::report::{mismatches, render};
use thai_baht_text::utils::validation::Validate;
use thai_baht_text::{BahtTextError, ExamplesConfig, OutputFormat};
use tempfile::TempDir;

/// 從檔案載入範例並檢查所有預期結果
#[test]
fn test_examples_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("baht-examples.toml");

    let config_content = r#"
[report]
title = "Invoice totals"
format = "csv"

[[examples]]
amount = "1234"
expected = "หนึ่งพันสองร้อยสามสิบสี่บาทถ้วน"

[[examples]]
amount = "33,333.75"
expected = "สามหมื่นสามพันสามร้อยสามสิบสามบาทเจ็ดสิบห้าสตางค์"

[[examples]]
amount = "100000000"
expected = "หนึ่งร้อยล้านบาทถ้วน"

[[examples]]
amount = "-1234"
expected = "ลบหนึ่งพันสองร้อยสามสิบสี่"
integer = true
"#;
    std::fs::write(&config_path, config_content)?;

    let config = ExamplesConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.title(), Some("Invoice totals"));

    let records = config.run()?;
    assert_eq!(records.len(), 4);
    assert_eq!(mismatches(&records), 0);

    let csv = render(&records, config.output_format())?;
    assert!(csv.starts_with("input,output,expected,matched\n"));
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("\"33,333.75\""));
    Ok(())
}

#[test]
fn test_mismatch_is_reported_not_raised() -> Result<()> {
    let config = ExamplesConfig::from_toml_str(
        r#"
[[examples]]
amount = "2"
expected = "หนึ่งบาทถ้วน"
"#,
    )?;

    let records = config.run()?;
    assert_eq!(mismatches(&records), 1);

    let text = render(&records, OutputFormat::Text)?;
    assert!(text.contains("Match: false"));
    Ok(())
}

#[test]
fn test_bad_amount_is_an_error() -> Result<()> {
    let config = ExamplesConfig::from_toml_str(
        r#"
[[examples]]
amount = "twelve"
"#,
    )?;

    assert!(matches!(
        config.run(),
        Err(BahtTextError::InvalidAmount { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let err = ExamplesConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, BahtTextError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}
