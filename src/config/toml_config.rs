use crate::core::demo::evaluate;
use crate::core::report::{Conversion, OutputFormat};
use crate::utils::error::{BahtTextError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file of amounts to convert, optionally with the expected readings.
///
/// ```toml
/// [report]
/// title = "Invoice totals"
/// format = "text"
///
/// [[examples]]
/// amount = "1,234.50"
/// expected = "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบสตางค์"
///
/// [[examples]]
/// amount = "1000000"
/// integer = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplesConfig {
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub examples: Vec<ExampleCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleCase {
    pub amount: String,
    pub expected: Option<String>,
    pub integer: Option<bool>,
}

impl ExamplesConfig {
    /// 從 TOML 檔案載入範例
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        validate_path("examples_file", &path.as_ref().to_string_lossy())?;
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析範例
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${EXPECTED_TOTAL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BahtTextError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證範例的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_list("examples", &self.examples)?;

        for case in &self.examples {
            validate_non_empty_string("examples.amount", &case.amount)?;
        }

        Ok(())
    }

    pub fn title(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.title.as_deref())
    }

    /// 取得輸出格式，預設為 text
    pub fn output_format(&self) -> OutputFormat {
        self.report
            .as_ref()
            .and_then(|r| r.format)
            .unwrap_or(OutputFormat::Text)
    }

    /// Convert every example in file order.
    pub fn run(&self) -> Result<Vec<Conversion>> {
        self.examples
            .iter()
            .map(|case| {
                evaluate(
                    &case.amount,
                    case.expected.as_deref(),
                    case.integer.unwrap_or(false),
                )
            })
            .collect()
    }
}

impl Validate for ExamplesConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::mismatches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_examples() {
        let toml_content = r#"
[report]
title = "Required cases"
format = "json"

[[examples]]
amount = "1234"
expected = "หนึ่งพันสองร้อยสามสิบสี่บาทถ้วน"

[[examples]]
amount = "1000000000000"
expected = "หนึ่งล้านล้าน"
integer = true
"#;

        let config = ExamplesConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.title(), Some("Required cases"));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());

        let records = config.run().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(mismatches(&records), 0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("THAI_BAHT_TEXT_TEST_AMOUNT", "33333.75");

        let toml_content = r#"
[[examples]]
amount = "${THAI_BAHT_TEXT_TEST_AMOUNT}"
"#;

        let config = ExamplesConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.examples[0].amount, "33333.75");
        assert_eq!(config.output_format(), OutputFormat::Text);

        std::env::remove_var("THAI_BAHT_TEXT_TEST_AMOUNT");
    }

    #[test]
    fn test_config_validation() {
        let config = ExamplesConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[[examples]]
amount = "   "
"#;
        let config = ExamplesConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BahtTextError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected_on_load() {
        let toml_content = r#"
[report]
format = "xml"

[[examples]]
amount = "1"
"#;
        assert!(matches!(
            ExamplesConfig::from_toml_str(toml_content),
            Err(BahtTextError::TomlError(_))
        ));

        let config = ExamplesConfig::from_toml_str(
            "[report]\nformat = \"plain\"\n\n[[examples]]\namount = \"1\"\n",
        )
        .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ExamplesConfig::from_toml_str("[[examples]\namount ="),
            Err(BahtTextError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[examples]]
amount = "101.01"
expected = "หนึ่งร้อยเอ็ดบาทหนึ่งสตางค์"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ExamplesConfig::from_file(temp_file.path()).unwrap();
        let records = config.run().unwrap();
        assert_eq!(records[0].matched, Some(true));
    }
}
