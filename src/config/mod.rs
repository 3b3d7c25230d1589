pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "thai-baht-text")]
#[command(about = "Read baht amounts aloud in Thai")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Amounts to convert, e.g. 1234, 1,234.50, -12.5 or ฿99
    pub amounts: Vec<String>,

    #[arg(long, help = "Spell amounts as plain numbers without baht or satang")]
    pub integer: bool,

    #[arg(long, help = "Print the built-in example conversions")]
    pub demo: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.demo {
            return Ok(());
        }
        validate_non_empty_list("amounts", &self.amounts)?;
        for amount in &self.amounts {
            validate_non_empty_string("amounts", amount)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts_and_flags() {
        let config =
            CliConfig::parse_from(["thai-baht-text", "1234", "-12.5", "--format", "json"]);
        assert_eq!(config.amounts, vec!["1234", "-12.5"]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.integer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_needs_no_amounts() {
        let config = CliConfig::parse_from(["thai-baht-text", "--demo"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["thai-baht-text"]);
        assert!(config.validate().is_err());
    }
}
