use thiserror::Error;

#[derive(Error, Debug)]
pub enum BahtTextError {
    #[error("Numeral is empty")]
    EmptyNumeral,

    #[error("Invalid digit '{found}' at position {position} in \"{input}\"")]
    InvalidDigit {
        input: String,
        position: usize,
        found: char,
    },

    #[error("Digit group \"{input}\" has {len} digits, at most 6 allowed")]
    GroupTooLong { input: String, len: usize },

    #[error("Satang must be between 0 and 99, got {value}")]
    SatangOutOfRange { value: i64 },

    #[error("Invalid amount \"{input}\": {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Amount {value} is too large to convert")]
    AmountOutOfRange { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: \"{value}\" ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied a value outside the converter's contract.
    Input,
    Configuration,
    System,
}

impl BahtTextError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyNumeral
            | Self::InvalidDigit { .. }
            | Self::GroupTooLong { .. }
            | Self::SatangOutOfRange { .. }
            | Self::InvalidAmount { .. }
            | Self::AmountOutOfRange { .. } => ErrorCategory::Input,
            Self::TomlError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EmptyNumeral | Self::InvalidDigit { .. } | Self::GroupTooLong { .. } => {
                "Pass only ASCII decimal digits, formatted from an integer"
            }
            Self::SatangOutOfRange { .. } => {
                "Derive satang as the rounded hundredths of the fractional part (0-99)"
            }
            Self::InvalidAmount { .. } => {
                "Use a plain decimal such as 1234, 1,234.50, -12.5 or ฿99"
            }
            Self::AmountOutOfRange { .. } => "Split the amount or use a smaller value",
            Self::TomlError(_) => "Check the TOML syntax of the examples file",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags and the examples file"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try --format text to rule out an output encoding problem"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Cannot read amount: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BahtTextError>;
