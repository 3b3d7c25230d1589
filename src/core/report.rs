use crate::utils::error::{BahtTextError, Result};
use serde::{Deserialize, Serialize};

/// How conversion results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Thai text only, one line per amount
    #[default]
    Plain,
    /// Input / Output / Expected / Match blocks
    Text,
    Json,
    Csv,
}

/// One amount and its Thai reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub expected: Option<String>,
    pub matched: Option<bool>,
}

impl Conversion {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            expected: None,
            matched: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        self.matched = Some(self.output == expected);
        self.expected = Some(expected);
        self
    }
}

/// Records whose output differs from the expected text.
pub fn mismatches(records: &[Conversion]) -> usize {
    records.iter().filter(|r| r.matched == Some(false)).count()
}

pub fn render(records: &[Conversion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(records
            .iter()
            .map(|r| format!("{}\n", r.output))
            .collect()),
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(records)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => render_csv(records),
    }
}

fn render_text(records: &[Conversion]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("Input: {}\n", record.input));
        out.push_str(&format!("Output: {}\n", record.output));
        if let (Some(expected), Some(matched)) = (&record.expected, record.matched) {
            out.push_str(&format!("Expected: {}\n", expected));
            out.push_str(&format!("Match: {}\n", matched));
        }
        out.push('\n');
    }
    out
}

fn render_csv(records: &[Conversion]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BahtTextError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| BahtTextError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
