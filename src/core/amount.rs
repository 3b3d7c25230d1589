//! Turning decimal amounts into [`BahtAmount`]s.
//!
//! The spelling code only ever sees whole numbers. This module owns the
//! decimal arithmetic: parsing amount text, rounding to satang and
//! splitting off the whole-baht part.

use crate::core::magnitude::spell_signed;
use crate::domain::model::{BahtAmount, Numeral, Satang};
use crate::domain::ports::ThaiText;
use crate::utils::error::{BahtTextError, Result};
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;

static AMOUNT_PATTERN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn amount_pattern() -> Result<&'static Regex> {
    AMOUNT_PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^\s*(?P<sign>[-+])?\s*(?:฿|THB)?\s*(?P<int>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.(?P<frac>[0-9]+))?\s*(?:บาท|THB)?\s*$",
            )
        })
        .as_ref()
        .map_err(|e| BahtTextError::ConfigError {
            message: format!("amount pattern: {}", e),
        })
}

/// Amount text taken apart: sign, whole digits without separators and
/// the digits after the point.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AmountParts {
    negative: bool,
    whole: String,
    fraction: Option<String>,
}

fn split_amount_text(input: &str) -> Result<AmountParts> {
    let caps = amount_pattern()?
        .captures(input)
        .ok_or_else(|| BahtTextError::InvalidAmount {
            input: input.to_string(),
            reason: "expected a decimal number, optionally with ฿ or THB".to_string(),
        })?;

    Ok(AmountParts {
        negative: caps.name("sign").map(|m| m.as_str()) == Some("-"),
        whole: caps["int"].chars().filter(|c| *c != ',').collect(),
        fraction: caps.name("frac").map(|m| m.as_str().to_string()),
    })
}

/// Parse amount text such as `1234`, `1,234.50`, `-12.5`, `฿99` or
/// `THB 1000` into a decimal.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let parts = split_amount_text(input)?;

    let mut normalized = String::new();
    if parts.negative {
        normalized.push('-');
    }
    normalized.push_str(&parts.whole);
    if let Some(fraction) = &parts.fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).map_err(|e| BahtTextError::AmountOutOfRange {
        value: format!("{} ({})", input.trim(), e),
    })
}

/// Split a decimal into whole baht and satang.
///
/// The value is first rounded to two places, half away from zero, so
/// 0.995 becomes 1 baht even rather than 100 satang. Satang are always
/// non-negative; the sign is kept on the amount even when the whole-baht
/// part is zero, so -0.50 stays negative.
pub fn split_decimal(value: Decimal) -> Result<BahtAmount> {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();

    let baht = whole
        .to_i128()
        .ok_or_else(|| BahtTextError::AmountOutOfRange {
            value: value.to_string(),
        })?;

    let hundredths = ((rounded - whole).abs() * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| BahtTextError::AmountOutOfRange {
            value: value.to_string(),
        })?;
    let satang = Satang::try_from(hundredths)?;

    if rounded != value {
        tracing::debug!("Rounded {} to {}", value, rounded);
    }

    Ok(BahtAmount {
        baht,
        satang,
        // -0.00 after rounding reads as plain zero
        negative: rounded.is_sign_negative() && !rounded.is_zero(),
    })
}

/// Read a decimal amount aloud in baht and satang.
pub fn convert_decimal_to_thai_text(value: Decimal) -> Result<String> {
    Ok(split_decimal(value)?.to_thai_text())
}

/// Parse amount text and read it aloud in baht and satang.
pub fn convert_amount_text(input: &str) -> Result<String> {
    let value = parse_amount(input)?;
    tracing::debug!("Parsed \"{}\" as {}", input, value);
    convert_decimal_to_thai_text(value)
}

/// Parse amount text and spell its whole part as a plain number, without
/// currency words. A fractional part other than zeros is rejected. The
/// digits go straight to the speller, so there is no length limit.
pub fn convert_integer_text(input: &str) -> Result<String> {
    let parts = split_amount_text(input)?;
    if parts
        .fraction
        .as_deref()
        .is_some_and(|f| f.chars().any(|c| c != '0'))
    {
        return Err(BahtTextError::InvalidAmount {
            input: input.to_string(),
            reason: "integer mode does not accept a fractional part".to_string(),
        });
    }

    let numeral = Numeral::parse(&parts.whole)?;
    Ok(spell_signed(parts.negative, &numeral))
}
