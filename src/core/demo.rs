use crate::core::amount::{convert_amount_text, convert_integer_text};
use crate::core::report::Conversion;
use crate::utils::error::Result;

/// Amounts printed by `--demo`, with their expected readings.
pub const DEMO_CASES: &[(&str, &str)] = &[
    ("1234", "หนึ่งพันสองร้อยสามสิบสี่บาทถ้วน"),
    ("33333.75", "สามหมื่นสามพันสามร้อยสามสิบสามบาทเจ็ดสิบห้าสตางค์"),
    ("0", "ศูนย์บาทถ้วน"),
    ("1", "หนึ่งบาทถ้วน"),
    ("21", "ยี่สิบเอ็ดบาทถ้วน"),
    ("100", "หนึ่งร้อยบาทถ้วน"),
    ("1000000", "หนึ่งล้านบาทถ้วน"),
    ("100000000", "หนึ่งร้อยล้านบาทถ้วน"),
    ("101.01", "หนึ่งร้อยเอ็ดบาทหนึ่งสตางค์"),
];

/// Convert one amount, as currency or as a plain integer, and compare it
/// with the expected reading when one is given.
pub fn evaluate(input: &str, expected: Option<&str>, integer: bool) -> Result<Conversion> {
    let output = if integer {
        convert_integer_text(input)?
    } else {
        convert_amount_text(input)?
    };

    let conversion = Conversion::new(input.trim(), output);
    Ok(match expected {
        Some(expected) => conversion.with_expected(expected),
        None => conversion,
    })
}

pub fn run_demo() -> Result<Vec<Conversion>> {
    DEMO_CASES
        .iter()
        .map(|(amount, expected)| evaluate(amount, Some(*expected), false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::mismatches;

    #[test]
    fn test_demo_cases_all_match() {
        let records = run_demo().unwrap();
        assert_eq!(records.len(), DEMO_CASES.len());
        assert_eq!(mismatches(&records), 0);
    }

    #[test]
    fn test_evaluate_integer_mode() {
        let record = evaluate("1000000000000", Some("หนึ่งล้านล้าน"), true).unwrap();
        assert_eq!(record.matched, Some(true));
    }

    #[test]
    fn test_evaluate_reports_mismatch() {
        let record = evaluate("2", Some("หนึ่งบาทถ้วน"), false).unwrap();
        assert_eq!(record.output, "สองบาทถ้วน");
        assert_eq!(record.matched, Some(false));
    }
}
