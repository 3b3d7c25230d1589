//! Spelling of one group of up to six digits.
//!
//! Each non-zero digit is classified by its position into a [`Fragment`]
//! and the fragments are concatenated left to right. The irregular Thai
//! forms live entirely in [`Fragment::classify`].

use crate::domain::lexicon::{digit_word, place_word, TRAILING_ONE, TWENTY};
use crate::domain::model::DigitGroup;

/// What a single digit contributes to the spoken group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fragment {
    Silent,
    /// 1 in the tens place: สิบ alone.
    Ten,
    /// 2 in the tens place: ยี่สิบ.
    Twenty,
    /// 1 in the units place of a multi-digit group: เอ็ด.
    TrailingOne,
    /// Digit word only (units place).
    Digit(u8),
    /// Digit word followed by the place word.
    Placed { digit: u8, position: usize },
}

impl Fragment {
    fn classify(position: usize, digit: u8, group_len: usize) -> Self {
        match (position, digit) {
            (_, 0) => Self::Silent,
            (1, 1) => Self::Ten,
            (1, 2) => Self::Twenty,
            (0, 1) if group_len > 1 => Self::TrailingOne,
            (0, d) => Self::Digit(d),
            (p, d) => Self::Placed {
                digit: d,
                position: p,
            },
        }
    }

    fn write_to(self, out: &mut String) {
        match self {
            Self::Silent => {}
            Self::Ten => out.push_str(place_word(1)),
            Self::Twenty => out.push_str(TWENTY),
            Self::TrailingOne => out.push_str(TRAILING_ONE),
            Self::Digit(d) => out.push_str(digit_word(d)),
            Self::Placed { digit, position } => {
                out.push_str(digit_word(digit));
                out.push_str(place_word(position));
            }
        }
    }
}

/// Spell a digit group as a standalone number.
///
/// A single digit is returned as its plain word, so `"1"` reads หนึ่ง and
/// not เอ็ด. An all-zero group yields an empty string; whole-number zero is
/// the caller's concern.
pub fn convert_group(group: DigitGroup<'_>) -> String {
    if group.len() == 1 {
        return group
            .digits()
            .next()
            .map(|(_, d)| digit_word(d).to_string())
            .unwrap_or_default();
    }

    let group_len = group.len();
    let mut out = String::new();
    for (position, digit) in group.digits() {
        Fragment::classify(position, digit, group_len).write_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(digits: &str) -> String {
        convert_group(DigitGroup::parse(digits).unwrap())
    }

    #[test]
    fn test_single_digits_use_plain_words() {
        assert_eq!(spell("0"), "");
        assert_eq!(spell("1"), "หนึ่ง");
        assert_eq!(spell("5"), "ห้า");
    }

    #[test]
    fn test_tens_irregularities() {
        assert_eq!(spell("10"), "สิบ");
        assert_eq!(spell("11"), "สิบเอ็ด");
        assert_eq!(spell("20"), "ยี่สิบ");
        assert_eq!(spell("21"), "ยี่สิบเอ็ด");
        assert_eq!(spell("35"), "สามสิบห้า");
        assert_eq!(spell("99"), "เก้าสิบเก้า");
    }

    #[test]
    fn test_trailing_one_after_hundreds() {
        assert_eq!(spell("101"), "หนึ่งร้อยเอ็ด");
        assert_eq!(spell("100"), "หนึ่งร้อย");
        assert_eq!(spell("111"), "หนึ่งร้อยสิบเอ็ด");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(spell("123400"), "หนึ่งแสนสองหมื่นสามพันสี่ร้อย");
        assert_eq!(spell("999999"), "เก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้า");
        assert_eq!(spell("12345"), "หนึ่งหมื่นสองพันสามร้อยสี่สิบห้า");
    }

    #[test]
    fn test_padded_groups() {
        assert_eq!(spell("000000"), "");
        assert_eq!(spell("000001"), "เอ็ด");
        assert_eq!(spell("000021"), "ยี่สิบเอ็ด");
        assert_eq!(spell("020000"), "สองหมื่น");
    }

    #[test]
    fn test_classify_rule_table() {
        assert_eq!(Fragment::classify(3, 0, 4), Fragment::Silent);
        assert_eq!(Fragment::classify(1, 1, 2), Fragment::Ten);
        assert_eq!(Fragment::classify(1, 2, 2), Fragment::Twenty);
        assert_eq!(Fragment::classify(0, 1, 2), Fragment::TrailingOne);
        assert_eq!(Fragment::classify(0, 1, 1), Fragment::Digit(1));
        assert_eq!(
            Fragment::classify(2, 2, 3),
            Fragment::Placed { digit: 2, position: 2 }
        );
    }
}
