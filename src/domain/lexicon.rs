//! Thai number and currency words.
//!
//! All tables are immutable `const` data, so they can be shared freely
//! across threads.

/// Digit words indexed by digit value. Zero is silent inside a number;
/// a whole-number zero is spelled with [`ZERO`] instead.
pub const THAI_DIGITS: [&str; 10] = [
    "",      // 0
    "หนึ่ง", // 1
    "สอง",   // 2
    "สาม",   // 3
    "สี่",   // 4
    "ห้า",   // 5
    "หก",    // 6
    "เจ็ด",  // 7
    "แปด",   // 8
    "เก้า",  // 9
];

/// Place words indexed by position inside a six-digit group
/// (units, tens, hundreds, thousands, ten-thousands, hundred-thousands).
pub const THAI_PLACES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Number of digits in one group.
pub const GROUP_SIZE: usize = THAI_PLACES.len();

/// 10^6, emitted between six-digit groups.
pub const GROUP_SEPARATOR: &str = "ล้าน";

pub const ZERO: &str = "ศูนย์";
pub const NEGATIVE: &str = "ลบ";

/// Trailing one in a multi-digit group (21 is ยี่สิบเอ็ด, not ยี่สิบหนึ่ง).
pub const TRAILING_ONE: &str = "เอ็ด";

/// Two in the tens place.
pub const TWENTY: &str = "ยี่สิบ";

pub const BAHT: &str = "บาท";
pub const SATANG: &str = "สตางค์";

/// Appended after บาท when there are no satang.
pub const EVEN: &str = "ถ้วน";

/// Word for a single digit value.
pub fn digit_word(digit: u8) -> &'static str {
    THAI_DIGITS[usize::from(digit % 10)]
}

/// Place word for a position inside a group, empty for the units place.
pub fn place_word(position: usize) -> &'static str {
    THAI_PLACES.get(position).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_digit_is_silent() {
        assert_eq!(digit_word(0), "");
        assert_eq!(digit_word(1), "หนึ่ง");
        assert_eq!(digit_word(9), "เก้า");
    }

    #[test]
    fn test_place_words_cover_one_group() {
        assert_eq!(GROUP_SIZE, 6);
        assert_eq!(place_word(0), "");
        assert_eq!(place_word(1), "สิบ");
        assert_eq!(place_word(5), "แสน");
        assert_eq!(place_word(6), "");
    }
}
