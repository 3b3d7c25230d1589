//! Spelling of whole numbers of any length.
//!
//! Numbers up to six digits are a single group. Longer numbers are cut
//! into six-digit groups from the right and joined with ล้าน, so a
//! trillion reads หนึ่งล้านล้าน.

use crate::core::digit_group::convert_group;
use crate::domain::lexicon::{GROUP_SEPARATOR, GROUP_SIZE, NEGATIVE, ZERO};
use crate::domain::model::{DigitGroup, Numeral};
use crate::domain::ports::ThaiText;

/// Six-digit groups of a numeral, most significant first. Only the
/// leftmost group can be shorter than six digits.
pub fn digit_groups(numeral: &Numeral) -> Vec<DigitGroup<'_>> {
    let digits = numeral.as_str();
    let head = match digits.len() % GROUP_SIZE {
        0 => GROUP_SIZE,
        n => n,
    };

    let mut groups = vec![DigitGroup::from_numeral_slice(&digits[..head])];
    let mut start = head;
    while start < digits.len() {
        groups.push(DigitGroup::from_numeral_slice(
            &digits[start..start + GROUP_SIZE],
        ));
        start += GROUP_SIZE;
    }
    groups
}

/// Spell a non-negative numeral.
///
/// Every group except the last is followed by ล้าน, including all-zero
/// interior groups, so 1_000000_000001 reads หนึ่งล้านล้านเอ็ด.
pub fn spell_numeral(numeral: &Numeral) -> String {
    if numeral.is_zero() {
        return ZERO.to_string();
    }

    let groups = digit_groups(numeral);
    tracing::trace!(
        digits = numeral.len(),
        groups = groups.len(),
        "spelling numeral"
    );

    let last = groups.len() - 1;
    let mut out = String::new();
    for (i, group) in groups.into_iter().enumerate() {
        out.push_str(&convert_group(group));
        if i < last {
            out.push_str(GROUP_SEPARATOR);
        }
    }
    out
}

pub fn convert_unsigned_to_thai(value: u128) -> String {
    spell_numeral(&Numeral::from_unsigned(value))
}

/// Spell a magnitude with an optional ลบ prefix. Zero never takes the
/// prefix, so `-0` reads ศูนย์.
pub fn spell_signed(negative: bool, magnitude: &Numeral) -> String {
    let text = spell_numeral(magnitude);
    if negative && !magnitude.is_zero() {
        format!("{}{}", NEGATIVE, text)
    } else {
        text
    }
}

/// Spell a signed integer, prefixing ลบ for negative values.
pub fn convert_magnitude_to_thai(value: i128) -> String {
    spell_signed(value < 0, &Numeral::from_unsigned(value.unsigned_abs()))
}

macro_rules! impl_thai_text_signed {
    ($($t:ty),*) => {
        $(
            impl ThaiText for $t {
                fn to_thai_text(&self) -> String {
                    convert_magnitude_to_thai(i128::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_thai_text_unsigned {
    ($($t:ty),*) => {
        $(
            impl ThaiText for $t {
                fn to_thai_text(&self) -> String {
                    convert_unsigned_to_thai(u128::from(*self))
                }
            }
        )*
    };
}

impl_thai_text_signed!(i8, i16, i32, i64, i128);
impl_thai_text_unsigned!(u8, u16, u32, u64, u128);

impl ThaiText for isize {
    fn to_thai_text(&self) -> String {
        spell_signed(*self < 0, &Numeral::from(self.unsigned_abs()))
    }
}

impl ThaiText for usize {
    fn to_thai_text(&self) -> String {
        spell_numeral(&Numeral::from(*self))
    }
}

impl ThaiText for Numeral {
    fn to_thai_text(&self) -> String {
        spell_numeral(self)
    }
}
