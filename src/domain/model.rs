use crate::domain::lexicon::GROUP_SIZE;
use crate::utils::error::{BahtTextError, Result};
use std::fmt;

/// Canonical decimal digits of a non-negative magnitude.
///
/// Only ASCII digits, no sign, at least one digit. Leading zeros are
/// stripped on construction so `"007"` and `"7"` are the same numeral.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(BahtTextError::EmptyNumeral);
        }
        check_digits(input)?;

        let trimmed = input.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Self("0".to_string()))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn from_unsigned(value: u128) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a numeral has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }
}

impl From<u128> for Numeral {
    fn from(value: u128) -> Self {
        Self::from_unsigned(value)
    }
}

impl From<usize> for Numeral {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One to six digits spelled as a standalone number. Leading zeros are
/// kept: interior groups such as `"000001"` depend on their full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup<'a>(&'a str);

impl<'a> DigitGroup<'a> {
    pub fn parse(input: &'a str) -> Result<Self> {
        if input.is_empty() {
            return Err(BahtTextError::EmptyNumeral);
        }
        if input.len() > GROUP_SIZE {
            return Err(BahtTextError::GroupTooLong {
                input: input.to_string(),
                len: input.len(),
            });
        }
        check_digits(input)?;
        Ok(Self(input))
    }

    /// Slice of a `Numeral` that is already known to be digits only.
    pub(crate) fn from_numeral_slice(slice: &'a str) -> Self {
        debug_assert!(!slice.is_empty() && slice.len() <= GROUP_SIZE);
        debug_assert!(slice.bytes().all(|b| b.is_ascii_digit()));
        Self(slice)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(position, digit)` pairs from left to right, position 0 being units.
    pub fn digits(&self) -> impl Iterator<Item = (usize, u8)> + 'a {
        let digits = self.0;
        let len = digits.len();
        digits
            .bytes()
            .enumerate()
            .map(move |(i, b)| (len - i - 1, b - b'0'))
    }
}

/// Hundredths of a baht, always in `0..=99` and never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Satang(u8);

impl Satang {
    pub const MAX: u8 = 99;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(BahtTextError::SatangOutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Satang {
    type Error = BahtTextError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| BahtTextError::SatangOutOfRange { value })
            .and_then(Self::new)
    }
}

/// A monetary amount split the way it is read aloud: a signed whole-baht
/// part and a non-negative satang part.
///
/// `negative` carries the sign of the whole amount. It differs from
/// `baht < 0` only for amounts between -1 and 0, where the baht part is
/// zero and the sign would otherwise be lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BahtAmount {
    pub baht: i128,
    pub satang: Satang,
    pub negative: bool,
}

impl BahtAmount {
    pub fn new(baht: i128, satang: u8) -> Result<Self> {
        Ok(Self {
            baht,
            satang: Satang::new(satang)?,
            negative: baht < 0,
        })
    }

    /// An amount below zero with no whole baht, such as -0.50.
    pub fn negative_fraction(satang: u8) -> Result<Self> {
        let satang = Satang::new(satang)?;
        Ok(Self {
            baht: 0,
            satang,
            negative: !satang.is_zero(),
        })
    }
}

fn check_digits(input: &str) -> Result<()> {
    match input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, found)) => Err(BahtTextError::InvalidDigit {
            input: input.to_string(),
            position,
            found,
        }),
        None => Ok(()),
    }
}
