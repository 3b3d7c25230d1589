pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ExamplesConfig;
pub use core::{
    amount::{convert_amount_text, convert_decimal_to_thai_text, parse_amount, split_decimal},
    currency::format_currency_text,
    digit_group::convert_group,
    magnitude::{convert_magnitude_to_thai, convert_unsigned_to_thai, spell_numeral, spell_signed},
    report::{Conversion, OutputFormat},
};
pub use domain::{
    model::{BahtAmount, DigitGroup, Numeral, Satang},
    ports::ThaiText,
};
pub use utils::error::{BahtTextError, Result};
