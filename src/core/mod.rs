pub mod amount;
pub mod currency;
pub mod demo;
pub mod digit_group;
pub mod magnitude;
pub mod report;

pub use crate::domain::model::{BahtAmount, DigitGroup, Numeral, Satang};
pub use crate::domain::ports::ThaiText;
pub use crate::utils::error::Result;
