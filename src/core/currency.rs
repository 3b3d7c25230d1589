use crate::core::magnitude::convert_unsigned_to_thai;
use crate::domain::lexicon::{BAHT, EVEN, NEGATIVE, SATANG};
use crate::domain::model::BahtAmount;
use crate::domain::ports::ThaiText;
use crate::utils::error::Result;

/// Read a baht amount aloud: the baht words, บาท, then either ถ้วน or the
/// satang words followed by สตางค์.
///
/// `satang` must already be the rounded hundredths of the fractional part.
/// Values above 99 are rejected rather than spelled.
pub fn format_currency_text(baht: i128, satang: u8) -> Result<String> {
    let amount = BahtAmount::new(baht, satang)?;
    Ok(render(&amount))
}

fn render(amount: &BahtAmount) -> String {
    let satang = amount.satang;
    let mut out = String::new();
    if amount.negative {
        out.push_str(NEGATIVE);
    }
    out.push_str(&convert_unsigned_to_thai(amount.baht.unsigned_abs()));
    out.push_str(BAHT);
    if satang.is_zero() {
        out.push_str(EVEN);
    } else {
        out.push_str(&convert_unsigned_to_thai(u128::from(satang.value())));
        out.push_str(SATANG);
    }
    out
}

impl ThaiText for BahtAmount {
    fn to_thai_text(&self) -> String {
        render(self)
    }
}
