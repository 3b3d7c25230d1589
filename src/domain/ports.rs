/// Anything that can be read aloud in Thai.
///
/// Implemented for all primitive integers (plain number words) and for
/// [`BahtAmount`](crate::domain::model::BahtAmount) (number words plus
/// currency units). Implementations are pure and may be called from any
/// thread.
pub trait ThaiText {
    fn to_thai_text(&self) -> String;
}
