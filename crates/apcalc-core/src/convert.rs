//! Base conversion of an integer's decimal digit string.

use crate::error::ArithError;
use crate::integer::ArbitraryInt;
use crate::parse::check_radix;

impl ArbitraryInt {
    /// Reinterpret this value's decimal text as a `from_base` numeral,
    /// render that numeral in `to_base`, and read the rendering back as
    /// decimal.
    ///
    /// `255` converted from base 16 to base 10 reads "255" as hex and
    /// yields `597`. Fails with `ConversionFailure` when the decimal text
    /// holds a digit that is invalid in `from_base`, or when the `to_base`
    /// rendering contains letters.
    pub fn convert_base(&self, from_base: u32, to_base: u32) -> Result<Self, ArithError> {
        check_radix(from_base)?;
        check_radix(to_base)?;

        let text = self.to_string();
        let value = Self::from_str_radix(&text, from_base).map_err(|_| {
            ArithError::ConversionFailure(format!("'{text}' is not a base-{from_base} numeral"))
        })?;
        let rendered = value.to_str_radix(to_base)?;
        Self::from_str_radix(&rendered, 10).map_err(|_| {
            ArithError::ConversionFailure(format!(
                "base-{to_base} form '{rendered}' is not a decimal numeral"
            ))
        })
    }
}
