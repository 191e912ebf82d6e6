//! Text conversion: decimal/hex/binary literals and radix 2..=36 numerals.
//!
//! Non-decimal digit runs are converted into limbs by repeated division of
//! the base-B digit vector by the limb radix, so precision never depends on
//! a native integer width.

use std::str::FromStr;

use crate::constants::{LIMB_DIGITS, LIMB_RADIX_U64, MAX_RADIX, MIN_RADIX};
use crate::error::ArithError;
use crate::integer::ArbitraryInt;
use crate::limbs;

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl ArbitraryInt {
    /// Parse a literal: decimal, `0x`/`0X` hexadecimal or `0b`/`0B` binary.
    ///
    /// Surrounding whitespace is ignored. A `-` sign may follow the prefix
    /// (`0x-ff`) or precede it (`-0xff`).
    ///
    /// # Example
    /// ```
    /// use apcalc_core::ArbitraryInt;
    ///
    /// let v = ArbitraryInt::parse("0xFF").unwrap();
    /// assert_eq!(v.to_string(), "255");
    /// ```
    pub fn parse(text: &str) -> Result<Self, ArithError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ArithError::InvalidFormat("empty input".into()));
        }
        let invalid = || ArithError::InvalidFormat(trimmed.to_string());

        let (outer_negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) if radix_prefix(rest).is_some() => (true, rest),
            _ => (false, trimmed),
        };
        let (radix, rest) = radix_prefix(body).unwrap_or((10, body));
        let (inner_negative, run) = match rest.strip_prefix('-') {
            Some(run) => (true, run),
            None => (false, rest),
        };
        if outer_negative && inner_negative {
            return Err(invalid());
        }

        let magnitude = magnitude_from_digits(run, radix).ok_or_else(invalid)?;
        Ok(Self::from_limbs(magnitude, outer_negative || inner_negative))
    }

    /// Parse a numeral in `radix` (2..=36, digits `0-9a-z`, case-insensitive)
    /// with an optional leading `-`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ArithError> {
        check_radix(radix)?;
        let trimmed = text.trim();
        let (negative, run) = match trimmed.strip_prefix('-') {
            Some(run) => (true, run),
            None => (false, trimmed),
        };
        let magnitude = magnitude_from_digits(run, radix)
            .ok_or_else(|| ArithError::InvalidFormat(format!("{trimmed} (base {radix})")))?;
        Ok(Self::from_limbs(magnitude, negative))
    }

    /// Render in `radix` (2..=36) with lowercase digits.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, ArithError> {
        check_radix(radix)?;
        if radix == 10 {
            return Ok(self.to_string());
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let (chunk_divisor, chunk_digits) = chunk_for_radix(radix);
        let mut reversed = Vec::with_capacity(self.digit_count() * 4);
        let mut magnitude = self.limbs().to_vec();
        while !limbs::is_zero(&magnitude) {
            let (quotient, mut rem) = limbs::div_small(&magnitude, chunk_divisor);
            for _ in 0..chunk_digits {
                reversed.push(DIGIT_CHARS[(rem % radix) as usize]);
                rem /= radix;
            }
            magnitude = quotient;
        }
        while reversed.last() == Some(&b'0') {
            reversed.pop();
        }
        if self.is_negative() {
            reversed.push(b'-');
        }
        reversed.reverse();
        Ok(reversed.into_iter().map(char::from).collect())
    }
}

impl FromStr for ArbitraryInt {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

pub(crate) fn check_radix(radix: u32) -> Result<(), ArithError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ArithError::InvalidBase(radix))
    }
}

/// Split off a `0x`/`0b` prefix (either case).
fn radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    match bytes[1] {
        b'x' | b'X' => Some((16, &text[2..])),
        b'b' | b'B' => Some((2, &text[2..])),
        _ => None,
    }
}

/// Largest power of `radix` that fits a `u32`, and its exponent.
fn chunk_for_radix(radix: u32) -> (u32, usize) {
    let mut power = u64::from(radix);
    let mut digits = 1;
    while power * u64::from(radix) <= u64::from(u32::MAX) {
        power *= u64::from(radix);
        digits += 1;
    }
    (u32::try_from(power).unwrap_or(radix), digits)
}

/// Convert a digit run into trimmed limbs, or `None` if the run is empty or
/// contains a character outside the radix alphabet.
#[allow(clippy::cast_possible_truncation)]
fn magnitude_from_digits(run: &str, radix: u32) -> Option<Vec<u32>> {
    if run.is_empty() {
        return None;
    }
    let digits: Vec<u32> = run
        .chars()
        .map(|c| c.to_digit(radix))
        .collect::<Option<_>>()?;
    let Some(start) = digits.iter().position(|&d| d != 0) else {
        return Some(vec![0]);
    };
    let digits = &digits[start..];

    if radix == 10 {
        return Some(
            digits
                .rchunks(LIMB_DIGITS)
                .map(|chunk| chunk.iter().fold(0, |acc, &d| acc * 10 + d))
                .collect(),
        );
    }

    // Most-significant-first base-`radix` digits, divided by 10^9 until empty.
    let mut number = digits.to_vec();
    let mut limbs = Vec::with_capacity(number.len() / LIMB_DIGITS + 1);
    while !number.is_empty() {
        let mut quotient = Vec::with_capacity(number.len());
        let mut rem = 0u64;
        for &d in &number {
            let cur = rem * u64::from(radix) + u64::from(d);
            let q = (cur / LIMB_RADIX_U64) as u32;
            rem = cur % LIMB_RADIX_U64;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q);
            }
        }
        limbs.push(rem as u32);
        number = quotient;
    }
    limbs::trim(&mut limbs);
    Some(limbs)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::integer::ArbitraryInt;

    impl Serialize for ArbitraryInt {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ArbitraryInt {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            ArbitraryInt::parse(&text).map_err(D::Error::custom)
        }
    }
}
