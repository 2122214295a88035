// ============================================================================
// Amount Model
// Exact decimal input value: sign, integer digits, two fraction digits
// ============================================================================
//
// This module provides:
// - Amount: the parsed input value, constructed once and read-only after
// - Sign: -1 / 0 / +1
// - SpellError / SpellResult: error types for construction and spelling
//
// Design principles:
// - No binary floating-point anywhere; digits come from exact integer
//   division/modulo or directly from the decimal text
// - Fraction input beyond two decimal places is truncated, never rounded
// - Magnitudes at or above 10^64 are rejected, not silently mis-spelled

mod errors;

pub use errors::{SpellError, SpellResult};

use crate::tables::MAX_INTEGER_DIGITS;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit storage, least-significant first. Magnitudes below 10^20 stay
/// inline; the ceiling bounds the spilled case at 64 digits.
pub(crate) type Digits = SmallVec<[u8; 20]>;

/// Sign of an amount (-1 / 0 / +1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// An exact decimal monetary amount.
///
/// Holds the sign, the integer magnitude as base-10 digits
/// (least-significant first), and the two fraction digits
/// (jiao = tenths, fen = hundredths).
///
/// # Example
/// ```
/// use rmb_speller::amount::Amount;
///
/// let amount: Amount = "-1234.567".parse().unwrap();
/// assert!(amount.is_negative());
/// assert_eq!(amount.jiao(), 5);
/// assert_eq!(amount.fen(), 6); // third decimal truncated, not rounded
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount {
    sign: Sign,
    /// Least-significant first, canonical (no high zero digits beyond `[0]`)
    integer_digits: Digits,
    /// `[jiao, fen]`
    fraction_digits: [u8; 2],
}

impl Amount {
    /// Build an amount from raw parts.
    ///
    /// Digits are least-significant first; high zero digits are trimmed to
    /// the canonical form. An amount whose digits are all zero normalizes to
    /// `Sign::Zero` regardless of `negative`.
    ///
    /// # Errors
    /// Returns `MagnitudeExceeded` if the integer magnitude is >= 10^64.
    pub(crate) fn from_parts(
        negative: bool,
        mut integer_digits: Digits,
        fraction_digits: [u8; 2],
    ) -> SpellResult<Self> {
        while integer_digits.len() > 1 && integer_digits.last() == Some(&0) {
            integer_digits.pop();
        }
        if integer_digits.is_empty() {
            integer_digits.push(0);
        }
        if integer_digits.len() > MAX_INTEGER_DIGITS {
            return Err(SpellError::MagnitudeExceeded);
        }
        debug_assert!(integer_digits.iter().all(|d| *d < 10));
        debug_assert!(fraction_digits.iter().all(|d| *d < 10));

        let is_zero =
            integer_digits.iter().all(|d| *d == 0) && fraction_digits == [0, 0];
        let sign = if is_zero {
            Sign::Zero
        } else if negative {
            Sign::Negative
        } else {
            Sign::Positive
        };

        Ok(Self {
            sign,
            integer_digits,
            fraction_digits,
        })
    }

    /// Create from an integer number of yuan.
    #[inline]
    pub fn from_integer(value: i128) -> SpellResult<Self> {
        Self::from_parts(value < 0, extract_digits(value.unsigned_abs()), [0, 0])
    }

    /// Create from a `rust_decimal::Decimal`.
    ///
    /// The value is split into integer and fractional magnitude with exact
    /// integer arithmetic on the mantissa; the fraction is truncated to two
    /// digits.
    ///
    /// # Errors
    /// Returns `MagnitudeExceeded` if the integer magnitude is >= 10^64.
    pub fn from_decimal(value: Decimal) -> SpellResult<Self> {
        let mantissa = value.mantissa().unsigned_abs();
        // scale is at most 28, so 10^scale fits a u128 exactly
        let pow = 10u128.pow(value.scale());
        let integer = mantissa / pow;
        let remainder = mantissa % pow;

        // first two fractional digits by successive exact division
        let mut fraction = [0u8; 2];
        let mut divisor = pow;
        for slot in fraction.iter_mut() {
            if divisor == 1 {
                break;
            }
            divisor /= 10;
            *slot = ((remainder / divisor) % 10) as u8;
        }

        Self::from_parts(
            value.is_sign_negative(),
            extract_digits(integer),
            fraction,
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sign of the amount.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Check if the amount is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Check if the amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Integer magnitude digits, least-significant first.
    #[inline]
    pub(crate) fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    /// Check if the integer part is zero (the fraction may still be nonzero).
    #[inline]
    pub fn integer_is_zero(&self) -> bool {
        self.integer_digits.iter().all(|d| *d == 0)
    }

    /// The tenths digit (jiao).
    #[inline]
    pub fn jiao(&self) -> u8 {
        self.fraction_digits[0]
    }

    /// The hundredths digit (fen).
    #[inline]
    pub fn fen(&self) -> u8 {
        self.fraction_digits[1]
    }
}

/// Extract the base-10 digits of `value`, least-significant first, using
/// exact integer division and modulo. A value of 0 yields a single 0 digit.
pub(crate) fn extract_digits(mut value: u128) -> Digits {
    let mut digits = Digits::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits
}

// ============================================================================
// Parsing and Display
// ============================================================================

impl FromStr for Amount {
    type Err = SpellError;

    /// Parse from a decimal string: `[-]digits[.digits]`.
    ///
    /// # Examples
    /// - "1234.56" -> 1234 yuan, 5 jiao, 6 fen
    /// - "-0.5"    -> negative, 5 jiao
    /// - "0.999"   -> 9 jiao, 9 fen (truncated)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        // "", "." and "-" carry no digits at all
        if int_str.is_empty() && frac_str.map_or(true, str::is_empty) {
            return Err(SpellError::InvalidAmount);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SpellError::InvalidAmount);
        }

        let integer_digits: Digits =
            int_str.bytes().rev().map(|b| b - b'0').collect();

        let mut fraction_digits = [0u8; 2];
        if let Some(frac) = frac_str {
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SpellError::InvalidAmount);
            }
            for (slot, b) in fraction_digits.iter_mut().zip(frac.bytes()) {
                *slot = b - b'0';
            }
        }

        Self::from_parts(negative, integer_digits, fraction_digits)
    }
}

impl TryFrom<&str> for Amount {
    type Error = SpellError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SpellError;

    #[inline]
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl fmt::Display for Amount {
    /// Canonical `[-]integer.ff` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        for digit in self.integer_digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        write!(f, ".{}{}", self.fraction_digits[0], self.fraction_digits[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let amount: Amount = "1234.56".parse().unwrap();
        assert_eq!(amount.sign(), Sign::Positive);
        assert_eq!(amount.integer_digits(), &[4, 3, 2, 1]);
        assert_eq!(amount.jiao(), 5);
        assert_eq!(amount.fen(), 6);
    }

    #[test]
    fn test_parse_shapes() {
        let whole: Amount = "42".parse().unwrap();
        assert_eq!(whole.to_string(), "42.00");

        let bare_fraction: Amount = ".5".parse().unwrap();
        assert_eq!(bare_fraction.to_string(), "0.50");

        let trailing_point: Amount = "7.".parse().unwrap();
        assert_eq!(trailing_point.to_string(), "7.00");

        let padded: Amount = "007.1".parse().unwrap();
        assert_eq!(padded.integer_digits(), &[7]);
    }

    #[test]
    fn test_parse_truncates_fraction() {
        let amount: Amount = "0.999".parse().unwrap();
        assert_eq!((amount.jiao(), amount.fen()), (9, 9));

        let amount: Amount = "1.019".parse().unwrap();
        assert_eq!((amount.jiao(), amount.fen()), (0, 1));
    }

    #[test]
    fn test_parse_invalid() {
        for raw in ["", ".", "-", "-.", "12a.3", "1.2x", "1,5", "--1"] {
            assert_eq!(
                raw.parse::<Amount>(),
                Err(SpellError::InvalidAmount),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_negative_zero_normalizes() {
        let amount: Amount = "-0.00".parse().unwrap();
        assert_eq!(amount.sign(), Sign::Zero);
        assert!(!amount.is_negative());
    }

    #[test]
    fn test_magnitude_ceiling() {
        let max = "9".repeat(MAX_INTEGER_DIGITS);
        assert!(max.parse::<Amount>().is_ok());

        let over = format!("1{}", "0".repeat(MAX_INTEGER_DIGITS));
        assert_eq!(
            over.parse::<Amount>(),
            Err(SpellError::MagnitudeExceeded)
        );
    }

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits(0).as_slice(), &[0]);
        assert_eq!(extract_digits(7).as_slice(), &[7]);
        assert_eq!(extract_digits(10086).as_slice(), &[6, 8, 0, 0, 1]);
    }

    #[test]
    fn test_from_integer() {
        let amount = Amount::from_integer(-100).unwrap();
        assert!(amount.is_negative());
        assert_eq!(amount.to_string(), "-100.00");

        assert_eq!(Amount::from_integer(0).unwrap().sign(), Sign::Zero);
    }

    #[test]
    fn test_from_decimal() {
        let amount = Amount::from_decimal(Decimal::new(123456, 2)).unwrap();
        assert_eq!(amount.to_string(), "1234.56");

        // one fractional digit
        let amount = Amount::from_decimal(Decimal::new(5, 1)).unwrap();
        assert_eq!((amount.jiao(), amount.fen()), (5, 0));

        // truncation of the third fractional digit
        let amount = Amount::from_decimal(Decimal::new(1239, 3)).unwrap();
        assert_eq!((amount.jiao(), amount.fen()), (2, 3));

        // no fractional digits
        let amount = Amount::from_decimal(Decimal::from(50000)).unwrap();
        assert_eq!(amount.to_string(), "50000.00");

        let negative = Amount::from_decimal(Decimal::new(-10000, 2)).unwrap();
        assert_eq!(negative.to_string(), "-100.00");
    }

    #[test]
    fn test_display_roundtrip() {
        for raw in ["0.00", "1.00", "1234.56", "-100.00", "10000.08"] {
            let amount: Amount = raw.parse().unwrap();
            assert_eq!(amount.to_string(), raw);
        }
    }
}
