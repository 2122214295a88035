// ============================================================================
// Currency Reader
// Companion reader: parses spelled amounts back with the same glyph tables
// ============================================================================
//
// The reader exists to close the loop on the speller: any string produced by
// spell_currency must read back to the exact original amount. It tokenizes
// with the same static tables, matching multi-character large units greedily
// (恒河沙 must not be read as a bare 恒).

use crate::amount::{Amount, Digits, SpellError};
use crate::tables::{self, GROUP_SIZE};
use smallvec::smallvec;
use std::fmt;

// ============================================================================
// Errors
// ============================================================================

/// Errors produced while reading a spelled amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadError {
    /// Input is empty
    Empty,
    /// A character outside the output alphabet
    UnexpectedGlyph(char),
    /// Glyphs are valid but do not form a well-formed amount
    Malformed,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Empty => write!(f, "empty input"),
            ReadError::UnexpectedGlyph(glyph) => {
                write!(f, "unexpected glyph '{}'", glyph)
            },
            ReadError::Malformed => write!(f, "malformed amount spelling"),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<SpellError> for ReadError {
    // a read-back magnitude past the ceiling is not a well-formed spelling
    fn from(_: SpellError) -> Self {
        ReadError::Malformed
    }
}

/// Result type alias for reading operations
pub type ReadResult<T> = Result<T, ReadError>;

// ============================================================================
// Reading
// ============================================================================

/// Read a spelled currency string back into an [`Amount`].
///
/// # Example
/// ```
/// use rmb_speller::prelude::*;
///
/// let amount = read_currency("壹万元零捌分").unwrap();
/// assert_eq!(amount.to_string(), "10000.08");
/// ```
///
/// # Errors
/// Returns a [`ReadError`] when the input is empty, contains a glyph outside
/// the spelling alphabet, or is not a well-formed spelling.
pub fn read_currency(input: &str) -> ReadResult<Amount> {
    let spelling = input.trim();
    if spelling.is_empty() {
        return Err(ReadError::Empty);
    }

    let (negative, spelling) = match spelling.strip_prefix(tables::NEGATIVE) {
        Some(rest) => (true, rest),
        None => (false, spelling),
    };
    let spelling = spelling.strip_suffix(tables::EXACT).unwrap_or(spelling);
    if spelling.is_empty() {
        return Err(ReadError::Malformed);
    }

    let (integer_digits, fraction_part) = match spelling.split_once(tables::YUAN) {
        Some((integer_spelling, rest)) => {
            if integer_spelling.is_empty() {
                return Err(ReadError::Malformed);
            }
            (read_integer(integer_spelling)?, rest)
        },
        None => (smallvec![0], spelling),
    };

    let fraction_digits = read_fraction(fraction_part)?;
    Ok(Amount::from_parts(negative, integer_digits, fraction_digits)?)
}

// ============================================================================
// Integer Part
// ============================================================================

/// Accumulates one 4-digit group while walking its glyphs from the
/// most-significant position down.
#[derive(Default)]
struct GroupAccum {
    digits: [u8; GROUP_SIZE],
    /// Digit glyph waiting for its unit word (or the ones position)
    pending: Option<u8>,
    /// Next unit position must be below this
    position_bound: usize,
    /// Any glyph contributed, including a bare zero
    seen_glyph: bool,
}

impl GroupAccum {
    fn new() -> Self {
        Self {
            position_bound: GROUP_SIZE,
            ..Self::default()
        }
    }

    fn push_digit(&mut self, digit: u8) -> ReadResult<()> {
        match self.pending {
            // a pending zero was a collapsed-run marker; the new digit
            // supersedes it
            Some(0) | None => {
                self.pending = Some(digit);
                self.seen_glyph = true;
                Ok(())
            },
            // two data digits in a row never occur in a spelling
            Some(_) => Err(ReadError::Malformed),
        }
    }

    fn push_local_unit(&mut self, position: usize) -> ReadResult<()> {
        let digit = self.pending.take().ok_or(ReadError::Malformed)?;
        // a unit word is never attached to a zero digit, and positions
        // strictly descend within a group
        if digit == 0 || position == 0 || position >= self.position_bound {
            return Err(ReadError::Malformed);
        }
        self.digits[position] = digit;
        self.position_bound = position;
        Ok(())
    }

    /// Close the group, folding a pending nonzero digit into the ones
    /// position. Returns the digits and whether the group holds any value.
    fn finish(mut self) -> ([u8; GROUP_SIZE], bool) {
        if let Some(digit) = self.pending.take() {
            self.digits[0] = digit;
        }
        let nonzero = self.digits.iter().any(|d| *d != 0);
        (self.digits, nonzero)
    }
}

/// Parse the integer spelling (everything before 元) into a
/// least-significant-first digit sequence.
fn read_integer(spelling: &str) -> ReadResult<Digits> {
    let mut closed: Vec<(usize, [u8; GROUP_SIZE])> = Vec::new();
    let mut accum = GroupAccum::new();
    let mut tier_bound = tables::LARGE_UNITS.len();
    let mut rest = spelling;

    while let Some(glyph_char) = rest.chars().next() {
        if let Some((tier, unit)) = tables::match_large_unit(rest) {
            if tier >= tier_bound {
                return Err(ReadError::Malformed);
            }
            let (digits, nonzero) = std::mem::replace(&mut accum, GroupAccum::new()).finish();
            if !nonzero {
                // a large unit must follow a nonzero group
                return Err(ReadError::Malformed);
            }
            closed.push((tier, digits));
            tier_bound = tier;
            rest = &rest[unit.len()..];
            continue;
        }

        let glyph = &rest[..glyph_char.len_utf8()];
        if let Some(digit) = tables::digit_value(glyph) {
            accum.push_digit(digit)?;
        } else if let Some(position) = tables::local_unit_position(glyph) {
            accum.push_local_unit(position)?;
        } else {
            return Err(ReadError::UnexpectedGlyph(glyph_char));
        }
        rest = &rest[glyph.len()..];
    }

    // whatever remains is the ones tier
    let saw_glyph = accum.seen_glyph;
    let (digits, nonzero) = accum.finish();
    if nonzero || saw_glyph {
        closed.push((0, digits));
    }
    if closed.is_empty() {
        return Err(ReadError::Malformed);
    }

    let top_tier = closed[0].0;
    let mut all_digits: Digits = smallvec![0; (top_tier + 1) * GROUP_SIZE];
    for (tier, group) in closed {
        all_digits[tier * GROUP_SIZE..(tier + 1) * GROUP_SIZE].copy_from_slice(&group);
    }
    Ok(all_digits)
}

// ============================================================================
// Fraction Part
// ============================================================================

/// Parse the fraction words (everything after 元, or the whole spelling when
/// there is no integer part) into `[jiao, fen]`.
fn read_fraction(spelling: &str) -> ReadResult<[u8; 2]> {
    let mut fraction = [0u8; 2];
    if spelling.is_empty() {
        return Ok(fraction);
    }

    let mut rest = spelling;
    // connective zero between 元 and the fen word
    if let Some(stripped) = rest.strip_prefix(tables::ZERO) {
        if stripped.is_empty() {
            return Err(ReadError::Malformed);
        }
        rest = stripped;
    }

    let mut position_floor = 0;
    while let Some(digit_char) = rest.chars().next() {
        let digit_glyph = &rest[..digit_char.len_utf8()];
        let digit = tables::digit_value(digit_glyph)
            .ok_or(ReadError::UnexpectedGlyph(digit_char))?;
        rest = &rest[digit_glyph.len()..];

        let unit_char = rest.chars().next().ok_or(ReadError::Malformed)?;
        let unit_glyph = &rest[..unit_char.len_utf8()];
        let position = tables::FRACTION_UNITS
            .iter()
            .position(|unit| *unit == unit_glyph)
            .ok_or(ReadError::UnexpectedGlyph(unit_char))?;
        // 角 before 分, each at most once
        if position < position_floor {
            return Err(ReadError::Malformed);
        }
        fraction[position] = digit;
        position_floor = position + 1;
        rest = &rest[unit_glyph.len()..];
    }
    Ok(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::spell_str;

    fn read(spelling: &str) -> Amount {
        read_currency(spelling).unwrap()
    }

    #[test]
    fn test_read_boundary_literals() {
        assert_eq!(read("零元整").to_string(), "0.00");
        assert_eq!(read("壹元整").to_string(), "1.00");
        assert_eq!(read("伍角").to_string(), "0.50");
        assert_eq!(read("壹仟贰佰叁拾肆元伍角陆分").to_string(), "1234.56");
        assert_eq!(read("负壹佰元整").to_string(), "-100.00");
        assert_eq!(read("壹万元零捌分").to_string(), "10000.08");
    }

    #[test]
    fn test_read_connective_zeros() {
        assert_eq!(read("壹万零捌拾陆元整").to_string(), "10086.00");
        assert_eq!(read("伍亿零捌拾陆元整").to_string(), "500000086.00");
        assert_eq!(
            read("壹佰亿陆仟万零捌拾陆元整").to_string(),
            "10086000086.00"
        );
    }

    #[test]
    fn test_read_multichar_large_units() {
        // 10^52 and 10^60 carry multi-character unit words
        assert_eq!(
            read_currency("叁恒河沙元整").unwrap().to_string(),
            format!("3{}.00", "0".repeat(52))
        );
        assert_eq!(
            read_currency("玖那由他元整").unwrap().to_string(),
            format!("9{}.00", "0".repeat(60))
        );
    }

    #[test]
    fn test_read_rejects_empty_and_garbage() {
        assert_eq!(read_currency(""), Err(ReadError::Empty));
        assert_eq!(read_currency("   "), Err(ReadError::Empty));
        assert_eq!(read_currency("整"), Err(ReadError::Malformed));
        assert_eq!(read_currency("元整"), Err(ReadError::Malformed));
        assert_eq!(
            read_currency("abc"),
            Err(ReadError::UnexpectedGlyph('a'))
        );
    }

    #[test]
    fn test_read_rejects_malformed_sequences() {
        // unit word on a zero digit
        assert_eq!(read_currency("零拾元整"), Err(ReadError::Malformed));
        // two data digits in a row
        assert_eq!(read_currency("壹贰元整"), Err(ReadError::Malformed));
        // ascending local units within a group
        assert_eq!(read_currency("捌拾壹仟元整"), Err(ReadError::Malformed));
        // large unit with no group value
        assert_eq!(read_currency("万元整"), Err(ReadError::Malformed));
        // ascending tiers
        assert_eq!(read_currency("壹万贰亿元整"), Err(ReadError::Malformed));
        // fen before jiao
        assert_eq!(read_currency("陆分伍角"), Err(ReadError::Malformed));
        // dangling fraction digit
        assert_eq!(read_currency("壹元伍"), Err(ReadError::Malformed));
    }

    #[test]
    fn test_reader_recovers_spelled_values() {
        for raw in [
            "0.00", "1.00", "0.50", "0.05", "1.05", "1234.56", "-100.00",
            "10000.08", "50000.00", "10086000086.00", "-0.99",
        ] {
            let spelled = spell_str(raw).unwrap();
            assert_eq!(
                read(&spelled).to_string(),
                raw.parse::<Amount>().unwrap().to_string(),
                "spelling {:?} -> {:?}",
                raw,
                spelled
            );
        }
    }
}
