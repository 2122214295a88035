// ============================================================================
// Speller
// Capital-numeral spelling pipeline: digits -> groups -> words -> currency
// ============================================================================
//
// This module provides:
// - spell_currency: spell a parsed Amount
// - spell_str / spell_decimal: thin parsing conveniences
//
// Design principles:
// - Every stage is a pure function over immutable input; no shared state,
//   so concurrent callers need no coordination
// - Digit groups, unit words, and glyphs come from the static tables
// - Zero collapsing happens per group, connective zeros at tier boundaries

mod currency;
mod fraction;
mod groups;
mod integer;

use crate::amount::{Amount, SpellResult};
use rust_decimal::Decimal;

/// Spell an amount as a capital-numeral currency string.
///
/// # Example
/// ```
/// use rmb_speller::prelude::*;
///
/// let amount: Amount = "1234.56".parse().unwrap();
/// assert_eq!(spell_currency(&amount), "壹仟贰佰叁拾肆元伍角陆分");
/// ```
pub fn spell_currency(amount: &Amount) -> String {
    let integer_words = integer::spell_integer(amount.integer_digits());
    let fraction_words = fraction::spell_fraction(amount.jiao(), amount.fen());
    let words = currency::assemble(amount, &integer_words, &fraction_words);
    tracing::debug!("spelled {} as {}", amount, words);
    words
}

/// Parse a decimal string and spell it.
///
/// # Errors
/// Returns `InvalidAmount` for unparseable input and `MagnitudeExceeded`
/// for integer magnitudes at or above 10^64.
#[inline]
pub fn spell_str(value: &str) -> SpellResult<String> {
    Ok(spell_currency(&value.parse()?))
}

/// Spell a `rust_decimal::Decimal` amount.
///
/// # Errors
/// Returns `MagnitudeExceeded` for integer magnitudes at or above 10^64.
#[inline]
pub fn spell_decimal(value: Decimal) -> SpellResult<String> {
    Ok(spell_currency(&Amount::from_decimal(value)?))
}
