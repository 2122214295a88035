// ============================================================================
// Glyph Tables
// Static capital-numeral, unit, and currency glyph tables
// ============================================================================
//
// Lookup-table driven: a digit value or tier index selects a fixed entry
// from an immutable ordered table. No dynamic dispatch, no allocation.

/// Capital digit glyphs, indexed by digit value 0-9.
pub const DIGITS: [&str; 10] = [
    "零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖",
];

/// Local unit words for the positions within one 4-digit group
/// (ones, tens, hundreds, thousands).
pub const LOCAL_UNITS: [&str; 4] = ["", "拾", "佰", "仟"];

/// Large unit words, one per 4-digit tier.
///
/// Tier `i` covers magnitudes `[10^4i, 10^(4i+4))`.
pub const LARGE_UNITS: [&str; 19] = [
    "",         // 10^0
    "万",       // 10^4
    "亿",       // 10^8
    "兆",       // 10^12
    "京",       // 10^16
    "垓",       // 10^20
    "秭",       // 10^24
    "穰",       // 10^28
    "沟",       // 10^32
    "涧",       // 10^36
    "正",       // 10^40
    "载",       // 10^44
    "极",       // 10^48
    "恒河沙",   // 10^52
    "阿僧祗",   // 10^56
    "那由他",   // 10^60
    "不可思议", // 10^64
    "无量",     // 10^68
    "大数",     // 10^72
];

/// Fraction unit words for the two decimal places
/// (jiao = tenths, fen = hundredths).
pub const FRACTION_UNITS: [&str; 2] = ["角", "分"];

/// Currency unit for the integer part.
pub const YUAN: &str = "元";

/// Terminal marker for amounts with no fen remainder.
pub const EXACT: &str = "整";

/// Sign prefix for negative amounts.
pub const NEGATIVE: &str = "负";

/// The zero glyph, also used as the connective zero between tiers.
pub const ZERO: &str = DIGITS[0];

/// Number of digit positions per group (one large-unit tier).
pub const GROUP_SIZE: usize = 4;

/// Highest supported power of ten for the integer part.
///
/// Amounts whose integer magnitude is at or above `10^64` are rejected with
/// [`SpellError::MagnitudeExceeded`](crate::amount::SpellError).
pub const MAGNITUDE_CEILING_POW10: u32 = 64;

/// Maximum number of integer digits (`10^64 - 1` has 64 digits).
pub const MAX_INTEGER_DIGITS: usize = MAGNITUDE_CEILING_POW10 as usize;

// Every tier reachable below the ceiling must have a unit word.
const _: () =
    assert!((MAX_INTEGER_DIGITS + GROUP_SIZE - 1) / GROUP_SIZE <= LARGE_UNITS.len());

// ============================================================================
// Forward Lookups
// ============================================================================

/// Capital glyph for a digit value.
#[inline]
pub fn digit_glyph(digit: u8) -> &'static str {
    DIGITS[digit as usize]
}

/// Local unit word for a position within a group (0 = ones, 3 = thousands).
#[inline]
pub fn local_unit(position: usize) -> &'static str {
    LOCAL_UNITS[position]
}

/// Large unit word for a tier index.
///
/// An out-of-range tier means the magnitude ceiling and the unit table have
/// drifted apart, which is a configuration error, so this asserts rather
/// than falling back to a blank unit word.
#[inline]
pub fn large_unit(tier: usize) -> &'static str {
    assert!(
        tier < LARGE_UNITS.len(),
        "tier {} has no large-unit word",
        tier
    );
    LARGE_UNITS[tier]
}

// ============================================================================
// Reverse Lookups (for the companion reader)
// ============================================================================

/// Digit value for a capital digit glyph.
#[inline]
pub fn digit_value(glyph: &str) -> Option<u8> {
    DIGITS.iter().position(|g| *g == glyph).map(|i| i as u8)
}

/// Group position (1 = tens .. 3 = thousands) for a local unit glyph.
///
/// The ones position has no word and is never looked up.
#[inline]
pub fn local_unit_position(glyph: &str) -> Option<usize> {
    LOCAL_UNITS.iter().position(|g| *g == glyph)
}

/// Longest large-unit word matching a prefix of `rest`, with its tier.
///
/// Multi-character units (恒河沙, 不可思议, ...) must win over any shorter
/// candidate, so matches are compared by byte length.
pub fn match_large_unit(rest: &str) -> Option<(usize, &'static str)> {
    LARGE_UNITS
        .iter()
        .enumerate()
        .skip(1) // tier 0 has no word
        .filter(|(_, unit)| rest.starts_with(*unit))
        .max_by_key(|(_, unit)| unit.len())
        .map(|(tier, unit)| (tier, *unit))
}
