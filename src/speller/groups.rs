// ============================================================================
// Digit Groups
// 4-digit tier chunking and per-group zero collapsing
// ============================================================================

use crate::tables::{self, GROUP_SIZE};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// One 4-digit tier of the integer magnitude, least-significant position
/// first. Missing high positions are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitGroup {
    digits: [u8; GROUP_SIZE],
}

impl DigitGroup {
    #[inline]
    pub(crate) fn new(digits: [u8; GROUP_SIZE]) -> Self {
        Self { digits }
    }

    /// Digits of the group, least-significant first.
    #[inline]
    pub(crate) fn digits(&self) -> &[u8; GROUP_SIZE] {
        &self.digits
    }

    /// Whether the group's value is zero. Zero groups contribute no text and
    /// are skipped by the assembler.
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// The digit in the group's thousands position.
    ///
    /// When a higher tier was emitted just before this group, a zero here
    /// means the boundary to the previous large unit is not clean and needs
    /// a connective zero.
    #[inline]
    pub(crate) fn leading_digit(&self) -> u8 {
        self.digits[GROUP_SIZE - 1]
    }
}

/// Split a least-significant-first digit sequence into 4-digit groups, one
/// per large-unit tier. Group index `i` covers `[10^4i, 10^(4i+4))`.
pub(crate) fn chunk_groups(digits: &[u8]) -> SmallVec<[DigitGroup; 5]> {
    digits
        .chunks(GROUP_SIZE)
        .map(|chunk| {
            let mut group = [0u8; GROUP_SIZE];
            group[..chunk.len()].copy_from_slice(chunk);
            DigitGroup::new(group)
        })
        .collect()
}

// ============================================================================
// Zero Collapsing
// ============================================================================

/// A retained digit with its position within the group
/// (0 = ones .. 3 = thousands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocalDigit {
    pub digit: u8,
    pub position: usize,
}

/// Collapse the zero runs of one group.
///
/// Trailing (ones-side) and leading (thousands-side) zero digits are
/// dropped, and every internal run of zeros keeps a single marker. An
/// all-zero group collapses to nothing.
#[inline]
pub(crate) fn collapse_zeros(group: &DigitGroup) -> ArrayVec<LocalDigit, GROUP_SIZE> {
    trim_zero_runs(
        group
            .digits()
            .iter()
            .copied()
            .enumerate()
            .map(|(position, digit)| LocalDigit { digit, position }),
    )
}

/// Zero-run trimming over a positioned digit sequence, least-significant
/// first. Applying it to its own output is a no-op.
pub(crate) fn trim_zero_runs(
    locals: impl IntoIterator<Item = LocalDigit>,
) -> ArrayVec<LocalDigit, GROUP_SIZE> {
    let mut stack: ArrayVec<LocalDigit, GROUP_SIZE> = ArrayVec::new();
    for local in locals {
        if local.digit == 0 && matches!(stack.last(), Some(top) if top.digit == 0) {
            continue;
        }
        stack.push(local);
    }
    // drop the ones-side zero, then the thousands-side one
    while stack.first().is_some_and(|local| local.digit == 0) {
        stack.remove(0);
    }
    while stack.last().is_some_and(|local| local.digit == 0) {
        stack.pop();
    }
    stack
}

/// Render a collapsed group, most-significant position first. Nonzero digits
/// carry their local unit word; a retained zero renders as the bare glyph.
/// The empty sequence renders as the zero glyph (standalone zero magnitude).
pub(crate) fn spell_group(stack: &[LocalDigit]) -> String {
    if stack.is_empty() {
        return tables::digit_glyph(0).to_string();
    }
    let mut words = String::new();
    for local in stack.iter().rev() {
        words.push_str(tables::digit_glyph(local.digit));
        if local.digit != 0 {
            words.push_str(tables::local_unit(local.position));
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn group(value: u16) -> DigitGroup {
        DigitGroup::new([
            (value % 10) as u8,
            (value / 10 % 10) as u8,
            (value / 100 % 10) as u8,
            (value / 1000 % 10) as u8,
        ])
    }

    fn spelled(value: u16) -> String {
        spell_group(&collapse_zeros(&group(value)))
    }

    #[test]
    fn test_chunking_pads_high_positions() {
        let groups = chunk_groups(&[6, 8, 0, 0, 1]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].digits(), &[6, 8, 0, 0]);
        assert_eq!(groups[1].digits(), &[1, 0, 0, 0]);
        assert_eq!(groups[1].leading_digit(), 0);
    }

    #[test]
    fn test_zero_group_is_skippable() {
        assert!(group(0).is_zero());
        assert!(collapse_zeros(&group(0)).is_empty());
        assert!(!group(10).is_zero());
    }

    #[test]
    fn test_internal_zero_run_keeps_one_marker() {
        // 1008: never "zero zero", never dropped entirely
        assert_eq!(spelled(1008), "壹仟零捌");
        assert_eq!(spelled(1080), "壹仟零捌拾");
        assert_eq!(spelled(1808), "壹仟捌佰零捌");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(spelled(1000), "壹仟");
        assert_eq!(spelled(1800), "壹仟捌佰");
        assert_eq!(spelled(80), "捌拾");
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(spelled(86), "捌拾陆");
        assert_eq!(spelled(6), "陆");
    }

    #[test]
    fn test_single_digits_have_no_unit() {
        for digit in 0..10u16 {
            assert_eq!(spelled(digit), tables::digit_glyph(digit as u8));
        }
    }

    quickcheck! {
        fn trimming_is_idempotent(a: u8, b: u8, c: u8, d: u8) -> bool {
            let group = DigitGroup::new([a % 10, b % 10, c % 10, d % 10]);
            let once = collapse_zeros(&group);
            let twice = trim_zero_runs(once.iter().copied());
            once == twice
        }
    }
}
