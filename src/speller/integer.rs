// ============================================================================
// Integer Assembler
// Joins the 4-digit tiers with large units and connective zeros
// ============================================================================

use super::groups::{chunk_groups, collapse_zeros, spell_group};
use crate::tables;

/// A nonzero group that survived skipping, ready for concatenation.
struct SpelledGroup {
    tier: usize,
    words: String,
    /// Untrimmed thousands digit of the group
    leading_digit: u8,
}

/// Spell a non-negative integer magnitude given as least-significant-first
/// digits. An all-zero magnitude spells as the bare zero glyph.
///
/// Walking the tiers from most- to least-significant:
/// - zero groups are skipped entirely
/// - a connective zero is inserted when at least one whole tier was skipped
///   since the previous emitted group, or when the tiers are adjacent but
///   this group's thousands digit is zero (1,0086 reads 壹万零捌拾陆, not
///   壹万捌拾陆)
/// - each group's large-unit word follows its spelling; tier 0 has none
pub(crate) fn spell_integer(digits: &[u8]) -> String {
    let groups = chunk_groups(digits);

    let spelled: Vec<SpelledGroup> = groups
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, group)| !group.is_zero())
        .map(|(tier, group)| SpelledGroup {
            tier,
            words: spell_group(&collapse_zeros(group)),
            leading_digit: group.leading_digit(),
        })
        .collect();

    if spelled.is_empty() {
        return tables::digit_glyph(0).to_string();
    }

    spelled
        .iter()
        .fold((String::new(), None::<usize>), |(mut out, previous), group| {
            if let Some(previous_tier) = previous {
                let skipped_tier = previous_tier - group.tier > 1;
                if skipped_tier || group.leading_digit == 0 {
                    out.push_str(tables::ZERO);
                }
            }
            out.push_str(&group.words);
            out.push_str(tables::large_unit(group.tier));
            (out, Some(group.tier))
        })
        .0
}
