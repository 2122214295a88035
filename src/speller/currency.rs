// ============================================================================
// Currency Assembler
// Final composition of integer spelling, fraction words, and sign
// ============================================================================

use crate::amount::Amount;
use crate::tables;

/// Assemble the final currency string.
///
/// Straight decision table, one early-exit terminal branch:
/// 1. nonzero integer part -> integer spelling + 元
/// 2. nonzero jiao -> jiao word
/// 3. nonzero fen -> fen word, preceded by a connective zero when the
///    integer part is nonzero and jiao is zero (10000.08 reads 壹万元零捌分)
/// 4. nothing emitted -> the fixed 零元整
/// 5. nonzero integer part with zero fen -> trailing 整
/// 6. negative -> leading 负
pub(crate) fn assemble(
    amount: &Amount,
    integer_words: &str,
    fraction_words: &[String; 2],
) -> String {
    let mut out = String::new();

    if !amount.integer_is_zero() {
        out.push_str(integer_words);
        out.push_str(tables::YUAN);
    }
    if amount.jiao() != 0 {
        out.push_str(&fraction_words[0]);
    }
    if amount.fen() != 0 {
        if !amount.integer_is_zero() && amount.jiao() == 0 {
            out.push_str(tables::ZERO);
        }
        out.push_str(&fraction_words[1]);
    }

    if out.is_empty() {
        out.push_str(tables::ZERO);
        out.push_str(tables::YUAN);
        out.push_str(tables::EXACT);
        return out;
    }

    if !amount.integer_is_zero() && amount.fen() == 0 {
        out.push_str(tables::EXACT);
    }
    if amount.is_negative() {
        out.insert_str(0, tables::NEGATIVE);
    }
    out
}
