//! Bit inspection across multiprecision values.
//!
//! Bit `i` of a slice lives in word `i / 16` at in-word index `i % 16`.
//! Scans over all-zero inputs return `None` rather than an undefined index;
//! callers driving an exponentiation loop special-case that to the identity.

use crate::{WORD_BITS, Word, word};

/// Returns global bit `i` of `x`, with bit 0 the least significant bit of
/// the first word.
pub fn bit(x: &[Word], i: usize) -> bool {
    let index = i / WORD_BITS;
    debug_assert!(index < x.len());
    word::bit(x[index], i % WORD_BITS)
}

/// Returns the index of the most significant nonzero word of `x`, or `None`
/// if every word is zero.
pub fn msw_index(x: &[Word]) -> Option<usize> {
    x.iter().rposition(|&w| w != 0)
}

/// Returns the global index of the highest set bit of `x`, or `None` if `x`
/// is zero.
pub fn highest_set_bit(x: &[Word]) -> Option<usize> {
    let i = msw_index(x)?;
    word::highest_set_bit(x[i]).map(|b| i * WORD_BITS + b)
}
