//! Left-to-right binary modular exponentiation.
//!
//! The accumulator starts at 1 and the exponent is scanned from its most
//! significant set bit down: every step squares the accumulator, and steps
//! whose exponent bit is set multiply the base back in. A zero exponent has
//! no top set bit and yields the multiplicative identity directly.

use crate::{FieldWords, ONE, mul_mod};
use mparith::{WORD_BITS, Word, bits, word};
use subtle::{Choice, ConditionallySelectable};

/// Computes `g^e mod p` for a single-word exponent.
///
/// **This operation is variable time with respect to the exponent `e`.**
/// It performs `t + 1` squarings and one multiplication per set bit, where
/// `t` is the index of the top set bit of `e`.
pub fn pow_word_vartime(g: &FieldWords, e: Word) -> FieldWords {
    let Some(t) = word::highest_set_bit(e) else {
        return ONE;
    };

    let mut acc = ONE;
    for i in (0..=t).rev() {
        acc = mul_mod(&acc, &acc);
        if word::bit(e, i) {
            acc = mul_mod(&acc, g);
        }
    }
    acc
}

/// Computes `g^e mod p` for a little-endian multiword exponent.
///
/// **This operation is variable time with respect to the exponent `e`.**
/// It performs `t + 1` squarings and one multiplication per set bit, where
/// `t` is the global index of the top set bit of `e`.
pub fn pow_vartime(g: &FieldWords, e: &[Word]) -> FieldWords {
    let Some(t) = bits::highest_set_bit(e) else {
        return ONE;
    };

    let mut acc = ONE;
    for i in (0..=t).rev() {
        acc = mul_mod(&acc, &acc);
        if bits::bit(e, i) {
            acc = mul_mod(&acc, g);
        }
    }
    acc
}

/// Computes `g^e mod p` for a little-endian multiword exponent without
/// branching on exponent bits.
///
/// The ladder always runs `16 * e.len()` iterations, always computes the
/// multiplication by the base, and keeps or discards it with a word-wise
/// conditional select, so neither the exponent's bit length nor its set
/// bits steer the control flow. The single-correction branches inside the
/// reduction remain data-dependent.
pub fn pow(g: &FieldWords, e: &[Word]) -> FieldWords {
    let mut acc = ONE;
    for i in (0..e.len() * WORD_BITS).rev() {
        acc = mul_mod(&acc, &acc);
        let with_base = mul_mod(&acc, g);
        let take = Choice::from(bits::bit(e, i) as u8);
        conditional_assign(&mut acc, &with_base, take);
    }
    acc
}

/// Word-wise conditional assignment of `b` into `a`.
fn conditional_assign(a: &mut FieldWords, b: &FieldWords, choice: Choice) {
    for (ai, bi) in a.iter_mut().zip(b.iter()) {
        ai.conditional_assign(bi, choice);
    }
}
