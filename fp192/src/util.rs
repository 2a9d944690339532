//! Test-only helpers: conversions to `BigUint` for reference cross-checks
//! and a proptest generator for pre-reduced field elements.

use crate::{FieldWords, MODULUS, WORDS};
use mparith::Word;
use num_bigint::BigUint;
use proptest::prelude::*;
use std::vec::Vec;

/// Interprets a little-endian word slice as a `BigUint`.
pub fn words_to_biguint(words: &[Word]) -> BigUint {
    let mut bytes = Vec::with_capacity(words.len() * 2);
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Writes `x` into a little-endian word slice, zero-extending.
///
/// Panics if `x` does not fit in `out`.
pub fn biguint_to_words(out: &mut [Word], x: &BigUint) {
    let bytes = x.to_bytes_le();
    assert!(bytes.len() <= out.len() * 2, "value does not fit the slice");
    for (i, o) in out.iter_mut().enumerate() {
        let lo = bytes.get(2 * i).copied().unwrap_or(0);
        let hi = bytes.get(2 * i + 1).copied().unwrap_or(0);
        *o = Word::from_le_bytes([lo, hi]);
    }
}

/// The P-192 modulus as a `BigUint`.
pub fn modulus_as_biguint() -> BigUint {
    words_to_biguint(&MODULUS)
}

prop_compose! {
    /// Uniformly random field element already reduced into `[0, p)`.
    pub fn field_element()(words in any::<[Word; WORDS]>()) -> FieldWords {
        let mut x = words_to_biguint(&words);
        let m = modulus_as_biguint();
        // The modulus spans the full 192 bits, so one subtraction is
        // guaranteed to land in range.
        if x >= m {
            x -= m;
        }
        let mut out = [0; WORDS];
        biguint_to_words(&mut out, &x);
        out
    }
}
