//! Test-only conversions between word slices and [`BigUint`] for
//! cross-checking against a trusted arbitrary-precision implementation.

use crate::Word;
use num_bigint::BigUint;
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

#[cfg(test)]
mod tests {
    use super::{biguint_to_words, words_to_biguint};
    use num_bigint::BigUint;

    #[test]
    fn roundtrip() {
        let words = [0x7da0, 0x6c9d, 0x574f, 0xd615];
        let x = words_to_biguint(&words);
        assert_eq!(x, BigUint::parse_bytes(b"d615574f6c9d7da0", 16).unwrap());

        let mut out = [0; 4];
        biguint_to_words(&mut out, &x);
        assert_eq!(out, words);
    }
}
