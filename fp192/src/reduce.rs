//! Fast reduction modulo `p = 2^192 - 2^64 - 1`.
//!
//! The special form of the P-192 prime gives `2^192 ≡ 2^64 + 1 (mod p)`,
//! which folds the high half of a 384-bit product into the low half as a
//! fixed number of overlapping 192-bit slices instead of a general long
//! division. Writing the input as six 64-bit chunks `c5..c0` (four words
//! each), the residue is the modular sum of
//!
//! ```text
//! s1 = (c2, c1, c0)
//! s2 = ( 0, c3, c3)
//! s3 = (c4, c4,  0)
//! s4 = (c5, c5, c5)
//! ```
//!
//! per the NIST-specified decomposition for this prime.

use crate::{FieldWords, MODULUS, WORDS, WideWords};
use core::cmp::Ordering;
use mparith::{arith, modular};

/// Number of words in one 64-bit chunk of the input.
const CHUNK: usize = 4;

/// Copies 64-bit chunk `j` of `c` into `s` at chunk position `k`.
#[inline]
fn place_chunk(s: &mut FieldWords, k: usize, c: &WideWords, j: usize) {
    s[k * CHUNK..(k + 1) * CHUNK].copy_from_slice(&c[j * CHUNK..(j + 1) * CHUNK]);
}

/// Each slice is below `2^192 < 2p`, so one conditional subtraction is
/// enough to establish the `[0, p)` precondition of the modular adder.
#[inline]
fn reduce_slice(s: &mut FieldWords) {
    if arith::cmp(s, &MODULUS) != Ordering::Less {
        let borrow = arith::sub2(s, &MODULUS);
        debug_assert_eq!(borrow, 0);
    }
}

/// Reduces a double-width value to `[0, p)`.
///
/// `c` must lie in `[0, p^2)`, as produced by multiplying two field elements
/// already in `[0, p)`.
pub fn reduce(c: &WideWords) -> FieldWords {
    let mut s1: FieldWords = [0; WORDS];
    place_chunk(&mut s1, 0, c, 0);
    place_chunk(&mut s1, 1, c, 1);
    place_chunk(&mut s1, 2, c, 2);

    let mut s2: FieldWords = [0; WORDS];
    place_chunk(&mut s2, 0, c, 3);
    place_chunk(&mut s2, 1, c, 3);

    let mut s3: FieldWords = [0; WORDS];
    place_chunk(&mut s3, 1, c, 4);
    place_chunk(&mut s3, 2, c, 4);

    let mut s4: FieldWords = [0; WORDS];
    place_chunk(&mut s4, 0, c, 5);
    place_chunk(&mut s4, 1, c, 5);
    place_chunk(&mut s4, 2, c, 5);

    reduce_slice(&mut s1);
    reduce_slice(&mut s2);
    reduce_slice(&mut s3);
    reduce_slice(&mut s4);

    let mut r = s3;
    modular::add_mod(&mut r, &s4, &MODULUS);
    modular::add_mod(&mut r, &s2, &MODULUS);
    modular::add_mod(&mut r, &s1, &MODULUS);
    r
}
