//! Slice-level multiprecision arithmetic.
//!
//! A multiprecision integer is a slice of [`Word`]s, least significant word
//! first; its wordlength is the slice length. Operands of an operation share
//! one wordlength unless the operation is documented as mixed-length.
//! Everything operates on caller-owned buffers; nothing allocates.

use crate::{Word, word};
use core::cmp::Ordering;

/// Adds `b` into `a` word-wise, chaining the carry, and returns the final
/// carry bit (0 or 1).
///
/// `a` and `b` must have the same wordlength.
#[must_use]
pub fn add2(a: &mut [Word], b: &[Word]) -> Word {
    debug_assert_eq!(a.len(), b.len());
    let mut carry = 0;
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        let (sum, c) = word::adc(*ai, bi, carry);
        *ai = sum;
        carry = c;
    }
    carry
}

/// Subtracts `b` from `a` word-wise, chaining the borrow, and returns the
/// final borrow bit (0 or 1).
///
/// `a` and `b` must have the same wordlength.
#[must_use]
pub fn sub2(a: &mut [Word], b: &[Word]) -> Word {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0;
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        let (diff, b) = word::sbb(*ai, bi, borrow);
        *ai = diff;
        borrow = b;
    }
    borrow
}

/// Compares `a` and `b` from the most significant word down.
///
/// `a` and `b` must have the same wordlength. Equality of the underlying
/// integers is exactly `cmp(a, b) == Ordering::Equal` (or slice `==`).
pub fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (&ai, &bi) in a.iter().zip(b.iter()).rev() {
        if ai != bi {
            return ai.cmp(&bi);
        }
    }
    Ordering::Equal
}

/// Copies `src` into `dst`.
pub fn copy(dst: &mut [Word], src: &[Word]) {
    dst.copy_from_slice(src);
}

/// Sets every word of `dst` to zero.
pub fn zero(dst: &mut [Word]) {
    dst.fill(0);
}

/// Schoolbook multiplication: writes the full `a * b` product into `c`.
///
/// Mixed-length: `c` must be exactly `a.len() + b.len()` words, which covers
/// both the same-length (`2n`-word) and mixed-length product cases. `c` may
/// not alias either operand. O(n^2) word multiplications.
pub fn mul(c: &mut [Word], a: &[Word], b: &[Word]) {
    debug_assert_eq!(c.len(), a.len() + b.len());
    zero(c);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = word::mac(c[i + j], ai, bj, carry);
            c[i + j] = lo;
            carry = hi;
        }
        c[i + b.len()] = carry;
    }
}

/// Multiplies the single word `a` by `b`, writing the product into `c`.
///
/// `c` must be exactly `b.len() + 1` words and may not alias `b`. This is
/// the per-word scaling step of schoolbook multiplication, exposed for
/// callers that align partial products themselves.
pub fn mul_word(c: &mut [Word], a: Word, b: &[Word]) {
    debug_assert_eq!(c.len(), b.len() + 1);
    let mut carry = 0;
    for (ci, &bi) in c.iter_mut().zip(b.iter()) {
        let (lo, hi) = word::mac(0, a, bi, carry);
        *ci = lo;
        carry = hi;
    }
    c[b.len()] = carry;
}

/// Writes `a * B^k` into `out`, where `B` is the word radix.
///
/// Mixed-length: words shifted past the end of `out` are discarded, and
/// `out` may be longer than `a.len() + k`.
pub fn shl_words(out: &mut [Word], a: &[Word], k: usize) {
    zero(out);
    if k < out.len() {
        let n = a.len().min(out.len() - k);
        out[k..k + n].copy_from_slice(&a[..n]);
    }
}

/// Writes `a / B^k` into `out`, where `B` is the word radix.
///
/// `out` and `a` must have the same wordlength; `k >= a.len()` yields zero.
pub fn shr_words(out: &mut [Word], a: &[Word], k: usize) {
    debug_assert_eq!(out.len(), a.len());
    zero(out);
    if k < a.len() {
        out[..a.len() - k].copy_from_slice(&a[k..]);
    }
}

/// Writes `a mod B^k` into `out`: the low `k` words of `a`, zero above.
///
/// Mixed-length: `out` may be any length; words of `a` at index `k` and
/// beyond are masked off.
pub fn low_words(out: &mut [Word], a: &[Word], k: usize) {
    for (i, o) in out.iter_mut().enumerate() {
        *o = if i < k && i < a.len() { a[i] } else { 0 };
    }
}
