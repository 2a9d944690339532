#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod pow;
mod reduce;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

#[cfg(test)]
pub(crate) mod util;

pub use mparith::{WORD_BITS, Word};
pub use pow::{pow, pow_vartime, pow_word_vartime};
pub use reduce::reduce;

use mparith::{arith, modular};

/// Number of words in a field element.
pub const WORDS: usize = 12;

/// Number of words in a double-width multiplication result.
pub const WIDE_WORDS: usize = 2 * WORDS;

/// A P-192 field element: twelve little-endian 16-bit words holding a value
/// in `[0, p)`.
pub type FieldWords = [Word; WORDS];

/// A double-width (384-bit) value, as produced by multiplying two field
/// elements.
pub type WideWords = [Word; WIDE_WORDS];

/// The NIST P-192 prime, `p = 2^192 - 2^64 - 1`.
pub const MODULUS: FieldWords = [
    0xffff, 0xffff, 0xffff, 0xffff, 0xfffe, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
];

/// The additive identity.
pub const ZERO: FieldWords = [0; WORDS];

/// The multiplicative identity.
pub const ONE: FieldWords = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Computes `(a + b) mod p`.
///
/// Both operands must already lie in `[0, p)`.
pub fn add_mod(a: &FieldWords, b: &FieldWords) -> FieldWords {
    let mut c = *a;
    modular::add_mod(&mut c, b, &MODULUS);
    c
}

/// Computes `(a - b) mod p`.
///
/// Both operands must already lie in `[0, p)`.
pub fn sub_mod(a: &FieldWords, b: &FieldWords) -> FieldWords {
    let mut c = *a;
    modular::sub_mod(&mut c, b, &MODULUS);
    c
}

/// Computes `(a * b) mod p`: a schoolbook multiplication to a double-width
/// product followed by the fast reduction.
///
/// Both operands must already lie in `[0, p)`.
pub fn mul_mod(a: &FieldWords, b: &FieldWords) -> FieldWords {
    let mut wide: WideWords = [0; WIDE_WORDS];
    arith::mul(&mut wide, a, b);
    reduce(&wide)
}
