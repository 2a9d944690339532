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

pub mod arith;
pub mod bits;
pub mod modular;
pub mod word;

#[cfg(test)]
pub(crate) mod util;

/// Base radix unit of the multiprecision representation.
pub type Word = u16;

/// Widened type used for intermediate word products and sums.
pub type WideWord = u32;

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;
