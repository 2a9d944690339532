//! Fixed test vectors for the P-192 field operations.
//!
//! Expected values were produced with an independent arbitrary-precision
//! implementation.

use crate::{FieldWords, WideWords};
use mparith::Word;

/// First operand; already in `[0, p)`.
pub const MUL_A: FieldWords = [
    0x7da0, 0x6c9d, 0x574f, 0xd615, 0x85c2, 0xcb5f, 0xca49, 0x4285, 0x1f5c, 0x7799, 0xea25, 0xd94c,
];

/// Second operand; already in `[0, p)`.
pub const MUL_B: FieldWords = [
    0xf3ea, 0x85d3, 0x0c32, 0xa075, 0xc431, 0x4aa2, 0xbc82, 0x96c5, 0xf7a7, 0x2b89, 0x0215, 0xd845,
];

/// The full double-width product `MUL_A * MUL_B`.
pub const MUL_A_B_WIDE: WideWords = [
    0xb440, 0x7113, 0x9405, 0x2e0c, 0x23fa, 0x831d, 0xb6b8, 0xbc82, 0x7743, 0x55f1, 0xb1c9,
    0xf5b6, 0xdb93, 0xeaed, 0x61c2, 0x655e, 0xb226, 0x8b01, 0xa345, 0x5e02, 0xf672, 0x4b1a,
    0x790f, 0xb793,
];

/// `(MUL_A * MUL_B) mod p`.
pub const MUL_A_B_MOD_P: FieldWords = [
    0x8647, 0xa71c, 0x6ed7, 0x4afe, 0xa828, 0x4427, 0x34d0, 0x3777, 0x1fdd, 0x2c0e, 0xce1e, 0x0b4c,
];

/// `(MUL_A + MUL_B) mod p`.
pub const SUM_A_B_MOD_P: FieldWords = [
    0x718b, 0xf271, 0x6381, 0x768a, 0x49f5, 0x1602, 0x86cc, 0xd94b, 0x1703, 0xa323, 0xec3a, 0xb191,
];

/// `(MUL_A - MUL_B) mod p`.
pub const DIFF_A_B_MOD_P: FieldWords = [
    0x89b6, 0xe6c9, 0x4b1c, 0x35a0, 0xc191, 0x80bc, 0x0dc7, 0xabc0, 0x27b4, 0x4c0f, 0xe810, 0x0107,
];

/// `MUL_A ^ MUL_B mod p`, exercising a full-width exponent.
pub const POW_A_B: FieldWords = [
    0xd620, 0xb12c, 0xd64a, 0x4890, 0xb79a, 0xa2cc, 0x2551, 0xb62f, 0x0356, 0x9d4b, 0xe3f2, 0x7418,
];

/// Single-word exponent for [`POW_A_EXP_WORD`].
pub const POW_EXP_WORD: Word = 0xc3a5;

/// `MUL_A ^ POW_EXP_WORD mod p`.
pub const POW_A_EXP_WORD: FieldWords = [
    0x0442, 0x972b, 0xd885, 0x55b5, 0xbed5, 0x767e, 0x35c9, 0x4098, 0x2b37, 0xd88a, 0xe73e, 0x6202,
];

/// Short multiword exponent `2^47 + 1` for [`POW_A_EXP_MW`].
pub const POW_EXP_MW: [Word; 3] = [0x0001, 0x0000, 0x8000];

/// `MUL_A ^ POW_EXP_MW mod p`.
pub const POW_A_EXP_MW: FieldWords = [
    0xdfd9, 0x06cd, 0x5133, 0x2fd1, 0x161a, 0x6eca, 0x504c, 0xcb44, 0xcd9c, 0xa698, 0x236e, 0x4b5b,
];

/// `(p - 1)^2`, a reduction input whose folded slices themselves land in
/// `[p, 2^192)`.
pub const PM1_SQUARED_WIDE: WideWords = [
    0x0004, 0x0000, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000, 0x0000, 0x0001, 0x0000, 0x0000,
    0x0000, 0xfffc, 0xffff, 0xffff, 0xffff, 0xfffd, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
    0xffff, 0xffff,
];

/// `(p - 1)^2 mod p`, which is 1.
pub const PM1_SQUARED_MOD_P: FieldWords = crate::ONE;
