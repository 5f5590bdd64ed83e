//! Condition mnemonic tables.
//!
//! Generated from the architecture database; do not edit by hand. Row and
//! column order match the [`Condition`] and [`ConditionClass`] declaration
//! order. Encoding rows keep the database's zero filler in slots whose
//! condition is not legal for the class; legality lives in `CLASS_MEMBERS`.

use super::ConditionClass as C;
use super::ConditionClass;
use crate::isa::Opcode;

/// Canonical lowercase mnemonic for each condition, in declaration order.
pub(crate) static CONDITION_NAMES: [&str; 48] = [
    "c", "eq", "e", "xgts", "xgtu", "xles", "xleu", "xnz", "xz", "false", "ges", "geu", "gts",
    "gtu", "large", "les", "leu", "lts", "ltu", "max", "mi", "nc", "nc10", "nc11", "nc12", "nc5",
    "nc6", "nc7", "nc8", "nc9", "neq", "nmax", "nov", "nsh32", "nz", "o", "ov", "pl", "sh32",
    "small", "se", "smi", "snz", "so", "spl", "sz", "true", "z",
];

/// Legal-condition set per class, as a bitmask over condition indices.
pub(crate) static CLASS_MEMBERS: [u64; 28] = [
    0xff353ff00381, 0xff353ff00181, 0x7f0000000200, 0x7f0000000000, 0x002000000000,
    0x000000000800, 0x800000000000, 0xff2480180380, 0xff2480180180, 0xff0400000380,
    0xff0400000180, 0xf6354037bdfb, 0x000000000200, 0xff6600100380, 0xff6600100180,
    0xff2400100380, 0xff2400100180, 0x800400000180, 0xffa400104380, 0xffa400104180,
    0x000000000000, 0xff6600100380, 0xff6600100180, 0xff354037bffb, 0xff354037bdfb,
    0x800440000182, 0x400000000000, 0x400000000200,
];

/// Per-class encoding row: condition index to hardware code (0-63).
pub(crate) static ENCODINGS: [[u8; 48]; 28] = [
    [21, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 20, 29, 30, 31, 24, 25, 26, 27,
     28, 0, 0, 11, 0, 3, 0, 10, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [21, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 20, 29, 30, 31, 24, 25, 26, 27,
     28, 0, 0, 11, 0, 3, 0, 10, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 7, 14, 13, 6, 15, 12, 1, 0,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 7, 14, 13, 6, 15, 12, 1, 0,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 11,
     0, 0, 3, 0, 0, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 11,
     0, 0, 3, 0, 0, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 3, 0, 0, 0, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 3, 0, 0, 0, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [53, 6, 0, 61, 63, 60, 62, 11, 10, 0, 55, 53, 57, 59, 0, 56, 58, 54, 52, 0, 41, 52, 0, 0, 0, 0, 0,
     0, 0, 0, 7, 0, 51, 0, 7, 0, 50, 40, 0, 0, 0, 47, 45, 0, 46, 44, 33, 6,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     11, 3, 0, 0, 9, 10, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     11, 3, 0, 0, 9, 10, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 3, 0, 0, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 3, 0, 0, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 11, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 3, 0, 0, 9, 0, 10, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 3, 0, 0, 9, 0, 10, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     11, 3, 0, 0, 9, 10, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 0, 0, 0, 0, 0, 0, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     11, 3, 0, 0, 9, 10, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [21, 2, 0, 29, 31, 28, 30, 5, 4, 0, 23, 21, 25, 27, 0, 24, 26, 22, 20, 0, 8, 20, 0, 0, 0, 0, 0, 0,
     0, 0, 3, 0, 11, 0, 3, 0, 10, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [21, 2, 0, 29, 31, 28, 30, 5, 4, 0, 23, 21, 25, 27, 0, 24, 26, 22, 20, 0, 8, 20, 0, 0, 0, 0, 0, 0,
     0, 0, 3, 0, 11, 0, 3, 0, 10, 9, 0, 0, 7, 14, 13, 6, 15, 12, 1, 2,],
    [0, 6, 0, 0, 0, 0, 0, 11, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 0,
     0, 0, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 6,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0,],
];

/// Per-class decoding row: hardware code to condition index, -1 for codes
/// the class never produces.
pub(crate) static DECODINGS: [[i8; 64]; 28] = [
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 36, 32, 45, 42, 41, 44, -1, 46, 47, 34, 21, 0, -1, -1, 25,
     26, 27, 28, 29, 22, 23, 24, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 36, 32, 45, 42, 41, 44, -1, 46, 47, 34, 21, 0, -1, -1, 25,
     26, 27, 28, 29, 22, 23, 24, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, -1, -1, -1, -1, 43, 40, -1, -1, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, -1, -1, -1, -1, 43, 40, -1, -1, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [37, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [47, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 19, 31, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 19, 31, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, -1, -1, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, -1, -1, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, -1, -1, -1, -1, -1, 47, 34, -1, -1, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, 46, 47, 34, 8, 7, -1, -1, 37, 20, -1, -1, 45, 42, 44, 41, -1, -1,
     36, 32, 18, 11, 17, 10, 15, 12, 16, 13, 5, 3, 6, 4,],
    [9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 38, 33, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 38, 33, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, -1, -1, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, -1, -1, -1, -1, -1, 47, 34, -1, -1, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 39, 14, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 39, 14, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 38, 33, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 38, 33, 45, 42, 41, 44, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, 47, 34, 8, 7, 43, 40, 20, 37, 36, 32, 45, 42, 41, 44, -1, 46, 47, 34, 18, 11, 17, 10, 15,
     12, 16, 13, 5, 3, 6, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, 47, 34, 8, 7, 43, 40, 20, 37, 36, 32, 45, 42, 41, 44, -1, 46, 47, 34, 18, 11, 17, 10, 15,
     12, 16, 13, 5, 3, 6, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, -1, -1, -1, -1, -1, 47, 34, -1, -1, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [-1, 46, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
    [9, 46, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,],
];

/// Condition class consumed by each opcode's condition field, `None` for
/// opcodes without one.
pub(crate) static OPCODE_CLASS: [Option<ConditionClass>; Opcode::COUNT] = [
    Some(C::BootNz),
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    Some(C::AddNz),
    None,
    Some(C::AddNz),
    Some(C::False),
    None,
    Some(C::AddNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    None,
    None,
    None,
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    None,
    None,
    None,
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::CountNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::Log),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(C::Log),
    Some(C::Log),
    Some(C::Log),
    None,
    Some(C::TrueFalse),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::Log),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::MulNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::SubNz),
    None,
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    None,
    Some(C::BootNz),
    None,
    None,
    Some(C::BootNz),
    None,
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::Boot),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::ShiftNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(C::BootNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    Some(C::SubNz),
    None,
    Some(C::SubNz),
    Some(C::False),
    Some(C::SubNz),
    Some(C::False),
    None,
    Some(C::SubNz),
    None,
    Some(C::TrueFalse),
    None,
    None,
    None,
    None,
    None,
    Some(C::Log),
    Some(C::Log),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    Some(C::LogNz),
    None,
    Some(C::LogNz),
    None,
    Some(C::LogNz),
];
