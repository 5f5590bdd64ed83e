//! Condition mnemonics, classes, and encoding/decoding tables.
//!
//! Conditions do not have one global encoding. Each instruction-variant
//! family (a *condition class*) owns a legal subset of the 48 mnemonics and
//! its own dense mapping from mnemonic to hardware code. The same `nz`
//! encodes differently in an add than in a shift, and some families accept
//! conditions others reject. This module provides:
//! 1. **Parsing/printing:** case-insensitive mnemonic text to [`Condition`]
//!    and back to canonical lowercase.
//! 2. **Class tables:** legality, encoding, and decoding per class
//!    (generated data).
//! 3. **Dispatch:** the opcode-to-class map the parser and printer share.
//!
//! All tables are immutable statics; every operation is a pure lookup.

/// Generated condition tables.
mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;
use crate::isa::Opcode;

/// Symbolic condition, identified by its canonical lowercase mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Condition {
    /// `c`: carry set.
    Carry = 0,
    /// `eq`: equal.
    Equal,
    /// `e`: even.
    Even,
    /// `xgts`: extended greater-than, signed.
    ExtendedGreaterThanSigned,
    /// `xgtu`: extended greater-than, unsigned.
    ExtendedGreaterThanUnsigned,
    /// `xles`: extended less-or-equal, signed.
    ExtendedLessOrEqualSigned,
    /// `xleu`: extended less-or-equal, unsigned.
    ExtendedLessOrEqualUnsigned,
    /// `xnz`: extended not-zero.
    ExtendedNotZero,
    /// `xz`: extended zero.
    ExtendedZero,
    /// `false`: never.
    False,
    /// `ges`: greater-or-equal, signed.
    GreaterOrEqualSigned,
    /// `geu`: greater-or-equal, unsigned.
    GreaterOrEqualUnsigned,
    /// `gts`: greater-than, signed.
    GreaterThanSigned,
    /// `gtu`: greater-than, unsigned.
    GreaterThanUnsigned,
    /// `large`: shift amount of 32 or more.
    Large,
    /// `les`: less-or-equal, signed.
    LessOrEqualSigned,
    /// `leu`: less-or-equal, unsigned.
    LessOrEqualUnsigned,
    /// `lts`: less-than, signed.
    LessThanSigned,
    /// `ltu`: less-than, unsigned.
    LessThanUnsigned,
    /// `max`: maximum value.
    Maximum,
    /// `mi`: negative (minus).
    Negative,
    /// `nc`: carry clear.
    NotCarry,
    /// `nc10`: no carry out of bit 10.
    NotCarry10,
    /// `nc11`: no carry out of bit 11.
    NotCarry11,
    /// `nc12`: no carry out of bit 12.
    NotCarry12,
    /// `nc5`: no carry out of bit 5.
    NotCarry5,
    /// `nc6`: no carry out of bit 6.
    NotCarry6,
    /// `nc7`: no carry out of bit 7.
    NotCarry7,
    /// `nc8`: no carry out of bit 8.
    NotCarry8,
    /// `nc9`: no carry out of bit 9.
    NotCarry9,
    /// `neq`: not equal.
    NotEqual,
    /// `nmax`: not the maximum value.
    NotMaximum,
    /// `nov`: no overflow.
    NotOverflow,
    /// `nsh32`: shift amount below 32.
    NotShift32,
    /// `nz`: not zero.
    NotZero,
    /// `o`: odd.
    Odd,
    /// `ov`: overflow.
    Overflow,
    /// `pl`: positive or null (plus).
    PositiveOrNull,
    /// `sh32`: shift amount of 32 or more.
    Shift32,
    /// `small`: shift amount below 32.
    Small,
    /// `se`: source even.
    SourceEven,
    /// `smi`: source negative.
    SourceNegative,
    /// `snz`: source not zero.
    SourceNotZero,
    /// `so`: source odd.
    SourceOdd,
    /// `spl`: source positive or null.
    SourcePositiveOrNull,
    /// `sz`: source zero.
    SourceZero,
    /// `true`: always.
    True,
    /// `z`: zero.
    Zero,
}

/// All conditions, in declaration (table-index) order.
static CONDITIONS: [Condition; Condition::COUNT] = [
    Condition::Carry,
    Condition::Equal,
    Condition::Even,
    Condition::ExtendedGreaterThanSigned,
    Condition::ExtendedGreaterThanUnsigned,
    Condition::ExtendedLessOrEqualSigned,
    Condition::ExtendedLessOrEqualUnsigned,
    Condition::ExtendedNotZero,
    Condition::ExtendedZero,
    Condition::False,
    Condition::GreaterOrEqualSigned,
    Condition::GreaterOrEqualUnsigned,
    Condition::GreaterThanSigned,
    Condition::GreaterThanUnsigned,
    Condition::Large,
    Condition::LessOrEqualSigned,
    Condition::LessOrEqualUnsigned,
    Condition::LessThanSigned,
    Condition::LessThanUnsigned,
    Condition::Maximum,
    Condition::Negative,
    Condition::NotCarry,
    Condition::NotCarry10,
    Condition::NotCarry11,
    Condition::NotCarry12,
    Condition::NotCarry5,
    Condition::NotCarry6,
    Condition::NotCarry7,
    Condition::NotCarry8,
    Condition::NotCarry9,
    Condition::NotEqual,
    Condition::NotMaximum,
    Condition::NotOverflow,
    Condition::NotShift32,
    Condition::NotZero,
    Condition::Odd,
    Condition::Overflow,
    Condition::PositiveOrNull,
    Condition::Shift32,
    Condition::Small,
    Condition::SourceEven,
    Condition::SourceNegative,
    Condition::SourceNotZero,
    Condition::SourceOdd,
    Condition::SourcePositiveOrNull,
    Condition::SourceZero,
    Condition::True,
    Condition::Zero,
];

impl Condition {
    /// Number of conditions.
    pub const COUNT: usize = 48;

    /// All conditions, in declaration order.
    #[must_use]
    pub fn all() -> &'static [Condition] {
        &CONDITIONS
    }

    /// Canonical lowercase mnemonic.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        tables::CONDITION_NAMES[self as usize]
    }

    /// Condition at a table index.
    fn from_index(index: usize) -> Condition {
        CONDITIONS[index]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = EncodeError;

    /// Parses operand text into a condition.
    ///
    /// Matching is case-insensitive, and two synonym spellings are folded to
    /// their canonical mnemonic first: `nsz` is `snz`, `t` is `true`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lower = text.to_ascii_lowercase();
        let canonical = match lower.as_str() {
            "nsz" => "snz",
            "t" => "true",
            other => other,
        };
        tables::CONDITION_NAMES
            .iter()
            .position(|name| *name == canonical)
            .map(Condition::from_index)
            .ok_or_else(|| EncodeError::UnknownMnemonic {
                text: text.to_owned(),
            })
    }
}

/// Instruction-variant family sharing one condition-encoding table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConditionClass {
    /// Add variants, full condition set.
    Add = 0,
    /// Add variants that reject `false`.
    AddNz,
    /// Boot/resume variants.
    Boot,
    /// Boot/resume variants that reject `false`.
    BootNz,
    /// Constant-folded compare: always positive-or-null.
    ConstGe0,
    /// Constant-folded compare: always greater-or-equal unsigned.
    ConstGeu,
    /// Constant-folded compare: always zero.
    ConstZero,
    /// Count variants.
    Count,
    /// Count variants that reject `false`.
    CountNz,
    /// Divide-step variants.
    Div,
    /// Divide-step variants that reject `false`.
    DivNz,
    /// Extended subtract-and-set variants.
    ExtSubSet,
    /// Variants whose condition field is hardwired to `false`.
    False,
    /// Immediate-shift variants.
    ImmShift,
    /// Immediate-shift variants that reject `false`.
    ImmShiftNz,
    /// Logic variants.
    Log,
    /// Logic variants that reject `false`.
    LogNz,
    /// Logic set-on-condition variants.
    LogSet,
    /// Multiply variants.
    Mul,
    /// Multiply variants that reject `false`.
    MulNz,
    /// Variants with no condition field at all.
    NoCond,
    /// Shift variants.
    Shift,
    /// Shift variants that reject `false`.
    ShiftNz,
    /// Subtract variants.
    Sub,
    /// Subtract variants that reject `false`.
    SubNz,
    /// Subtract set-on-condition variants.
    SubSet,
    /// Variants whose condition field is hardwired to `true`.
    True,
    /// Variants accepting only `true` or `false`.
    TrueFalse,
}

/// All condition classes, in declaration (table-index) order.
static CLASSES: [ConditionClass; ConditionClass::COUNT] = [
    ConditionClass::Add,
    ConditionClass::AddNz,
    ConditionClass::Boot,
    ConditionClass::BootNz,
    ConditionClass::ConstGe0,
    ConditionClass::ConstGeu,
    ConditionClass::ConstZero,
    ConditionClass::Count,
    ConditionClass::CountNz,
    ConditionClass::Div,
    ConditionClass::DivNz,
    ConditionClass::ExtSubSet,
    ConditionClass::False,
    ConditionClass::ImmShift,
    ConditionClass::ImmShiftNz,
    ConditionClass::Log,
    ConditionClass::LogNz,
    ConditionClass::LogSet,
    ConditionClass::Mul,
    ConditionClass::MulNz,
    ConditionClass::NoCond,
    ConditionClass::Shift,
    ConditionClass::ShiftNz,
    ConditionClass::Sub,
    ConditionClass::SubNz,
    ConditionClass::SubSet,
    ConditionClass::True,
    ConditionClass::TrueFalse,
];

impl ConditionClass {
    /// Number of condition classes.
    pub const COUNT: usize = 28;

    /// Size of a class's hardware code space.
    pub const ENCODING_SPACE: usize = 64;

    /// All condition classes, in declaration order.
    #[must_use]
    pub fn all() -> &'static [ConditionClass] {
        &CLASSES
    }

    /// Whether `cond` is legal in this class.
    #[must_use]
    pub fn contains(self, cond: Condition) -> bool {
        tables::CLASS_MEMBERS[self as usize] >> (cond as u32) & 1 == 1
    }

    /// Conditions legal in this class, in declaration order.
    pub fn legal_conditions(self) -> impl Iterator<Item = Condition> {
        CONDITIONS
            .iter()
            .copied()
            .filter(move |cond| self.contains(*cond))
    }

    /// Hardware code this class stores for `cond`.
    ///
    /// Pure table lookup with no legality check: asking for a condition
    /// outside the class's legal set returns the table filler, exactly as
    /// the hardware description does. Gate with
    /// [`ConditionClass::contains`] first when legality matters.
    #[must_use]
    pub fn encode(self, cond: Condition) -> u8 {
        tables::ENCODINGS[self as usize][cond as usize]
    }

    /// Condition this class's hardware code `code` decodes to, or `None`
    /// for a code the class never produces (so a disassembler can report a
    /// malformed field instead of inventing a mnemonic).
    ///
    /// Where two legal mnemonics share one code (`eq`/`z`, `c`/`geu`,
    /// `nc`/`ltu`, `neq`/`nz` in the compare-capable classes), decoding
    /// yields the canonical member of the pair.
    ///
    /// # Panics
    ///
    /// `code` must be below [`ConditionClass::ENCODING_SPACE`]; condition
    /// fields are at most six bits wide, so a larger value is a caller bug.
    #[must_use]
    pub fn decode(self, code: u8) -> Option<Condition> {
        assert!(
            usize::from(code) < Self::ENCODING_SPACE,
            "condition code {code} out of range"
        );
        let index = tables::DECODINGS[self as usize][usize::from(code)];
        if index < 0 {
            None
        } else {
            Some(Condition::from_index(index as usize))
        }
    }

    /// Condition class consumed by `opcode`'s condition field.
    ///
    /// # Panics
    ///
    /// The map is total over the opcodes that carry a condition field;
    /// asking about one that does not is an internal desync between the
    /// caller and the generated tables, and fails fast.
    #[must_use]
    pub fn for_opcode(opcode: Opcode) -> ConditionClass {
        tables::OPCODE_CLASS[opcode.index()].map_or_else(
            || panic!("{opcode:?} has no condition class"),
            |class| class,
        )
    }
}
