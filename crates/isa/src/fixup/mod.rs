//! Fixup kinds and the versioned bit-scatter codec.
//!
//! A fixup is a deferred patch of a value into code, resolved either at
//! assembly time or at link time. Both resolvers must place bits
//! identically, so the placement lives here, behind one table:
//! 1. **Kinds:** The closed set of field layouts an operand can occupy.
//! 2. **Apply:** Scatter a semantic value into a word patch.
//! 3. **Invert:** Gather a semantic value back out of an encoded word, for
//!    disassembly and verification.
//! 4. **Operand map:** Which operand of which instruction variant carries
//!    which kind (generated data).
//!
//! The codec performs no range validation: a value wider than its field is
//! silently truncated to the field width. Callers that want a diagnostic
//! must check widths themselves before applying.

/// Generated operand-to-fixup dispatch table.
mod operand;
/// Versioned bit-scatter layout table.
mod scatter;

use crate::isa::{IsaVersion, Opcode};

pub use scatter::{ScatterField, ScatterSpec};

/// One bit-layout of the instruction word that a patched value can occupy.
///
/// The set is closed and versioned with the architecture; an unknown kind in
/// any table is an internal consistency failure, never a user diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FixupKind {
    /// Placeholder kind; applying it changes nothing.
    None = 0,
    /// Raw 1-byte little-endian store.
    Byte,
    /// Raw 2-byte little-endian store.
    Half,
    /// Raw 4-byte little-endian store.
    Word,
    /// Raw 8-byte little-endian store.
    Dword,
    /// Contiguous 32-bit field at the base of the word.
    Word32,
    /// 14-bit program-counter field.
    Pc,
    /// 4-bit immediate.
    Imm4,
    /// 5-bit immediate.
    Imm5,
    /// 5-bit immediate, register-bank placement.
    Imm5Rb,
    /// 5-bit immediate, register-bank placement, stored one's-complemented.
    Imm5RbInv,
    /// 8-bit immediate.
    Imm8,
    /// 8-bit immediate, DMA transfer-size placement.
    Imm8Dma,
    /// 8-bit immediate, store-instruction placement.
    Imm8Str,
    /// 12-bit immediate.
    Imm12,
    /// 14-bit immediate, store-instruction placement.
    Imm14Str,
    /// 16-bit immediate, store-instruction placement.
    Imm16Str,
    /// 22-bit immediate.
    Imm22,
    /// 22-bit immediate, register-bank placement.
    Imm22Rb,
    /// 24-bit immediate.
    Imm24,
    /// 32-bit immediate.
    Imm32,
    /// 32-bit immediate, zero-destination register-bank placement.
    Imm32ZeroRb,
    /// 32-bit immediate, dual-source register-bank placement.
    Imm32DusRb,
}

/// All kinds, in declaration (table-index) order.
static KINDS: [FixupKind; FixupKind::COUNT] = [
    FixupKind::None,
    FixupKind::Byte,
    FixupKind::Half,
    FixupKind::Word,
    FixupKind::Dword,
    FixupKind::Word32,
    FixupKind::Pc,
    FixupKind::Imm4,
    FixupKind::Imm5,
    FixupKind::Imm5Rb,
    FixupKind::Imm5RbInv,
    FixupKind::Imm8,
    FixupKind::Imm8Dma,
    FixupKind::Imm8Str,
    FixupKind::Imm12,
    FixupKind::Imm14Str,
    FixupKind::Imm16Str,
    FixupKind::Imm22,
    FixupKind::Imm22Rb,
    FixupKind::Imm24,
    FixupKind::Imm32,
    FixupKind::Imm32ZeroRb,
    FixupKind::Imm32DusRb,
];

/// Diagnostic names, in declaration order.
static NAMES: [&str; FixupKind::COUNT] = [
    "none",
    "byte",
    "half",
    "word",
    "dword",
    "word32",
    "pc",
    "imm4",
    "imm5",
    "imm5_rb",
    "imm5_rb_inv",
    "imm8",
    "imm8_dma",
    "imm8_str",
    "imm12",
    "imm14_str",
    "imm16_str",
    "imm22",
    "imm22_rb",
    "imm24",
    "imm32",
    "imm32_zero_rb",
    "imm32_dus_rb",
];

impl FixupKind {
    /// Number of fixup kinds.
    pub const COUNT: usize = 23;

    /// All kinds, in declaration order.
    #[must_use]
    pub fn all() -> &'static [FixupKind] {
        &KINDS
    }

    /// Diagnostic name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Bit-scatter layout of this kind under the given revision.
    #[must_use]
    pub fn scatter(self, version: IsaVersion) -> &'static ScatterSpec {
        match version {
            IsaVersion::V1 => &scatter::SCATTER_V1[self as usize],
        }
    }

    /// Total semantic value width this kind consumes, in bits.
    #[must_use]
    pub fn value_bits(self, version: IsaVersion) -> u32 {
        u32::from(self.scatter(version).value_bits)
    }

    /// For the raw data kinds, the store width in bytes; `None` for the
    /// scattered kinds and the placeholder.
    #[must_use]
    pub fn data_size(self) -> Option<usize> {
        match self {
            FixupKind::Byte => Some(1),
            FixupKind::Half => Some(2),
            FixupKind::Word => Some(4),
            FixupKind::Dword => Some(8),
            _ => None,
        }
    }
}

/// Mask of the low `bits` bits.
#[inline]
const fn mask(bits: u8) -> u64 {
    if bits >= 64 { u64::MAX } else { (1 << bits) - 1 }
}

/// Scatters `value` into a word patch for `kind`.
///
/// Every bit outside the kind's assigned field positions is zero, so the
/// caller ORs the patch into a word whose destination field is still zeroed;
/// the codec never clears bits. Raw data kinds bypass scattering and return
/// the value truncated to their store width.
///
/// Value bits beyond the kind's semantic width are silently dropped.
#[must_use]
pub fn apply(kind: FixupKind, value: u64, version: IsaVersion) -> u64 {
    let spec = kind.scatter(version);
    if kind.data_size().is_some() {
        return value & mask(spec.value_bits);
    }
    let value = if spec.complement { !value } else { value };
    let mut patch = 0;
    for field in spec.fields {
        patch |= ((value >> field.src) & mask(field.width)) << field.dst;
    }
    patch
}

/// Gathers the semantic value of `kind` back out of an encoded word.
///
/// Left-inverse of [`apply`] over the kind's semantic width: for any value
/// `v` of that width, `invert(kind, apply(kind, v)) == v`. Used by the
/// disassembler and by encode verification.
#[must_use]
pub fn invert(kind: FixupKind, word: u64, version: IsaVersion) -> u64 {
    let spec = kind.scatter(version);
    if kind.data_size().is_some() {
        return word & mask(spec.value_bits);
    }
    let mut value = 0;
    for field in spec.fields {
        value |= ((word >> field.dst) & mask(field.width)) << field.src;
    }
    if spec.complement {
        value = !value & mask(spec.value_bits);
    }
    value
}

/// Fixup kinds carried by the operands of `opcode`, as
/// `(operand_index, kind)` pairs in table order.
#[must_use]
pub fn operand_fixups(opcode: Opcode) -> &'static [(u8, FixupKind)] {
    operand::OPERAND_FIXUPS[opcode.index()]
}

/// Fixup kind carried by one operand of an instruction variant.
///
/// # Panics
///
/// The operand map is total over the closed opcode set; asking about an
/// operand that carries no fixup means the caller and the generated tables
/// disagree about the instruction shape, and that desync is fatal.
#[must_use]
pub fn fixup_for_operand(opcode: Opcode, operand: usize) -> FixupKind {
    operand_fixups(opcode)
        .iter()
        .find(|(index, _)| usize::from(*index) == operand)
        .map_or_else(
            || panic!("operand {operand} of {opcode:?} carries no fixup"),
            |(_, kind)| *kind,
        )
}
