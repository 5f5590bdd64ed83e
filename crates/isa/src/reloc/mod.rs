//! Relocation types, persisted records, and link-time application.
//!
//! A relocation is the persisted, object-file form of a fixup that could not
//! be resolved at assembly time. This module provides:
//! 1. **Type ids:** The closed, persisted id set and its mapping to and from
//!    fixup kinds (a cross-tool contract; writer and reader must agree).
//! 2. **Records:** The `(offset, symbol, addend, type)` record and its
//!    bit-exact wire codec.
//! 3. **Application:** Resolving each record against a symbol table and
//!    patching the final word.

/// Link-time relocation application.
mod apply;
/// Persisted relocation records and their wire codec.
mod record;

use crate::fixup::FixupKind;

pub use apply::{SymbolResolver, apply_relocation, apply_relocations};
pub use record::RelocationRecord;

/// Persisted relocation type id.
///
/// The set is closed: ids are part of the object-file format and must match
/// exactly between the tool that writes them and the tool that reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum RelocationType {
    /// No-op relocation.
    None = 0,
    /// Raw 1-byte datum.
    Byte = 1,
    /// Raw 2-byte datum.
    Half = 2,
    /// Raw 4-byte datum.
    Word = 3,
    /// Raw 8-byte datum.
    Dword = 4,
    /// Program-counter field.
    Pc = 5,
    /// 4-bit immediate field.
    Imm4 = 6,
    /// 5-bit immediate field.
    Imm5 = 7,
    /// 5-bit immediate field, register-bank placement.
    Imm5Rb = 8,
    /// 5-bit immediate field, register-bank placement, one's-complemented.
    Imm5RbInv = 9,
    /// 8-bit immediate field.
    Imm8 = 10,
    /// 8-bit immediate field, DMA placement.
    Imm8Dma = 11,
    /// 8-bit immediate field, store placement.
    Imm8Str = 12,
    /// 12-bit immediate field.
    Imm12 = 13,
    /// 14-bit immediate field, store placement.
    Imm14Str = 14,
    /// 16-bit immediate field, store placement.
    Imm16Str = 15,
    /// 22-bit immediate field.
    Imm22 = 16,
    /// 22-bit immediate field, register-bank placement.
    Imm22Rb = 17,
    /// 24-bit immediate field.
    Imm24 = 18,
    /// 32-bit immediate field.
    Imm32 = 19,
    /// 32-bit immediate field, zero-destination register-bank placement.
    Imm32ZeroRb = 20,
    /// 32-bit immediate field, dual-source register-bank placement.
    Imm32DusRb = 21,
}

impl RelocationType {
    /// Persisted id of this relocation type.
    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Looks up a persisted id, returning `None` outside the closed set.
    ///
    /// An unknown id in an input object is a user-facing diagnostic (the
    /// object was produced by a different tool generation), not an internal
    /// failure, so this is the one mapper that does not panic.
    #[must_use]
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Relocation type persisted for a fixup kind.
    ///
    /// Near-1:1: `Word32` folds onto [`RelocationType::Word`], since both
    /// place 32 bits at the base of the target; every other kind has its own
    /// id.
    #[must_use]
    pub fn from_fixup(kind: FixupKind) -> Self {
        match kind {
            FixupKind::None => Self::None,
            FixupKind::Byte => Self::Byte,
            FixupKind::Half => Self::Half,
            FixupKind::Word | FixupKind::Word32 => Self::Word,
            FixupKind::Dword => Self::Dword,
            FixupKind::Pc => Self::Pc,
            FixupKind::Imm4 => Self::Imm4,
            FixupKind::Imm5 => Self::Imm5,
            FixupKind::Imm5Rb => Self::Imm5Rb,
            FixupKind::Imm5RbInv => Self::Imm5RbInv,
            FixupKind::Imm8 => Self::Imm8,
            FixupKind::Imm8Dma => Self::Imm8Dma,
            FixupKind::Imm8Str => Self::Imm8Str,
            FixupKind::Imm12 => Self::Imm12,
            FixupKind::Imm14Str => Self::Imm14Str,
            FixupKind::Imm16Str => Self::Imm16Str,
            FixupKind::Imm22 => Self::Imm22,
            FixupKind::Imm22Rb => Self::Imm22Rb,
            FixupKind::Imm24 => Self::Imm24,
            FixupKind::Imm32 => Self::Imm32,
            FixupKind::Imm32ZeroRb => Self::Imm32ZeroRb,
            FixupKind::Imm32DusRb => Self::Imm32DusRb,
        }
    }

    /// Fixup kind applied when this relocation type is resolved.
    ///
    /// Inverse of [`RelocationType::from_fixup`] up to the `Word32` fold:
    /// [`RelocationType::Word`] maps to the raw [`FixupKind::Word`].
    #[must_use]
    pub fn to_fixup(self) -> FixupKind {
        match self {
            Self::None => FixupKind::None,
            Self::Byte => FixupKind::Byte,
            Self::Half => FixupKind::Half,
            Self::Word => FixupKind::Word,
            Self::Dword => FixupKind::Dword,
            Self::Pc => FixupKind::Pc,
            Self::Imm4 => FixupKind::Imm4,
            Self::Imm5 => FixupKind::Imm5,
            Self::Imm5Rb => FixupKind::Imm5Rb,
            Self::Imm5RbInv => FixupKind::Imm5RbInv,
            Self::Imm8 => FixupKind::Imm8,
            Self::Imm8Dma => FixupKind::Imm8Dma,
            Self::Imm8Str => FixupKind::Imm8Str,
            Self::Imm12 => FixupKind::Imm12,
            Self::Imm14Str => FixupKind::Imm14Str,
            Self::Imm16Str => FixupKind::Imm16Str,
            Self::Imm22 => FixupKind::Imm22,
            Self::Imm22Rb => FixupKind::Imm22Rb,
            Self::Imm24 => FixupKind::Imm24,
            Self::Imm32 => FixupKind::Imm32,
            Self::Imm32ZeroRb => FixupKind::Imm32ZeroRb,
            Self::Imm32DusRb => FixupKind::Imm32DusRb,
        }
    }

    /// Whether resolved values of this type are code/data addresses.
    ///
    /// Address-typed relocations run through the address-space translator
    /// before encoding. The raw data types carry constants by construction
    /// (the assembler picks them for non-address operands) and are stored
    /// untranslated.
    #[must_use]
    pub fn targets_address(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Byte | Self::Half | Self::Word | Self::Dword
        )
    }

    /// All relocation types, in id order.
    pub const ALL: [Self; 22] = [
        Self::None,
        Self::Byte,
        Self::Half,
        Self::Word,
        Self::Dword,
        Self::Pc,
        Self::Imm4,
        Self::Imm5,
        Self::Imm5Rb,
        Self::Imm5RbInv,
        Self::Imm8,
        Self::Imm8Dma,
        Self::Imm8Str,
        Self::Imm12,
        Self::Imm14Str,
        Self::Imm16Str,
        Self::Imm22,
        Self::Imm22Rb,
        Self::Imm24,
        Self::Imm32,
        Self::Imm32ZeroRb,
        Self::Imm32DusRb,
    ];
}
