//! Versioned bit-scatter layout table.
//!
//! One row per [`FixupKind`](super::FixupKind), in declaration order. This is
//! the single authoritative copy of the instruction-word field layout; the
//! assembler, the object writer, and the linker all read it through
//! [`FixupKind::scatter`](super::FixupKind::scatter).
//!
//! Immediate fields are not contiguous in the instruction word. Each row
//! lists the ordered `(src, width, dst)` moves that place the bits of a
//! semantic value into their hardware positions.

/// One contiguous bit move: `width` bits taken from `src` in the semantic
/// value, placed at `dst` in the instruction word.
#[derive(Clone, Copy, Debug)]
pub struct ScatterField {
    /// Source bit offset within the semantic value.
    pub src: u8,
    /// Number of bits moved.
    pub width: u8,
    /// Destination bit offset within the instruction word.
    pub dst: u8,
}

/// Complete layout of one fixup kind.
#[derive(Clone, Copy, Debug)]
pub struct ScatterSpec {
    /// Total semantic value width consumed, in bits.
    pub value_bits: u8,
    /// Span of the instruction word the assembler's patch touches, in bits.
    /// Byte-granular appliers OR `ceil(patch_bits / 8)` bytes.
    pub patch_bits: u8,
    /// Bitwise-complement the value before scattering. The hardware reads
    /// the stored field as the one's complement of the logical value.
    pub complement: bool,
    /// Ordered bit moves; empty for the raw data kinds, which store bytes
    /// directly instead of scattering.
    pub fields: &'static [ScatterField],
}

/// Shorthand for table rows.
const fn f(src: u8, width: u8, dst: u8) -> ScatterField {
    ScatterField { src, width, dst }
}

const fn spec(value_bits: u8, patch_bits: u8, fields: &'static [ScatterField]) -> ScatterSpec {
    ScatterSpec {
        value_bits,
        patch_bits,
        complement: false,
        fields,
    }
}

/// Revision 1 layout, indexed by fixup kind.
pub(super) static SCATTER_V1: [ScatterSpec; 23] = [
    // None
    spec(0, 0, &[]),
    // Byte / Half / Word / Dword: direct little-endian stores.
    spec(8, 8, &[]),
    spec(16, 16, &[]),
    spec(32, 32, &[]),
    spec(64, 64, &[]),
    // Word32
    spec(32, 32, &[f(0, 32, 0)]),
    // Pc
    spec(14, 14, &[f(0, 14, 0)]),
    // Imm4
    spec(4, 48, &[f(0, 4, 14)]),
    // Imm5
    spec(5, 48, &[f(0, 4, 14), f(4, 1, 28)]),
    // Imm5Rb
    spec(5, 48, &[f(0, 4, 14), f(4, 1, 24)]),
    // Imm5RbInv
    ScatterSpec {
        value_bits: 5,
        patch_bits: 48,
        complement: true,
        fields: &[f(0, 4, 14), f(4, 1, 24)],
    },
    // Imm8
    spec(8, 48, &[f(0, 4, 14), f(4, 4, 28)]),
    // Imm8Dma
    spec(8, 48, &[f(0, 8, 6)]),
    // Imm8Str
    spec(8, 48, &[f(0, 1, 23), f(1, 3, 39), f(4, 4, 28)]),
    // Imm12
    spec(
        12,
        48,
        &[f(0, 4, 14), f(4, 3, 28), f(7, 1, 24), f(8, 3, 39), f(11, 1, 31)],
    ),
    // Imm14Str
    spec(14, 48, &[f(8, 6, 0), f(0, 8, 14)]),
    // Imm16Str
    spec(16, 48, &[f(0, 1, 23), f(1, 3, 39), f(4, 4, 28), f(8, 8, 6)]),
    // Imm22
    spec(22, 48, &[f(8, 14, 0), f(0, 4, 14), f(4, 4, 18)]),
    // Imm22Rb
    spec(
        22,
        48,
        &[f(0, 4, 14), f(4, 3, 28), f(7, 1, 13), f(8, 13, 0), f(21, 1, 31)],
    ),
    // Imm24
    spec(
        24,
        48,
        &[
            f(0, 4, 14),
            f(4, 3, 28),
            f(7, 1, 24),
            f(8, 14, 0),
            f(22, 1, 22),
            f(23, 1, 31),
        ],
    ),
    // Imm32
    spec(32, 48, &[f(8, 14, 0), f(0, 4, 14), f(22, 10, 18), f(4, 4, 28)]),
    // Imm32ZeroRb
    spec(
        32,
        48,
        &[f(8, 14, 0), f(0, 4, 14), f(22, 10, 18), f(4, 3, 34), f(7, 1, 39)],
    ),
    // Imm32DusRb
    spec(
        32,
        48,
        &[f(8, 14, 0), f(0, 4, 14), f(22, 10, 18), f(4, 3, 34), f(7, 1, 44)],
    ),
];
