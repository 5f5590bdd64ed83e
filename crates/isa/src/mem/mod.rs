//! Address-space classification and translation.
//!
//! The toolchain multiplexes four physically distinct memories into one flat
//! 32-bit addressing convention using high-order marker bits. This module
//! reverses that convention: given a flat address, it identifies the memory
//! and produces the space-relative value the instruction encoder expects.
//!
//! The layout is fixed by the linker script:
//! - atomic lock region mapped at `0xFXXX_XXXX`
//! - instruction memory mapped at `0x8XXX_XXXX` (word-addressed by hardware)
//! - main memory mapped at `0x08XX_XXXX`
//! - working memory with no remap, byte-addressed from zero

/// Marker for the atomic lock region (whole top nibble set).
const ATOMIC_MARKER: u32 = 0xF000_0000;
/// Marker bit for instruction memory.
const IRAM_MARKER: u32 = 0x8000_0000;
/// Marker bit for main memory.
const MRAM_MARKER: u32 = 0x0800_0000;
/// Instruction memory is addressed in 8-byte words.
const IRAM_WORD_SHIFT: u32 = 3;

/// One of the four physical memories multiplexed into the flat convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressSpace {
    /// Atomic lock region.
    Atomic,
    /// Instruction memory, word-addressed by the hardware.
    InstructionMemory,
    /// Main (bulk) memory, byte-addressed.
    MainMemory,
    /// Working memory, byte-addressed from zero.
    WorkingMemory,
}

/// Reinterprets a flat address as a space-relative, encoding-ready value.
///
/// Classification is total and runs in fixed priority order: atomic region,
/// then instruction memory, then main memory, with working memory as the
/// unmarked default. Bits above the 32-bit convention are discarded first.
///
/// Instruction-memory addresses convert from the toolchain's byte-granular
/// view to the hardware's word index. The low three bits survive the
/// conversion as an intra-word offset: a handful of relocation tricks (the
/// boot-sequence micro-jump) encode "word N, byte K" as `word_index + K`.
#[must_use]
pub fn translate(raw: u64) -> (AddressSpace, u32) {
    let addr = (raw & 0xFFFF_FFFF) as u32;

    if addr & ATOMIC_MARKER == ATOMIC_MARKER {
        (AddressSpace::Atomic, addr & !ATOMIC_MARKER)
    } else if addr & IRAM_MARKER != 0 {
        let stripped = addr & !IRAM_MARKER;
        let word = (stripped >> IRAM_WORD_SHIFT) + (stripped & ((1 << IRAM_WORD_SHIFT) - 1));
        (AddressSpace::InstructionMemory, word)
    } else if addr & MRAM_MARKER != 0 {
        (AddressSpace::MainMemory, addr & !MRAM_MARKER)
    } else {
        (AddressSpace::WorkingMemory, addr)
    }
}
