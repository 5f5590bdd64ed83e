//! # Address Translation Tests
//!
//! This module contains unit tests for the flat-address classifier. It
//! verifies the marker-bit priority order, the stripping of each marker,
//! and the byte-to-word conversion applied to instruction-memory addresses.

use pim_isa::AddressSpace;
use pim_isa::mem::translate;
use rstest::rstest;

/// Tests the classification and space-relative value for one flat address
/// in each region, plus the region boundaries.
#[rstest]
#[case(0xF000_0010, AddressSpace::Atomic, 0x10)]
#[case(0xFFFF_FFFF, AddressSpace::Atomic, 0x0FFF_FFFF)]
#[case(0x8000_0000, AddressSpace::InstructionMemory, 0)]
#[case(0x8000_0040, AddressSpace::InstructionMemory, 8)]
#[case(0x0800_1000, AddressSpace::MainMemory, 0x1000)]
#[case(0x0800_0000, AddressSpace::MainMemory, 0)]
#[case(0x0000_0ABC, AddressSpace::WorkingMemory, 0x0ABC)]
#[case(0x0400_0000, AddressSpace::WorkingMemory, 0x0400_0000)]
#[case(0, AddressSpace::WorkingMemory, 0)]
fn classifies_each_region(
    #[case] raw: u64,
    #[case] space: AddressSpace,
    #[case] relative: u32,
) {
    assert_eq!(translate(raw), (space, relative));
}

/// Tests that the atomic region requires the whole top nibble: an address
/// with only some of those bits set falls through to the next marker.
#[test]
fn atomic_marker_is_the_full_nibble() {
    // 0x9XXX_XXXX sets the instruction-memory bit but not the full nibble.
    let (space, relative) = translate(0x9000_0000);
    assert_eq!(space, AddressSpace::InstructionMemory);
    assert_eq!(relative, 0x1000_0000 >> 3);
}

/// Tests that the atomic region wins over instruction memory when both
/// markers are present.
#[test]
fn atomic_wins_over_instruction_memory() {
    assert_eq!(translate(0xF800_0000), (AddressSpace::Atomic, 0x0800_0000));
}

/// Tests that instruction memory wins over main memory when both marker
/// bits are present.
#[test]
fn instruction_memory_wins_over_main_memory() {
    let (space, relative) = translate(0x8800_0000);
    assert_eq!(space, AddressSpace::InstructionMemory);
    assert_eq!(relative, 0x0800_0000 >> 3);
}

/// Tests that the low three bits of an instruction-memory address survive
/// word conversion as an additive intra-word offset.
#[test]
fn instruction_memory_keeps_intra_word_offset() {
    // Word 8 plus byte 3 encodes as word_index + 3.
    assert_eq!(
        translate(0x8000_0043),
        (AddressSpace::InstructionMemory, 8 + 3)
    );
}

/// Tests that bits above the 32-bit addressing convention are discarded
/// before classification.
#[test]
fn high_bits_are_discarded_first() {
    assert_eq!(translate(0x1_0000_0000), (AddressSpace::WorkingMemory, 0));
    assert_eq!(
        translate(0xFFFF_FFFF_0800_0004),
        (AddressSpace::MainMemory, 4)
    );
}
