//! # Fixup Emission Tests
//!
//! This module contains unit tests for the assembly-time fixup applier.
//! It verifies that resolved fixups patch section bytes in place by OR,
//! that pending fixups produce exactly one relocation record each without
//! touching the bytes, and that the two outcomes never mix.

use pim_isa::emit::{Fixup, FixupValue, apply_fixups};
use pim_isa::{FixupKind, IsaVersion, RelocationType};

const V1: IsaVersion = IsaVersion::V1;

fn resolved(offset: u32, kind: FixupKind, value: u64) -> Fixup {
    Fixup {
        offset,
        kind,
        value: FixupValue::Resolved(value),
    }
}

fn pending(offset: u32, kind: FixupKind, symbol: &str, addend: i64) -> Fixup {
    Fixup {
        offset,
        kind,
        value: FixupValue::Pending {
            symbol: symbol.to_owned(),
            addend,
        },
    }
}

/// Tests that a resolved scatter fixup patches the section bytes and
/// produces no record.
#[test]
fn resolved_scatter_patches_in_place() {
    let mut section = [0u8; 8];
    let records = apply_fixups(
        &mut section,
        [resolved(0, FixupKind::Imm5, 0b1_0111)],
        V1,
    );
    assert!(records.is_empty());

    let expected: u64 = (0b0111 << 14) | (1 << 28);
    assert_eq!(u64::from_le_bytes(section), expected);
}

/// Tests that patching ORs into the bytes without clearing bits already
/// encoded there.
#[test]
fn resolved_patch_preserves_existing_bits() {
    let mut section = [0u8; 8];
    section[0] = 0x3F;
    section[1] = 0x01;

    apply_fixups(&mut section, [resolved(0, FixupKind::Imm4, 0xF)], V1);

    // 0xF << 14 touches bytes 1 and 2 only.
    assert_eq!(section[0], 0x3F);
    assert_eq!(section[1], 0x01 | 0xC0);
    assert_eq!(section[2], 0x03);
}

/// Tests that a resolved raw data fixup stores little-endian bytes at its
/// offset.
#[test]
fn resolved_raw_word_stores_bytes() {
    let mut section = [0u8; 8];
    apply_fixups(
        &mut section,
        [resolved(2, FixupKind::Word, 0xDEAD_BEEF)],
        V1,
    );
    assert_eq!(&section[2..6], &0xDEAD_BEEFu32.to_le_bytes());
}

/// Tests that each raw data kind stores exactly its width in little-endian
/// bytes at the fixup offset and touches no neighboring byte.
#[test]
fn raw_kinds_store_exact_widths() {
    let widths = [
        (FixupKind::Byte, 1usize),
        (FixupKind::Half, 2),
        (FixupKind::Word, 4),
        (FixupKind::Dword, 8),
    ];
    let value: u64 = 0x1122_3344_5566_7788;
    for (kind, size) in widths {
        let mut section = [0xEEu8; 12];
        let records = apply_fixups(&mut section, [resolved(2, kind, value)], V1);
        assert!(records.is_empty(), "{}", kind.name());
        assert_eq!(
            &section[2..2 + size],
            &value.to_le_bytes()[..size],
            "{}",
            kind.name()
        );
        for (index, byte) in section.iter().enumerate() {
            if !(2..2 + size).contains(&index) {
                assert_eq!(*byte, 0xEE, "{} touched byte {index}", kind.name());
            }
        }
    }
}

/// Tests that the narrow program-counter field touches only the two bytes
/// its patch span covers.
#[test]
fn pc_patch_touches_two_bytes() {
    let mut section = [0u8; 2];
    apply_fixups(&mut section, [resolved(0, FixupKind::Pc, 0x3FFF)], V1);
    assert_eq!(section, [0xFF, 0x3F]);
}

/// Tests that a resolved value of zero changes nothing: the destination
/// field is already zero and no bytes are touched.
#[test]
fn zero_value_is_skipped() {
    let mut section = [0xABu8; 8];
    let records = apply_fixups(&mut section, [resolved(0, FixupKind::Imm22, 0)], V1);
    assert!(records.is_empty());
    assert_eq!(section, [0xABu8; 8]);
}

/// Tests that the zero skip applies even to the one's-complement kind,
/// where it is a real divergence: the link-time path would store an
/// all-ones field for zero, this path leaves the bytes alone.
#[test]
fn zero_value_skip_covers_inverted_kind() {
    let mut section = [0u8; 8];
    let records = apply_fixups(&mut section, [resolved(0, FixupKind::Imm5RbInv, 0)], V1);
    assert!(records.is_empty());
    assert_eq!(section, [0u8; 8]);
}

/// Tests that a pending fixup emits exactly one record carrying the mapped
/// relocation type and leaves the section untouched.
#[test]
fn pending_emits_one_record() {
    let mut section = [0u8; 8];
    let records = apply_fixups(
        &mut section,
        [pending(4, FixupKind::Imm22Rb, "printf", -8)],
        V1,
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].offset, 4);
    assert_eq!(records[0].symbol, "printf");
    assert_eq!(records[0].addend, -8);
    assert_eq!(records[0].rtype, RelocationType::Imm22Rb);
    assert_eq!(section, [0u8; 8]);
}

/// Tests that a pending contiguous 32-bit fixup persists under the raw
/// word relocation id.
#[test]
fn pending_word32_persists_as_word() {
    let mut section = [0u8; 8];
    let records = apply_fixups(
        &mut section,
        [pending(0, FixupKind::Word32, "data", 0)],
        V1,
    );
    assert_eq!(records[0].rtype, RelocationType::Word);
}

/// Tests that a mixed batch patches the resolved fixups and emits records
/// for the pending ones, in input order.
#[test]
fn mixed_batch_splits_cleanly() {
    let mut section = [0u8; 16];
    let records = apply_fixups(
        &mut section,
        [
            resolved(0, FixupKind::Imm4, 0x5),
            pending(8, FixupKind::Pc, "first", 0),
            pending(8, FixupKind::Imm8, "second", 4),
        ],
        V1,
    );

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].symbol, "first");
    assert_eq!(records[1].symbol, "second");
    assert_eq!(
        u64::from_le_bytes(section[..8].try_into().unwrap()),
        0x5 << 14
    );
    assert_eq!(&section[8..], &[0u8; 8]);
}

/// Tests that a fixup whose patch range falls outside the section is
/// treated as an assembler layout bug and panics.
#[test]
#[should_panic(expected = "inside the section")]
fn fixup_outside_section_is_fatal() {
    let mut section = [0u8; 6];
    let _ = apply_fixups(&mut section, [resolved(4, FixupKind::Imm5, 1)], V1);
}
