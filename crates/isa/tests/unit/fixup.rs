//! # Bit-Scatter Codec Tests
//!
//! This module contains unit tests for the fixup-kind layout table and the
//! scatter/gather codec built on it. It verifies the bit placement of the
//! non-contiguous immediate fields, the one's-complement kind, silent
//! truncation of oversized values, the gather inverse, and the generated
//! operand-to-fixup dispatch map.

use pim_isa::fixup::{self, FixupKind};
use pim_isa::{IsaVersion, Opcode};
use proptest::prelude::*;

const V1: IsaVersion = IsaVersion::V1;

/// Mask covering the semantic value width of a kind.
fn value_mask(kind: FixupKind) -> u64 {
    let bits = kind.value_bits(V1);
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Tests that a 5-bit immediate splits into its low nibble at bit 14 and
/// its high bit at bit 28.
#[test]
fn imm5_scatters_low_and_high_parts() {
    let patch = fixup::apply(FixupKind::Imm5, 0b1_0111, V1);
    assert_eq!(patch, (0b0111 << 14) | (1 << 28));
}

/// Tests that a 4-bit immediate lands as one nibble at bit 14.
#[test]
fn imm4_places_nibble_at_bit_14() {
    assert_eq!(fixup::apply(FixupKind::Imm4, 0xF, V1), 0xF << 14);
}

/// Tests that the DMA immediate is a single contiguous move to bit 6.
#[test]
fn imm8_dma_is_one_contiguous_move() {
    assert_eq!(fixup::apply(FixupKind::Imm8Dma, 0xA5, V1), 0xA5 << 6);
}

/// Tests that the program-counter field sits contiguously at the base of
/// the instruction word.
#[test]
fn pc_field_sits_at_word_base() {
    assert_eq!(fixup::apply(FixupKind::Pc, 0x2ABC, V1), 0x2ABC);
}

/// Tests that the inverted register-bank kind stores the one's complement
/// of the logical value, using the non-inverted kind as the reference
/// placement.
#[test]
fn imm5_rb_inv_stores_ones_complement() {
    for value in 0..32u64 {
        assert_eq!(
            fixup::apply(FixupKind::Imm5RbInv, value, V1),
            fixup::apply(FixupKind::Imm5Rb, !value & 0x1F, V1),
        );
    }
}

/// Tests that gathering an inverted-kind patch recovers the logical value,
/// not the stored complement.
#[test]
fn imm5_rb_inv_round_trips() {
    for value in 0..32u64 {
        let patch = fixup::apply(FixupKind::Imm5RbInv, value, V1);
        assert_eq!(fixup::invert(FixupKind::Imm5RbInv, patch, V1), value);
    }
}

/// Tests that the raw data kinds truncate to their store width instead of
/// scattering.
#[test]
fn raw_kinds_truncate_to_store_width() {
    assert_eq!(fixup::apply(FixupKind::Byte, 0x1FF, V1), 0xFF);
    assert_eq!(fixup::apply(FixupKind::Half, 0x1_2345, V1), 0x2345);
    assert_eq!(fixup::apply(FixupKind::Word, 0x1_2345_6789, V1), 0x2345_6789);
    assert_eq!(fixup::apply(FixupKind::Dword, u64::MAX, V1), u64::MAX);
}

/// Tests that the contiguous 32-bit field kind occupies the low bits of the
/// word and is scattered rather than byte-stored.
#[test]
fn word32_occupies_contiguous_low_bits() {
    assert_eq!(FixupKind::Word32.data_size(), None);
    assert_eq!(
        fixup::apply(FixupKind::Word32, 0xDEAD_BEEF_CAFE, V1),
        0xBEEF_CAFE
    );
}

/// Tests that applying the placeholder kind never changes a word.
#[test]
fn none_kind_patches_nothing() {
    assert_eq!(fixup::apply(FixupKind::None, u64::MAX, V1), 0);
}

/// Tests that a value wider than its field is silently truncated to the
/// field width rather than rejected.
#[test]
fn oversized_value_truncates_silently() {
    assert_eq!(
        fixup::apply(FixupKind::Imm8, 0x1AB, V1),
        fixup::apply(FixupKind::Imm8, 0xAB, V1),
    );
}

/// Tests that gathering recovers the exact value for the boundary patterns
/// of every kind.
#[test]
fn gather_round_trips_extreme_values() {
    for &kind in FixupKind::all() {
        let mask = value_mask(kind);
        for value in [0, mask, 0xAAAA_AAAA_AAAA_AAAA & mask] {
            let patch = fixup::apply(kind, value, V1);
            assert_eq!(
                fixup::invert(kind, patch, V1),
                value,
                "kind {} value {value:#x}",
                kind.name()
            );
        }
    }
}

/// Tests that the codec is deterministic: repeated calls with the same
/// inputs yield identical patches and values, with no observable state
/// anywhere in the tables.
#[test]
fn apply_and_invert_are_deterministic() {
    for &kind in FixupKind::all() {
        for value in [0u64, 1, 0x1234_5678_9ABC_DEF0, u64::MAX] {
            let patch = fixup::apply(kind, value, V1);
            assert_eq!(fixup::apply(kind, value, V1), patch, "{}", kind.name());
            assert_eq!(
                fixup::invert(kind, patch, V1),
                fixup::invert(kind, patch, V1),
                "{}",
                kind.name()
            );
        }
    }
}

/// Tests the structural invariants of the layout table: destination fields
/// never overlap, every field fits inside the declared patch span, and the
/// source fields tile the semantic value exactly.
#[test]
fn scatter_table_is_well_formed() {
    for &kind in FixupKind::all() {
        let spec = kind.scatter(V1);
        let mut dst_mask = 0u64;
        let mut src_mask = 0u64;
        for field in spec.fields {
            let bits = (1u64 << field.width) - 1;
            assert_eq!(
                dst_mask & (bits << field.dst),
                0,
                "kind {} has overlapping destinations",
                kind.name()
            );
            dst_mask |= bits << field.dst;
            src_mask |= bits << field.src;
            assert!(
                field.dst + field.width <= spec.patch_bits,
                "kind {} spills past its patch span",
                kind.name()
            );
        }
        if !spec.fields.is_empty() {
            assert_eq!(
                src_mask,
                value_mask(kind),
                "kind {} does not tile its value width",
                kind.name()
            );
        }
    }
}

/// Tests that no patch ever sets a bit outside the kind's declared span,
/// even for an all-ones input.
#[test]
fn patch_stays_inside_declared_span() {
    for &kind in FixupKind::all() {
        if kind.data_size().is_some() {
            continue;
        }
        let spec = kind.scatter(V1);
        let span = if spec.patch_bits >= 64 {
            u64::MAX
        } else {
            (1 << spec.patch_bits) - 1
        };
        assert_eq!(fixup::apply(kind, u64::MAX, V1) & !span, 0, "{}", kind.name());
    }
}

/// Tests the generated operand map against known instruction shapes.
#[test]
fn operand_map_matches_known_shapes() {
    assert_eq!(
        fixup::operand_fixups(Opcode::BOOTrici),
        &[(1, FixupKind::Imm4), (3, FixupKind::Pc)]
    );
    assert_eq!(
        fixup::operand_fixups(Opcode::SBrii),
        &[(1, FixupKind::Imm22), (2, FixupKind::Imm8Str)]
    );
    assert_eq!(fixup::fixup_for_operand(Opcode::LSLXrri, 2), FixupKind::Imm5);
    assert_eq!(fixup::fixup_for_operand(Opcode::TELLri, 1), FixupKind::Pc);
    assert_eq!(
        fixup::fixup_for_operand(Opcode::LW_SETSrki, 2),
        FixupKind::Imm22
    );
    assert_eq!(
        fixup::fixup_for_operand(Opcode::NANDrric, 2),
        FixupKind::Imm22Rb
    );
    assert_eq!(fixup::fixup_for_operand(Opcode::MOVEri, 1), FixupKind::Imm32);
}

/// Tests that a register-only variant carries no operand fixups at all.
#[test]
fn register_only_variant_has_no_fixups() {
    assert!(fixup::operand_fixups(Opcode::SUBC_Urrrc).is_empty());
}

/// Tests that asking for a fixup on an operand that carries none is treated
/// as an internal desync and panics.
#[test]
#[should_panic(expected = "carries no fixup")]
fn unmapped_operand_is_fatal() {
    let _ = fixup::fixup_for_operand(Opcode::SUBC_Urrrc, 0);
}

proptest! {
    /// Property: gathering a patch recovers the applied value, truncated to
    /// the kind's semantic width, for every kind and any input value.
    #[test]
    fn gather_inverts_scatter(value in any::<u64>()) {
        for &kind in FixupKind::all() {
            let patch = fixup::apply(kind, value, V1);
            prop_assert_eq!(fixup::invert(kind, patch, V1), value & value_mask(kind));
        }
    }
}
