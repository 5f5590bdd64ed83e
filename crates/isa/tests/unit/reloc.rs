//! # Relocation Tests
//!
//! This module contains unit tests for the persisted relocation-type id
//! set, the self-delimiting record wire codec, and link-time application
//! against an in-memory symbol table.

use std::collections::HashMap;

use pim_isa::reloc::{apply_relocation, apply_relocations};
use pim_isa::{FixupKind, IsaVersion, LinkError, RelocationRecord, RelocationType};
use pretty_assertions::assert_eq;

const V1: IsaVersion = IsaVersion::V1;

fn record(offset: u32, symbol: &str, addend: i64, rtype: RelocationType) -> RelocationRecord {
    RelocationRecord {
        offset,
        symbol: symbol.to_owned(),
        addend,
        rtype,
    }
}

/// Tests that the persisted ids are dense, stable, and closed under
/// `from_id`.
#[test]
fn ids_are_dense_and_stable() {
    assert_eq!(RelocationType::None.id(), 0);
    assert_eq!(RelocationType::Word.id(), 3);
    assert_eq!(RelocationType::Imm32DusRb.id(), 21);
    assert_eq!(RelocationType::ALL.len(), 22);
    for (index, &rtype) in RelocationType::ALL.iter().enumerate() {
        assert_eq!(usize::from(rtype.id()), index);
        assert_eq!(RelocationType::from_id(rtype.id()), Some(rtype));
    }
}

/// Tests that an id outside the closed set is rejected rather than
/// wrapped or clamped.
#[test]
fn unknown_ids_are_rejected() {
    assert_eq!(RelocationType::from_id(22), None);
    assert_eq!(RelocationType::from_id(u16::MAX), None);
}

/// Tests that the contiguous 32-bit field kind persists under the raw word
/// id, and that the raw word id resolves as a raw store.
#[test]
fn word32_folds_onto_word() {
    assert_eq!(
        RelocationType::from_fixup(FixupKind::Word32),
        RelocationType::Word
    );
    assert_eq!(RelocationType::Word.to_fixup(), FixupKind::Word);
}

/// Tests that every other fixup kind maps to its own id and back.
#[test]
fn fixup_mapping_round_trips() {
    for &kind in FixupKind::all() {
        let expected = if kind == FixupKind::Word32 {
            FixupKind::Word
        } else {
            kind
        };
        assert_eq!(RelocationType::from_fixup(kind).to_fixup(), expected);
    }
}

/// Tests that exactly the raw data types and the placeholder bypass
/// address translation.
#[test]
fn raw_data_types_do_not_target_addresses() {
    for &rtype in &RelocationType::ALL {
        let raw = matches!(
            rtype,
            RelocationType::None
                | RelocationType::Byte
                | RelocationType::Half
                | RelocationType::Word
                | RelocationType::Dword
        );
        assert_eq!(rtype.targets_address(), !raw, "{rtype:?}");
    }
}

/// Tests that a record survives the wire codec byte-exactly and reports
/// its consumed length.
#[test]
fn record_round_trips_through_wire_form() {
    let original = record(0x40, "printf", -8, RelocationType::Imm22Rb);
    let bytes = original.to_bytes();
    assert_eq!(bytes.len(), 16 + "printf".len());
    let (parsed, consumed) = RelocationRecord::read_from(&bytes).unwrap();
    assert_eq!(parsed, original);
    assert_eq!(consumed, bytes.len());
}

/// Tests that a record with an empty symbol name is representable.
#[test]
fn record_allows_empty_symbol() {
    let original = record(0, "", 0, RelocationType::None);
    let (parsed, consumed) = RelocationRecord::read_from(&original.to_bytes()).unwrap();
    assert_eq!(parsed, original);
    assert_eq!(consumed, 16);
}

/// Tests that a stream of concatenated records parses sequentially using
/// the consumed lengths.
#[test]
fn record_stream_parses_sequentially() {
    let first = record(0, "a", 1, RelocationType::Pc);
    let second = record(8, "longer_symbol", -1, RelocationType::Imm32);
    let mut stream = Vec::new();
    first.write_to(&mut stream);
    second.write_to(&mut stream);

    let (parsed_first, used) = RelocationRecord::read_from(&stream).unwrap();
    let (parsed_second, rest) = RelocationRecord::read_from(&stream[used..]).unwrap();
    assert_eq!(parsed_first, first);
    assert_eq!(parsed_second, second);
    assert_eq!(used + rest, stream.len());
}

/// Tests that a symbol name longer than the `u16` length prefix can carry
/// is truncated consistently in prefix and payload, so the stream stays
/// self-delimiting instead of desynchronizing.
#[test]
fn oversized_symbol_truncates_consistently() {
    let long = "s".repeat(70_000);
    let original = record(4, &long, 2, RelocationType::Imm5);
    let bytes = original.to_bytes();
    assert_eq!(bytes.len(), 16 + 65_535);

    let (parsed, consumed) = RelocationRecord::read_from(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(parsed.symbol.len(), 65_535);
    assert_eq!(parsed.offset, 4);
    assert_eq!(parsed.addend, 2);
    assert_eq!(parsed.rtype, RelocationType::Imm5);
}

/// Tests that input ending mid-record reports the byte position where it
/// ran out.
#[test]
fn truncated_input_reports_position() {
    assert_eq!(
        RelocationRecord::read_from(&[]),
        Err(LinkError::TruncatedRecord { at: 0 })
    );

    let bytes = record(4, "symbol", 0, RelocationType::Imm8).to_bytes();
    let cut = RelocationRecord::read_from(&bytes[..bytes.len() - 1]);
    assert!(matches!(cut, Err(LinkError::TruncatedRecord { .. })));
}

/// Tests that a persisted type id outside the closed set is reported as a
/// diagnostic naming the id and the record offset.
#[test]
fn unrecognized_type_id_is_a_diagnostic() {
    let mut bytes = record(0x10, "sym", 0, RelocationType::Imm5).to_bytes();
    let type_at = bytes.len() - 2;
    bytes[type_at..].copy_from_slice(&999u16.to_le_bytes());
    assert_eq!(
        RelocationRecord::read_from(&bytes),
        Err(LinkError::UnrecognizedRelocation {
            type_id: 999,
            offset: 0x10
        })
    );
}

/// Tests that resolving against a symbol table with no definition is a
/// diagnostic naming the symbol and offset.
#[test]
fn unresolved_symbol_is_reported() {
    let mut section = [0u8; 8];
    let resolver: HashMap<String, u64> = HashMap::new();
    let result = apply_relocation(
        &mut section,
        &record(4, "missing", 0, RelocationType::Pc),
        &resolver,
        V1,
    );
    assert_eq!(
        result,
        Err(LinkError::UnresolvedSymbol {
            symbol: "missing".to_owned(),
            offset: 4
        })
    );
}

/// Tests that a raw data relocation stores the flat value little-endian,
/// with no address translation even when the value carries a marker.
#[test]
fn raw_word_stores_untranslated_bytes() {
    let mut section = [0u8; 8];
    let mut symbols = HashMap::new();
    symbols.insert("table".to_owned(), 0x0800_1000u64);

    apply_relocation(
        &mut section,
        &record(2, "table", 0, RelocationType::Word),
        &symbols,
        V1,
    )
    .unwrap();

    assert_eq!(&section[2..6], &0x0800_1000u32.to_le_bytes());
    assert_eq!(&section[..2], &[0, 0]);
    assert_eq!(&section[6..], &[0, 0]);
}

/// Tests that each raw data type stores exactly its width at the record
/// offset and touches no neighboring byte.
#[test]
fn raw_types_store_exact_widths() {
    let widths = [
        (RelocationType::Byte, 1usize),
        (RelocationType::Half, 2),
        (RelocationType::Word, 4),
        (RelocationType::Dword, 8),
    ];
    let mut symbols = HashMap::new();
    symbols.insert("k".to_owned(), 0x1122_3344_5566_7788u64);

    for (rtype, size) in widths {
        let mut section = [0xEEu8; 12];
        apply_relocation(&mut section, &record(2, "k", 0, rtype), &symbols, V1).unwrap();
        assert_eq!(
            &section[2..2 + size],
            &0x1122_3344_5566_7788u64.to_le_bytes()[..size],
            "{rtype:?}"
        );
        for (index, byte) in section.iter().enumerate() {
            if !(2..2 + size).contains(&index) {
                assert_eq!(*byte, 0xEE, "{rtype:?} touched byte {index}");
            }
        }
    }
}

/// Tests that applying the same record twice leaves the section exactly as
/// one application does, on both the scatter and raw-store paths.
#[test]
fn reapplying_a_record_changes_nothing() {
    let mut symbols = HashMap::new();
    symbols.insert("sym".to_owned(), 0x8000_0040u64);

    for rtype in [RelocationType::Imm22, RelocationType::Word] {
        let mut section = [0u8; 8];
        let rec = record(0, "sym", 0, rtype);
        apply_relocation(&mut section, &rec, &symbols, V1).unwrap();
        let once = section;
        apply_relocation(&mut section, &rec, &symbols, V1).unwrap();
        assert_eq!(section, once, "{rtype:?}");
    }
}

/// Tests that an address-typed relocation translates the flat address to
/// its space-relative form before scattering.
#[test]
fn address_type_translates_before_encoding() {
    let mut section = [0u8; 8];
    let mut symbols = HashMap::new();
    // Instruction memory, byte 0x40: hardware word index 8.
    symbols.insert("entry".to_owned(), 0x8000_0040u64);

    apply_relocation(
        &mut section,
        &record(0, "entry", 0, RelocationType::Imm32),
        &symbols,
        V1,
    )
    .unwrap();

    assert_eq!(u64::from_le_bytes(section), 8 << 14);
}

/// Tests that the addend is added to the symbol address before the value
/// is translated.
#[test]
fn addend_applies_before_translation() {
    let mut section = [0u8; 8];
    let mut symbols = HashMap::new();
    symbols.insert("base".to_owned(), 0x8000_0000u64);

    apply_relocation(
        &mut section,
        &record(0, "base", 0x40, RelocationType::Pc),
        &symbols,
        V1,
    )
    .unwrap();

    assert_eq!(u64::from_le_bytes(section), 8);
}

/// Tests that the patch is ORed into the slot, preserving the opcode bits
/// already encoded there.
#[test]
fn patch_preserves_existing_slot_bits() {
    let existing: u64 = 0x7000_0000_0000_1234;
    let mut section = existing.to_le_bytes();
    let mut symbols = HashMap::new();
    symbols.insert("lock".to_owned(), 0xF000_0009u64);

    apply_relocation(
        &mut section,
        &record(0, "lock", 0, RelocationType::Imm4),
        &symbols,
        V1,
    )
    .unwrap();

    assert_eq!(u64::from_le_bytes(section), existing | (9 << 14));
}

/// Tests that the no-op relocation type succeeds without consulting the
/// symbol table or touching the section.
#[test]
fn none_type_is_a_no_op() {
    let mut section = [0xFFu8; 8];
    let resolver: HashMap<String, u64> = HashMap::new();
    apply_relocation(
        &mut section,
        &record(0, "whatever", 0, RelocationType::None),
        &resolver,
        V1,
    )
    .unwrap();
    assert_eq!(section, [0xFFu8; 8]);
}

/// Tests that a patch range past the end of the section is a diagnostic,
/// not a panic.
#[test]
fn patch_past_section_end_is_reported() {
    let mut section = [0u8; 4];
    let mut symbols = HashMap::new();
    symbols.insert("sym".to_owned(), 0u64);

    let result = apply_relocation(
        &mut section,
        &record(0, "sym", 1, RelocationType::Pc),
        &symbols,
        V1,
    );
    assert_eq!(
        result,
        Err(LinkError::PatchOutOfBounds {
            offset: 0,
            section_len: 4
        })
    );
}

/// Tests that a batch stops at the first failing record, leaving later
/// slots untouched.
#[test]
fn batch_stops_at_first_failure() {
    let mut section = [0u8; 16];
    let mut symbols = HashMap::new();
    symbols.insert("known".to_owned(), 0x10u64);

    let records = [
        record(0, "missing", 0, RelocationType::Pc),
        record(8, "known", 0, RelocationType::Pc),
    ];
    let result = apply_relocations(&mut section, &records, &symbols, V1);
    assert!(matches!(result, Err(LinkError::UnresolvedSymbol { .. })));
    assert_eq!(section, [0u8; 16]);
}
