//! Assembly-time fixup application and relocation-record emission.
//!
//! The object writer walks every fixup attached to a section fragment and
//! puts each one into exactly one of two states:
//! 1. **Resolved:** the value is known now; the bit-scatter codec patches
//!    the section bytes directly and nothing is persisted.
//! 2. **Pending:** the value waits on a symbol; exactly one relocation
//!    record is emitted and the section bytes are left untouched.
//!
//! The two states are a single enum, so a fixup can never be both patched
//! and persisted, or neither.

use tracing::{debug, trace};

use crate::fixup::{self, FixupKind};
use crate::isa::IsaVersion;
use crate::reloc::{RelocationRecord, RelocationType};

/// Value state of a fixup at object-emission time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixupValue {
    /// The final value is known; patch it now.
    Resolved(u64),
    /// The value depends on a symbol address fixed at link time.
    Pending {
        /// Symbol whose final address the patch needs.
        symbol: String,
        /// Constant added to the symbol address before encoding.
        addend: i64,
    },
}

/// One deferred patch attached to a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixup {
    /// Byte offset of the patch target within the section.
    pub offset: u32,
    /// Bit layout the patched value occupies.
    pub kind: FixupKind,
    /// Resolved value or pending symbol reference.
    pub value: FixupValue,
}

/// Patches resolved fixups into `section` and collects one relocation
/// record per pending fixup.
///
/// Resolved scatter-kind fixups OR their patch into the bytes the field
/// spans; the destination bits are expected to still be zero (the codec
/// sets bits, never clears them). Resolved raw-data fixups store
/// little-endian bytes. A resolved value of zero is skipped without
/// patching; note that for the one's-complement kind this is not a no-op
/// equivalence (the link-time path stores an all-ones field for zero), and
/// the skip is kept here as shipped assembler behavior.
///
/// # Panics
///
/// A fixup whose patch range falls outside the section is an assembler
/// layout bug, not an input condition, and fails fast.
pub fn apply_fixups<I>(section: &mut [u8], fixups: I, version: IsaVersion) -> Vec<RelocationRecord>
where
    I: IntoIterator<Item = Fixup>,
{
    let mut records = Vec::new();
    for fixup in fixups {
        match fixup.value {
            FixupValue::Resolved(value) => {
                apply_resolved(section, fixup.offset, fixup.kind, value, version);
            }
            FixupValue::Pending { symbol, addend } => {
                let record = RelocationRecord {
                    offset: fixup.offset,
                    symbol,
                    addend,
                    rtype: RelocationType::from_fixup(fixup.kind),
                };
                debug!(
                    offset = record.offset,
                    symbol = %record.symbol,
                    rtype = ?record.rtype,
                    "emitting relocation record"
                );
                records.push(record);
            }
        }
    }
    records
}

/// Patches one resolved fixup in place.
fn apply_resolved(section: &mut [u8], offset: u32, kind: FixupKind, value: u64, version: IsaVersion) {
    if value == 0 {
        // Zero is skipped rather than patched. For the one's-complement
        // kind this diverges from the link-time applier, which would store
        // an all-ones field; the skip matches the assembler as shipped and
        // must change on both paths or neither.
        return;
    }
    let offset = offset as usize;

    if let Some(size) = kind.data_size() {
        assert!(
            offset + size <= section.len(),
            "fixup range must lie inside the section"
        );
        section[offset..offset + size].copy_from_slice(&value.to_le_bytes()[..size]);
    } else {
        let patch = fixup::apply(kind, value, version);
        let spec = kind.scatter(version);
        let touched = usize::from(spec.patch_bits).div_ceil(8);
        assert!(
            offset + touched <= section.len(),
            "fixup range must lie inside the section"
        );
        for (i, byte) in section[offset..offset + touched].iter_mut().enumerate() {
            *byte |= (patch >> (i * 8)) as u8;
        }
    }
    trace!(offset, kind = kind.name(), value, "applied local fixup");
}
