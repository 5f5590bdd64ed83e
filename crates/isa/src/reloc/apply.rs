//! Link-time relocation application.
//!
//! The linker's resolution loop hands each record here once its symbol has a
//! final address. Application recomputes `symbol + addend`, routes the
//! result through the address-space translator when the relocation type
//! targets an address, and re-runs the same bit-scatter codec the assembler
//! used, so both stages place bits identically by construction.

use tracing::trace;

use crate::error::LinkError;
use crate::fixup;
use crate::isa::IsaVersion;
use crate::mem;
use crate::reloc::{RelocationRecord, RelocationType};

/// Source of final symbol addresses; implemented by the linker's symbol
/// table.
pub trait SymbolResolver {
    /// Final flat address of `symbol`, or `None` if it has no definition.
    fn address_of(&self, symbol: &str) -> Option<u64>;
}

impl SymbolResolver for std::collections::HashMap<String, u64> {
    fn address_of(&self, symbol: &str) -> Option<u64> {
        self.get(symbol).copied()
    }
}

impl SymbolResolver for std::collections::BTreeMap<String, u64> {
    fn address_of(&self, symbol: &str) -> Option<u64> {
        self.get(symbol).copied()
    }
}

/// Applies one relocation record to its section.
///
/// Raw data types store their value as little-endian bytes, untranslated.
/// Every other type resolves to an address: the flat `symbol + addend`
/// value is translated to its space-relative form, scattered into a patch,
/// and ORed into the 64-bit little-endian slot at the record's offset.
///
/// # Errors
///
/// [`LinkError::UnresolvedSymbol`] if the resolver has no address for the
/// record's symbol, and [`LinkError::PatchOutOfBounds`] if the patch range
/// does not lie inside `section`.
pub fn apply_relocation<R: SymbolResolver + ?Sized>(
    section: &mut [u8],
    record: &RelocationRecord,
    resolver: &R,
    version: IsaVersion,
) -> Result<(), LinkError> {
    if record.rtype == RelocationType::None {
        return Ok(());
    }

    let address = resolver
        .address_of(&record.symbol)
        .ok_or_else(|| LinkError::UnresolvedSymbol {
            symbol: record.symbol.clone(),
            offset: record.offset,
        })?;
    let flat = address.wrapping_add(record.addend as u64);

    let value = if record.rtype.targets_address() {
        let (space, relative) = mem::translate(flat);
        trace!(
            symbol = %record.symbol,
            flat,
            ?space,
            relative,
            "translated relocation target"
        );
        u64::from(relative)
    } else {
        flat
    };

    let kind = record.rtype.to_fixup();
    let offset = record.offset as usize;
    let section_len = section.len();

    if let Some(size) = kind.data_size() {
        let bytes = section.get_mut(offset..offset + size).ok_or(
            LinkError::PatchOutOfBounds {
                offset: record.offset,
                section_len,
            },
        )?;
        bytes.copy_from_slice(&value.to_le_bytes()[..size]);
    } else {
        let slot_len = version.word_slot_bytes();
        let slot = section.get_mut(offset..offset + slot_len).ok_or(
            LinkError::PatchOutOfBounds {
                offset: record.offset,
                section_len,
            },
        )?;
        let mut word = [0u8; 8];
        word[..slot_len].copy_from_slice(slot);
        let patched = u64::from_le_bytes(word) | fixup::apply(kind, value, version);
        slot.copy_from_slice(&patched.to_le_bytes()[..slot_len]);
    }

    trace!(
        offset = record.offset,
        symbol = %record.symbol,
        rtype = ?record.rtype,
        value,
        "applied relocation"
    );
    Ok(())
}

/// Applies a batch of relocation records to one section.
///
/// Records are applied in order; the first failure stops the batch.
///
/// # Errors
///
/// Propagates the first [`LinkError`] from [`apply_relocation`].
pub fn apply_relocations<R: SymbolResolver + ?Sized>(
    section: &mut [u8],
    records: &[RelocationRecord],
    resolver: &R,
    version: IsaVersion,
) -> Result<(), LinkError> {
    for record in records {
        apply_relocation(section, record, resolver, version)?;
    }
    Ok(())
}
