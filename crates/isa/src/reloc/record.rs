//! Persisted relocation records and their wire codec.
//!
//! Every fixup the assembler cannot resolve becomes exactly one record; the
//! linker consumes each record exactly once. Records keep their symbol
//! association permanently — there is no relaxation to section-relative
//! addressing — trading table size for link-time recomputation that is
//! always reproducible.
//!
//! The wire form is little-endian and self-delimiting:
//!
//! ```text
//! offset: u32 | sym_len: u16 | symbol: [u8; sym_len] | addend: i64 | type: u16
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LinkError;
use crate::reloc::RelocationType;

/// One pending patch: "put the address of `symbol` (plus `addend`) into the
/// field of type `rtype` at `offset`".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationRecord {
    /// Byte offset of the patch target within its section.
    pub offset: u32,
    /// Name of the symbol whose final address feeds the patch.
    pub symbol: String,
    /// Constant added to the symbol address before encoding.
    pub addend: i64,
    /// Persisted relocation type.
    pub rtype: RelocationType,
}

impl RelocationRecord {
    /// Appends the wire form of this record to `out`.
    ///
    /// The length prefix is a `u16`: a symbol name longer than 65535 bytes
    /// is truncated to that length, prefix and payload together, so the
    /// stream stays self-delimiting.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.offset.to_le_bytes());
        let sym = self.symbol.as_bytes();
        let sym_len = sym.len().min(usize::from(u16::MAX));
        out.extend_from_slice(&(sym_len as u16).to_le_bytes());
        out.extend_from_slice(&sym[..sym_len]);
        out.extend_from_slice(&self.addend.to_le_bytes());
        out.extend_from_slice(&self.rtype.id().to_le_bytes());
    }

    /// Wire form of this record.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.symbol.len());
        self.write_to(&mut out);
        out
    }

    /// Reads one record from the front of `bytes`, returning it and the
    /// number of bytes consumed.
    ///
    /// # Errors
    ///
    /// [`LinkError::TruncatedRecord`] if the input ends mid-record, and
    /// [`LinkError::UnrecognizedRelocation`] for a type id outside the
    /// closed set.
    pub fn read_from(bytes: &[u8]) -> Result<(Self, usize), LinkError> {
        fn take(bytes: &[u8], at: usize, len: usize) -> Result<&[u8], LinkError> {
            bytes
                .get(at..at + len)
                .ok_or(LinkError::TruncatedRecord { at })
        }
        fn le_array<const N: usize>(chunk: &[u8]) -> [u8; N] {
            let mut arr = [0u8; N];
            arr.copy_from_slice(chunk);
            arr
        }

        let offset = u32::from_le_bytes(le_array(take(bytes, 0, 4)?));
        let sym_len = usize::from(u16::from_le_bytes(le_array(take(bytes, 4, 2)?)));
        let symbol = String::from_utf8_lossy(take(bytes, 6, sym_len)?).into_owned();
        let mut at = 6 + sym_len;
        let addend = i64::from_le_bytes(le_array(take(bytes, at, 8)?));
        at += 8;
        let type_id = u16::from_le_bytes(le_array(take(bytes, at, 2)?));
        at += 2;
        let rtype = RelocationType::from_id(type_id)
            .ok_or(LinkError::UnrecognizedRelocation { type_id, offset })?;

        Ok((
            Self {
                offset,
                symbol,
                addend,
                rtype,
            },
            at,
        ))
    }
}
