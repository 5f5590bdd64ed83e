//! User-facing error taxonomy.
//!
//! Two failure families exist in this toolchain layer and they are kept
//! strictly apart:
//! 1. **Diagnostics** (this module): bad assembly source or bad link inputs.
//!    Reported to the user with the offending name or offset, never a crash.
//! 2. **Internal consistency failures**: an unmapped fixup kind, relocation
//!    type, or opcode means the tool's own generated tables are out of sync
//!    with the architecture database. Those panic at the lookup site and are
//!    deliberately absent from these enums.

use thiserror::Error;

use crate::isa::IsaVersion;

/// Errors raised while encoding assembly-source operands.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The operand text is not a condition mnemonic, even after alias
    /// canonicalization.
    #[error("unknown condition mnemonic `{text}`")]
    UnknownMnemonic {
        /// The operand text as written in the source.
        text: String,
    },
}

/// Errors raised while applying relocations at link time.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// A relocation names a symbol with no definition in any input.
    #[error("undefined symbol `{symbol}` referenced by relocation at offset {offset:#x}")]
    UnresolvedSymbol {
        /// Name of the missing symbol.
        symbol: String,
        /// Section offset of the relocation that needs it.
        offset: u32,
    },

    /// A relocation's patch range runs past the end of its section.
    #[error("relocation at offset {offset:#x} runs past the end of the section ({section_len:#x} bytes)")]
    PatchOutOfBounds {
        /// Section offset of the offending relocation.
        offset: u32,
        /// Length of the section being patched.
        section_len: usize,
    },

    /// A persisted relocation record carries a type id outside the closed set.
    #[error("unrecognized relocation type {type_id} at offset {offset:#x}")]
    UnrecognizedRelocation {
        /// The persisted id that matched no known relocation type.
        type_id: u16,
        /// Section offset of the offending record.
        offset: u32,
    },

    /// A persisted relocation record ends before its fixed-size fields do.
    #[error("truncated relocation record at byte {at}")]
    TruncatedRecord {
        /// Byte position within the record stream where input ran out.
        at: usize,
    },

    /// Two input objects were built against different architecture revisions.
    #[error("incompatible ISA revision between `{first}` ({first_version}) and `{second}` ({second_version})")]
    IncompatibleAbi {
        /// Name of the object that fixed the revision.
        first: String,
        /// Revision carried by `first`.
        first_version: IsaVersion,
        /// Name of the object that disagrees.
        second: String,
        /// Revision carried by `second`.
        second_version: IsaVersion,
    },
}
