//! Instruction encoding and relocation codec for the PIM accelerator toolchain.
//!
//! This crate is the shared bit-level contract between the assembler, the
//! object writer, and the linker. It provides:
//! 1. **Bit-scatter codec:** Packing semantic values into the scattered field
//!    positions of the fixed-width instruction word, and the inverse for
//!    disassembly.
//! 2. **Relocations:** The closed relocation-type id set, the persisted
//!    record format, and link-time application.
//! 3. **Address spaces:** Classification and translation of the flat 32-bit
//!    addressing convention into the four physical memories.
//! 4. **Conditions:** Mnemonic parsing/printing and per-class condition
//!    encoding tables.
//!
//! Every table is immutable `static` data; all operations are pure lookups,
//! safe to call from any number of threads without locking.

/// Condition mnemonics, classes, and encoding/decoding tables.
pub mod cond;
/// Assembly-time fixup application and relocation-record emission.
pub mod emit;
/// User-facing error taxonomy (bad source text, link failures).
pub mod error;
/// Fixup kinds and the versioned bit-scatter codec.
pub mod fixup;
/// Architecture revision key and the concrete opcode set.
pub mod isa;
/// Address-space classification and translation.
pub mod mem;
/// Relocation types, persisted records, and link-time application.
pub mod reloc;

pub use crate::cond::{Condition, ConditionClass};
pub use crate::error::{EncodeError, LinkError};
pub use crate::fixup::FixupKind;
pub use crate::isa::{IsaVersion, Opcode};
pub use crate::mem::AddressSpace;
pub use crate::reloc::{RelocationRecord, RelocationType, SymbolResolver};
