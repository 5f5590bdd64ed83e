//! # Unit Components
//!
//! This module is the hub for the codec unit tests, organized by the
//! library module each file exercises.

/// Unit tests for condition mnemonics, classes, and their encoding tables.
///
/// This module verifies mnemonic parsing (including alias spellings), the
/// per-class legality sets, and the encode/decode tables, including the
/// synonym pairs that share a hardware code in the compare-capable classes.
pub mod cond;

/// Unit tests for assembly-time fixup application.
///
/// This module verifies that resolved fixups are patched into section bytes
/// by OR without clearing existing encoding bits, and that pending fixups
/// are turned into exactly one relocation record each.
pub mod emit;

/// Unit tests for the bit-scatter codec and the operand-to-fixup map.
///
/// This module verifies the scatter and gather directions of every fixup
/// kind, the one's-complement kind, silent truncation of oversized values,
/// and structural invariants of the layout table itself.
pub mod fixup;

/// Unit tests for address-space classification and translation.
///
/// This module verifies the marker-bit priority order and the byte-to-word
/// conversion applied to instruction-memory addresses.
pub mod mem;

/// Unit tests for relocation types, the record wire codec, and link-time
/// application.
///
/// This module verifies the stability of the persisted id set, the
/// self-delimiting record format and its error reporting, and the full
/// resolve-translate-patch path against an in-memory symbol table.
pub mod reloc;

/// Unit tests for the architecture revision key.
///
/// This module verifies the word geometry constants and the cross-object
/// revision compatibility check.
pub mod version;
