//! Architecture revision key and the concrete opcode set.
//!
//! All bit-layout data in this crate is keyed by [`IsaVersion`] so that the
//! assembler, the object writer, and the linker read one shared table
//! instead of carrying private copies. Earlier toolchains shipped divergent
//! copies of the layout tables under the same field names; the explicit
//! revision key exists so that divergence can never happen silently again.

/// Concrete instruction opcodes (generated).
pub mod opcode;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

pub use opcode::Opcode;

/// Bit-layout table revision.
///
/// Exactly one revision is wired up today. The historical record shows a
/// second table under partially renamed field kinds whose authoritative
/// layout could not be reconstructed; when it is recovered it becomes a new
/// variant here rather than a fork of the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsaVersion {
    /// First stable revision: 48-bit instruction words held in 64-bit
    /// little-endian slots.
    V1,
}

impl IsaVersion {
    /// Width of the instruction word, in bits.
    #[must_use]
    pub const fn word_bits(self) -> u32 {
        match self {
            Self::V1 => 48,
        }
    }

    /// Size of the memory slot holding one instruction word, in bytes.
    ///
    /// Instruction words are narrower than their slots; the linker reads and
    /// writes whole slots.
    #[must_use]
    pub const fn word_slot_bytes(self) -> usize {
        match self {
            Self::V1 => 8,
        }
    }

    /// Checks that every input object was built against the same revision.
    ///
    /// The first object fixes the expected revision; the first disagreement
    /// is reported naming both objects. Returns the common revision, or
    /// `None` for an empty input set.
    ///
    /// # Errors
    ///
    /// [`LinkError::IncompatibleAbi`] on the first revision mismatch.
    pub fn check_compat<'a, I>(objects: I) -> Result<Option<Self>, LinkError>
    where
        I: IntoIterator<Item = (&'a str, Self)>,
    {
        let mut first: Option<(&str, Self)> = None;
        for (name, version) in objects {
            match first {
                None => first = Some((name, version)),
                Some((first_name, expected)) if version != expected => {
                    return Err(LinkError::IncompatibleAbi {
                        first: first_name.to_owned(),
                        first_version: expected,
                        second: name.to_owned(),
                        second_version: version,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(first.map(|(_, v)| v))
    }
}

impl fmt::Display for IsaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
        }
    }
}
