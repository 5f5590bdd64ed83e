//! # Revision Key Tests
//!
//! This module contains unit tests for the architecture revision key:
//! the instruction-word geometry constants and the cross-object revision
//! compatibility check.

use pim_isa::IsaVersion;

/// Tests the word geometry of the first stable revision: 48-bit words held
/// in 8-byte slots.
#[test]
fn v1_word_geometry() {
    assert_eq!(IsaVersion::V1.word_bits(), 48);
    assert_eq!(IsaVersion::V1.word_slot_bytes(), 8);
    assert!(IsaVersion::V1.word_bits() as usize <= IsaVersion::V1.word_slot_bytes() * 8);
}

/// Tests the diagnostic rendering of the revision key.
#[test]
fn v1_displays_as_v1() {
    assert_eq!(IsaVersion::V1.to_string(), "v1");
}

/// Tests that an empty input set has no common revision and is not an
/// error.
#[test]
fn compat_check_accepts_empty_input() {
    assert_eq!(IsaVersion::check_compat([]), Ok(None));
}

/// Tests that agreeing objects produce their common revision.
#[test]
fn compat_check_returns_common_revision() {
    let objects = [
        ("a.o", IsaVersion::V1),
        ("b.o", IsaVersion::V1),
        ("c.o", IsaVersion::V1),
    ];
    assert_eq!(IsaVersion::check_compat(objects), Ok(Some(IsaVersion::V1)));
}
