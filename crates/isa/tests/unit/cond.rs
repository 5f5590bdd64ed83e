//! # Condition Table Tests
//!
//! This module contains unit tests for condition mnemonic parsing, the
//! per-class legality sets, and the encode/decode tables, including the
//! mnemonic pairs that share one hardware code in the compare-capable
//! classes.

use pim_isa::{Condition, ConditionClass, EncodeError, Opcode};

/// Tests parsing of canonical mnemonics, case-insensitively.
#[test]
fn parses_canonical_mnemonics() {
    assert_eq!("nz".parse(), Ok(Condition::NotZero));
    assert_eq!("NZ".parse(), Ok(Condition::NotZero));
    assert_eq!("z".parse(), Ok(Condition::Zero));
    assert_eq!("xgts".parse(), Ok(Condition::ExtendedGreaterThanSigned));
    assert_eq!("True".parse(), Ok(Condition::True));
    assert_eq!("false".parse(), Ok(Condition::False));
}

/// Tests that the alias spellings fold onto their canonical mnemonics.
#[test]
fn parses_alias_spellings() {
    assert_eq!("t".parse(), Ok(Condition::True));
    assert_eq!("T".parse(), Ok(Condition::True));
    assert_eq!("nsz".parse(), Ok(Condition::SourceNotZero));
    assert_eq!("NSZ".parse(), Ok(Condition::SourceNotZero));
}

/// Tests that unknown operand text is reported with the text as written.
#[test]
fn rejects_unknown_mnemonics() {
    let err = "Bogus".parse::<Condition>();
    assert_eq!(
        err,
        Err(EncodeError::UnknownMnemonic {
            text: "Bogus".to_owned()
        })
    );
}

/// Tests that printing and re-parsing is the identity for every condition.
#[test]
fn display_round_trips_every_condition() {
    for &cond in Condition::all() {
        assert_eq!(cond.as_str().parse(), Ok(cond));
    }
}

/// Tests the shape of the degenerate legality sets.
#[test]
fn degenerate_classes_have_expected_members() {
    assert_eq!(
        ConditionClass::False.legal_conditions().collect::<Vec<_>>(),
        vec![Condition::False]
    );
    assert_eq!(
        ConditionClass::True.legal_conditions().collect::<Vec<_>>(),
        vec![Condition::True]
    );
    assert_eq!(
        ConditionClass::TrueFalse
            .legal_conditions()
            .collect::<Vec<_>>(),
        vec![Condition::False, Condition::True]
    );
    assert_eq!(ConditionClass::NoCond.legal_conditions().count(), 0);
}

/// Tests that the `Nz` flavor of a class drops `false` from the full
/// flavor's legality set and nothing else.
#[test]
fn nz_flavor_drops_false_only() {
    let full: Vec<_> = ConditionClass::Add.legal_conditions().collect();
    let nz: Vec<_> = ConditionClass::AddNz.legal_conditions().collect();
    assert!(full.contains(&Condition::False));
    assert!(!nz.contains(&Condition::False));
    let trimmed: Vec<_> = full
        .into_iter()
        .filter(|&c| c != Condition::False)
        .collect();
    assert_eq!(nz, trimmed);
}

/// Tests known hardware codes in the add class, both directions.
#[test]
fn add_class_encodes_known_codes() {
    assert_eq!(ConditionClass::Add.encode(Condition::Zero), 2);
    assert_eq!(ConditionClass::Add.encode(Condition::NotZero), 3);
    assert_eq!(ConditionClass::Add.decode(2), Some(Condition::Zero));
    assert_eq!(ConditionClass::Add.decode(3), Some(Condition::NotZero));
}

/// Tests that a code the class never produces decodes to `None`.
#[test]
fn unused_codes_decode_to_none() {
    assert_eq!(ConditionClass::Add.decode(16), None);
    assert_eq!(ConditionClass::NoCond.decode(0), None);
    assert_eq!(ConditionClass::True.decode(0), None);
}

/// Tests that a code outside the hardware field width is treated as a
/// caller bug.
#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_code_is_fatal() {
    let _ = ConditionClass::Add.decode(64);
}

/// Tests that the flag-synonym pairs share one hardware code in the
/// subtract class and decode to the canonical member of each pair.
#[test]
fn subtract_class_folds_flag_synonyms() {
    let sub = ConditionClass::Sub;
    assert_eq!(sub.encode(Condition::Equal), sub.encode(Condition::Zero));
    assert_eq!(
        sub.encode(Condition::Carry),
        sub.encode(Condition::GreaterOrEqualUnsigned)
    );
    assert_eq!(
        sub.encode(Condition::NotCarry),
        sub.encode(Condition::LessThanUnsigned)
    );
    assert_eq!(
        sub.encode(Condition::NotEqual),
        sub.encode(Condition::NotZero)
    );

    assert_eq!(
        sub.decode(sub.encode(Condition::Equal)),
        Some(Condition::Zero)
    );
    assert_eq!(
        sub.decode(sub.encode(Condition::Carry)),
        Some(Condition::GreaterOrEqualUnsigned)
    );
    assert_eq!(
        sub.decode(sub.encode(Condition::NotCarry)),
        Some(Condition::LessThanUnsigned)
    );
    assert_eq!(
        sub.decode(sub.encode(Condition::NotEqual)),
        Some(Condition::NotZero)
    );
}

/// Tests that every legal condition of every class round-trips through its
/// hardware code, exactly for most conditions and up to the canonical
/// synonym otherwise.
#[test]
fn every_legal_condition_round_trips() {
    let canonical = [
        Condition::Zero,
        Condition::GreaterOrEqualUnsigned,
        Condition::LessThanUnsigned,
        Condition::NotZero,
    ];
    for &class in ConditionClass::all() {
        for cond in class.legal_conditions() {
            let code = class.encode(cond);
            let decoded = match class.decode(code) {
                Some(decoded) => decoded,
                None => panic!("{class:?} cannot decode its own code for {cond}"),
            };
            assert!(class.contains(decoded), "{class:?} decoded {decoded}");
            assert_eq!(class.encode(decoded), code, "{class:?} {cond}");
            if decoded != cond {
                assert!(
                    canonical.contains(&decoded),
                    "{class:?} folded {cond} onto non-canonical {decoded}"
                );
            }
        }
    }
}

/// Tests the opcode-to-class dispatch against known instruction variants.
#[test]
fn dispatch_matches_known_variants() {
    assert_eq!(
        ConditionClass::for_opcode(Opcode::SUBC_Urrrc),
        ConditionClass::SubNz
    );
    assert_eq!(
        ConditionClass::for_opcode(Opcode::NANDrric),
        ConditionClass::LogNz
    );
    assert_eq!(
        ConditionClass::for_opcode(Opcode::LSLXrric),
        ConditionClass::ShiftNz
    );
    assert_eq!(
        ConditionClass::for_opcode(Opcode::ADDrric),
        ConditionClass::AddNz
    );
    assert_eq!(
        ConditionClass::for_opcode(Opcode::ACQUIRE2ci),
        ConditionClass::BootNz
    );
}

/// Tests that asking for the class of a variant without a condition field
/// is treated as an internal desync and panics.
#[test]
#[should_panic(expected = "no condition class")]
fn conditionless_variant_is_fatal() {
    let _ = ConditionClass::for_opcode(Opcode::CALLri);
}
