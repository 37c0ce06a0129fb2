//! Property-based tests for the field validator.

use proptest::prelude::*;

use crate::core::validator::{validate, Candidate, Field, ValidationError};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Names inside the accepted 2..=100 character range (no leading/trailing
/// whitespace so the trimmed value equals the input).
fn arb_valid_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z '-]{0,98}[a-zA-Z]"
}

/// Well-formed emails comfortably under the 255-char limit.
fn arb_valid_email() -> impl Strategy<Value = String> {
    "[a-z0-9._+-]{1,20}@[a-z0-9-]{1,20}\\.[a-z]{2,6}"
}

/// Whitespace padding around a value.
fn arb_padding() -> impl Strategy<Value = String> {
    " {0,5}"
}

proptest! {
    #[test]
    fn accepts_all_valid_pairs(name in arb_valid_name(), email in arb_valid_email()) {
        let record = validate(&Candidate::new(name.clone(), email.clone())).unwrap();
        prop_assert_eq!(record.name(), name.as_str());
        prop_assert_eq!(record.email(), email.as_str());
    }

    #[test]
    fn trims_but_never_rewrites(
        name in arb_valid_name(),
        email in arb_valid_email(),
        pad_a in arb_padding(),
        pad_b in arb_padding(),
    ) {
        let candidate = Candidate::new(
            format!("{pad_a}{name}{pad_b}"),
            format!("{pad_b}{email}{pad_a}"),
        );
        let record = validate(&candidate).unwrap();
        prop_assert_eq!(record.name(), name.as_str());
        prop_assert_eq!(record.email(), email.as_str());
    }

    #[test]
    fn short_names_rejected_with_too_short(name in " {0,3}[a-z]? {0,3}", email in arb_valid_email()) {
        let errors = validate(&Candidate::new(name, email)).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors.get(Field::Name),
            Some(&ValidationError::TooShort { min: 2 })
        );
    }

    #[test]
    fn overlong_names_rejected_with_too_long(len in 101usize..300, email in arb_valid_email()) {
        let errors = validate(&Candidate::new("x".repeat(len), email)).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors.get(Field::Name),
            Some(&ValidationError::TooLong { max: 100 })
        );
    }

    #[test]
    fn dotless_or_spaced_emails_rejected(name in arb_valid_name(), email in "[a-z]{1,10}(@[a-z]{1,10})?") {
        // No dot in the domain (or no domain at all)
        let errors = validate(&Candidate::new(name, email)).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.get(Field::Email), Some(&ValidationError::InvalidFormat));
    }

    #[test]
    fn validation_is_deterministic(name in ".{0,40}", email in ".{0,40}") {
        let candidate = Candidate::new(name, email);
        prop_assert_eq!(validate(&candidate), validate(&candidate));
    }

    #[test]
    fn accepted_records_satisfy_their_own_rules(name in arb_valid_name(), email in arb_valid_email()) {
        // Re-validating an accepted record is a fixed point
        let record = validate(&Candidate::new(name, email)).unwrap();
        let again = validate(&Candidate::new(record.name(), record.email())).unwrap();
        prop_assert_eq!(record, again);
    }
}
