//! Property-based tests for the wizard state machine.

use proptest::prelude::*;

use crate::core::validator::Candidate;
use crate::core::wizard::{Step, Wizard, WizardError};

/// Random user-gesture sequences to drive the machine through.
#[derive(Debug, Clone)]
enum Gesture {
    SubmitValid,
    SubmitInvalid,
    Back,
    Confirm,
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        Just(Gesture::SubmitValid),
        Just(Gesture::SubmitInvalid),
        Just(Gesture::Back),
        Just(Gesture::Confirm),
    ]
}

fn apply(wizard: &mut Wizard, gesture: &Gesture) {
    match gesture {
        Gesture::SubmitValid => {
            let _ = wizard.submit_details(&Candidate::new("Alice", "alice@x.com"));
        }
        Gesture::SubmitInvalid => {
            let _ = wizard.submit_details(&Candidate::new("A", "nope"));
        }
        Gesture::Back => {
            let _ = wizard.go_back();
        }
        Gesture::Confirm => {
            let _ = wizard.confirm();
        }
    }
}

proptest! {
    /// On Summary a record is always pending; on Details a record may only
    /// remain after back-navigation, before the next confirm.
    #[test]
    fn summary_always_has_a_pending_record(gestures in prop::collection::vec(arb_gesture(), 0..40)) {
        let mut wizard = Wizard::new();
        for gesture in &gestures {
            apply(&mut wizard, gesture);
            if wizard.step() == Step::Summary {
                prop_assert!(wizard.pending_record().is_some());
            }
        }
    }

    /// confirm() either fails without mutation or lands on Details with the
    /// record cleared, regardless of how the machine got to Summary.
    #[test]
    fn confirm_always_resets(gestures in prop::collection::vec(arb_gesture(), 0..40)) {
        let mut wizard = Wizard::new();
        for gesture in &gestures {
            apply(&mut wizard, gesture);
        }

        let step_before = wizard.step();
        let pending_before = wizard.pending_record().cloned();

        match wizard.confirm() {
            Ok(payload) => {
                let record = pending_before.expect("confirm succeeded without a record");
                prop_assert_eq!(payload.name, record.name());
                prop_assert_eq!(payload.email, record.email());
                prop_assert_eq!(wizard.step(), Step::Details);
                prop_assert!(wizard.pending_record().is_none());
            }
            Err(WizardError::InvalidTransition { from, .. }) => {
                prop_assert_eq!(from, step_before);
                prop_assert_eq!(wizard.step(), step_before);
                prop_assert_eq!(wizard.pending_record().cloned(), pending_before);
            }
            Err(WizardError::InvalidState(_)) => {
                prop_assert!(pending_before.is_none());
                prop_assert_eq!(wizard.step(), step_before);
            }
            Err(WizardError::Validation(_)) => {
                prop_assert!(false, "confirm cannot fail validation");
            }
        }
    }

    /// Wrong-step calls never change observable state.
    #[test]
    fn misuse_never_mutates(gestures in prop::collection::vec(arb_gesture(), 0..40)) {
        let mut wizard = Wizard::new();
        for gesture in &gestures {
            let step = wizard.step();
            let pending = wizard.pending_record().cloned();

            let errored = match gesture {
                Gesture::Back => wizard.go_back().is_err(),
                Gesture::Confirm => wizard.confirm().is_err(),
                Gesture::SubmitValid | Gesture::SubmitInvalid => {
                    apply(&mut wizard, gesture);
                    continue;
                }
            };

            if errored {
                prop_assert_eq!(wizard.step(), step);
                prop_assert_eq!(wizard.pending_record().cloned(), pending);
            }
        }
    }
}
