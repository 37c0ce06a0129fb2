//! The two-step wizard state machine.
//!
//! ```text
//! Details --submit_details(valid)--> Summary
//! Summary --go_back()--> Details            (record kept)
//! Summary --confirm()--> Details            (payload emitted, record cleared)
//! ```
//!
//! The machine is cyclic: Details is both the initial and the
//! post-completion step, so one session supports repeated registrations.
//! The [`Wizard`] owns the state; `submit_details`, `go_back` and `confirm`
//! are the only mutation points.

use thiserror::Error;

use super::validator::{self, Candidate, FieldErrors, Record};

/// The wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Details,
    Summary,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::Details => "Details",
            Step::Summary => "Summary",
        }
    }
}

/// Payload handed to the completion sink, exactly once per successful
/// `confirm()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    pub name: String,
    pub email: String,
}

/// Errors from the wizard's mutation points.
///
/// `Validation` is correctable user input; the other two are caller misuse
/// (wrong-step calls) and leave the state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{action} is not valid from the {} step", from.label())]
    InvalidTransition { from: Step, action: &'static str },

    #[error("cannot confirm: {0}")]
    InvalidState(&'static str),
}

/// A read-only view of the wizard state, passed to observers after each
/// successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub step: Step,
    pub pending: Option<Record>,
}

type Observer = Box<dyn FnMut(&StateSnapshot)>;

/// Owns the wizard state and mediates every transition.
pub struct Wizard {
    step: Step,
    pending: Option<Record>,
    observers: Vec<Observer>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Details,
            pending: None,
            observers: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The record accepted on Details, if any. Present on Summary, and
    /// retained on Details after `go_back()` so the form can pre-fill.
    pub fn pending_record(&self) -> Option<&Record> {
        self.pending.as_ref()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            step: self.step,
            pending: self.pending.clone(),
        }
    }

    /// Register a state-change observer. Observers are invoked with the new
    /// snapshot after every successful mutation; failed calls notify nobody.
    pub fn subscribe(&mut self, observer: impl FnMut(&StateSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validate the candidate and advance Details -> Summary.
    ///
    /// On validation failure the state is unchanged and the per-field
    /// errors are returned for display.
    pub fn submit_details(&mut self, candidate: &Candidate) -> Result<(), WizardError> {
        if self.step != Step::Details {
            log::error!("submit_details called from {} step", self.step.label());
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "submit_details",
            });
        }

        let record = validator::validate(candidate).map_err(WizardError::Validation)?;
        log::info!("details accepted for {}", record.email());
        self.pending = Some(record);
        self.step = Step::Summary;
        self.notify();
        Ok(())
    }

    /// Return Summary -> Details, keeping the pending record.
    pub fn go_back(&mut self) -> Result<(), WizardError> {
        if self.step != Step::Summary {
            log::error!("go_back called from {} step", self.step.label());
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "go_back",
            });
        }

        self.step = Step::Details;
        self.notify();
        Ok(())
    }

    /// Complete the registration: emit the payload and reset to Details
    /// with no pending record.
    pub fn confirm(&mut self) -> Result<CompletionPayload, WizardError> {
        if self.step != Step::Summary {
            log::error!("confirm called from {} step", self.step.label());
            return Err(WizardError::InvalidTransition {
                from: self.step,
                action: "confirm",
            });
        }

        let record = self.pending.take().ok_or_else(|| {
            log::error!("confirm called with no pending record");
            WizardError::InvalidState("no pending record")
        })?;

        let (name, email) = record.into_parts();
        log::info!("registration completed for {email}");
        self.step = Step::Details;
        self.notify();
        Ok(CompletionPayload { name, email })
    }

    fn notify(&mut self) {
        let snapshot = StateSnapshot {
            step: self.step,
            pending: self.pending.clone(),
        };
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
