//! Field validation for the registration form.
//!
//! A [`Candidate`] holds raw user text; [`validate`] checks it against the
//! field rules and either promotes it to an accepted [`Record`] (trimmed
//! values) or reports per-field errors. Both fields are evaluated
//! independently so the form can show every failing field at once.

use std::fmt;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Minimum trimmed name length.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum trimmed name length.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum trimmed email length.
pub const EMAIL_MAX_CHARS: usize = 255;

/// local-part@domain with at least one dot in the domain, no whitespace.
fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

// ============================================================================
// Error Types
// ============================================================================

/// A single field rule violation. The Display message is what the form
/// renders under the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be less than {max} characters")]
    TooLong { max: usize },

    #[error("is not a valid email address")]
    InvalidFormat,
}

/// The two form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<Field, ValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Human-readable message for a field, e.g. `"name must be at least 2 characters"`.
    pub fn message(&self, field: Field) -> Option<String> {
        self.0.get(&field).map(|e| format!("{field} {e}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field} {error}")?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Candidate & Record
// ============================================================================

/// Raw form input, possibly empty or untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub email: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// An accepted registration. Only [`validate`] constructs one, so a `Record`
/// always holds trimmed values that satisfy every field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    email: String,
}

impl Record {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.email)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a candidate against the field rules.
///
/// Pure: no side effects, identical output for identical input. Per field
/// the first failing rule wins; fields are checked independently so both
/// can appear in the error map. All-or-nothing: a `Record` is returned only
/// when every field passes.
pub fn validate(candidate: &Candidate) -> Result<Record, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = candidate.name.trim();
    let name_len = name.chars().count();
    if name_len < NAME_MIN_CHARS {
        errors.insert(Field::Name, ValidationError::TooShort { min: NAME_MIN_CHARS });
    } else if name_len > NAME_MAX_CHARS {
        errors.insert(Field::Name, ValidationError::TooLong { max: NAME_MAX_CHARS });
    }

    let email = candidate.email.trim();
    if !email_regex().is_match(email) {
        errors.insert(Field::Email, ValidationError::InvalidFormat);
    } else if email.chars().count() > EMAIL_MAX_CHARS {
        errors.insert(Field::Email, ValidationError::TooLong { max: EMAIL_MAX_CHARS });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Record {
        name: name.to_string(),
        email: email.to_string(),
    })
}
