use crate::fields::FieldName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of validating one field's value at one point in time.
///
/// `Invalid` is a normal, expected outcome carrying the message the UI shows
/// next to the field. It is not a fault; none of the validation entry points
/// can fail in the error-handling sense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The error message, when the outcome is `Invalid`.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(message) => Some(message),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ValidationOutcome::Invalid(message.into())
    }
}

/// A failed check on one named field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Result of validating a whole form: every failing field, in submit order.
#[derive(Clone, Debug, Default)]
pub struct FormValidationResult {
    pub errors: Vec<FieldError>,
}

impl FormValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message recorded for `field`, when that field failed.
    pub fn message_for(&self, field: FieldName) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
