//! Validation state for one run of the account-creation form.

use crate::fields::FieldName;
use crate::form::FormValues;
use crate::outcome::{FieldError, FormValidationResult, ValidationOutcome};
use crate::validate::{
    validate_email, validate_password, validate_password_repeat, validate_username,
};

/// Dispatches per-field validation and threads the remembered password
/// between calls.
///
/// The only state is the remembered password: it starts blank and is replaced
/// each time the password field validates cleanly. The repeat field is always
/// compared against it, so validate `password` before `passwordRepeat` when
/// both changed.
#[derive(Clone, Debug, Default)]
pub struct ValidationSession {
    remembered_password: String,
}

impl ValidationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a single field's current value.
    ///
    /// A password that passes every check becomes the new comparison target
    /// for the repeat field; a failing password leaves the previous target in
    /// place.
    pub fn validate(&mut self, field: FieldName, value: &str) -> ValidationOutcome {
        match field {
            FieldName::Email => validate_email(value),
            FieldName::Password => {
                let outcome = validate_password(value);
                if outcome.is_valid() {
                    self.remembered_password = value.to_string();
                }
                outcome
            }
            FieldName::PasswordRepeat => validate_password_repeat(value, &self.remembered_password),
            FieldName::Username => validate_username(value),
        }
    }

    /// Missing-value adapter: a field with no value validates as blank.
    pub fn validate_opt(&mut self, field: FieldName, value: Option<&str>) -> ValidationOutcome {
        self.validate(field, value.unwrap_or_default())
    }

    /// Validate every field in submit order, collecting all failures.
    pub fn validate_all(&mut self, values: &FormValues) -> FormValidationResult {
        let mut errors = Vec::new();
        for field in FieldName::ALL {
            if let ValidationOutcome::Invalid(message) = self.validate(field, values.get(field)) {
                errors.push(FieldError { field, message });
            }
        }
        FormValidationResult { errors }
    }

    /// The password the repeat field is currently compared against.
    pub fn remembered_password(&self) -> &str {
        &self.remembered_password
    }
}
