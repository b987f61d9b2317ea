//! Whole-form validation and the rendering seam.
//!
//! The types here are the boundary a UI-owning collaborator programs
//! against: it feeds current field values in and renders the outcomes it
//! gets back. No rendering happens in this crate.

use crate::fields::FieldName;
use crate::outcome::{FormValidationResult, ValidationOutcome};
use crate::session::ValidationSession;
use serde::{Deserialize, Serialize};

/// Current values of the four form fields. `Default` is an untouched form,
/// every field blank.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub password_repeat: String,
    pub username: String,
}

impl FormValues {
    /// The current value of `field`.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PasswordRepeat => &self.password_repeat,
            FieldName::Username => &self.username,
        }
    }
}

/// Validate all four fields in submit order, collecting every failure.
///
/// Runs on a fresh session, so the repeat field is compared against this
/// form's own password (and only when that password itself passed); the
/// result never depends on validation history.
pub fn validate_form(values: &FormValues) -> FormValidationResult {
    ValidationSession::new().validate_all(values)
}

// ─── Rendering seam ─────────────────────────────────────────────────────────

/// Extension point for surfacing outcomes on a UI.
///
/// On `display_error`, implementations write `message` into the field's
/// error slot (see [`FieldName::help_slot`]) and mark the field visually
/// invalid. On `clear_error`, they remove both.
pub trait OutcomeRenderer {
    fn display_error(&mut self, field: FieldName, message: &str);
    fn clear_error(&mut self, field: FieldName);
}

/// Drives validation from UI triggers and feeds every outcome to a renderer.
///
/// The trigger contract: call [`field_changed`](Self::field_changed) whenever
/// a field's value changes, and [`submit`](Self::submit) when the
/// create-account control fires.
pub struct FormController<R> {
    session: ValidationSession,
    renderer: R,
}

impl<R: OutcomeRenderer> FormController<R> {
    pub fn new(renderer: R) -> Self {
        FormController {
            session: ValidationSession::new(),
            renderer,
        }
    }

    /// Validate one field and render its outcome.
    pub fn field_changed(&mut self, field: FieldName, value: &str) -> ValidationOutcome {
        let outcome = self.session.validate(field, value);
        self.render(field, &outcome);
        outcome
    }

    /// Missing-value adapter for [`field_changed`](Self::field_changed).
    pub fn field_changed_opt(
        &mut self,
        field: FieldName,
        value: Option<&str>,
    ) -> ValidationOutcome {
        self.field_changed(field, value.unwrap_or_default())
    }

    /// Validate every field and render all four outcomes. Returns `true` when
    /// the whole form passed.
    pub fn submit(&mut self, values: &FormValues) -> bool {
        let mut ok = true;
        for field in FieldName::ALL {
            let outcome = self.session.validate(field, values.get(field));
            ok &= outcome.is_valid();
            self.render(field, &outcome);
        }
        ok
    }

    fn render(&mut self, field: FieldName, outcome: &ValidationOutcome) {
        match outcome.message() {
            Some(message) => self.renderer.display_error(field, message),
            None => self.renderer.clear_error(field),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
