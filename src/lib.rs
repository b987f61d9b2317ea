//! Field validation for an account-creation form.
//!
//! Four fields (`email`, `password`, `passwordRepeat`, `username`) each get a
//! precedence-ordered rule set; the first failing check wins and supplies the
//! human-readable message a UI shows next to the field. Everything is
//! synchronous and pure: validating a value never performs I/O and never
//! fails, it only reports `Valid` or `Invalid`.
//!
//! ```text
//! field change → ValidationSession::validate(field, value) → ValidationOutcome
//! submit       → validate_form(&FormValues)                → FormValidationResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use formcheck::{FormValues, validate_form};
//!
//! let values = FormValues {
//!     email: "patricia@gmail.com".into(),
//!     password: "Abcdef1!".into(),
//!     password_repeat: "Abcdef1!".into(),
//!     username: "patricia".into(),
//! };
//! assert!(validate_form(&values).is_valid());
//!
//! let result = validate_form(&FormValues::default());
//! for err in &result.errors {
//!     println!("{} -> {}", err.field.help_slot(), err.message);
//! }
//! ```
//!
//! A UI collaborator that owns the field values implements
//! [`OutcomeRenderer`] and drives a [`FormController`]: one
//! [`field_changed`](FormController::field_changed) call per edit, one
//! [`submit`](FormController::submit) call when the create-account control
//! fires.

pub mod fields;
pub mod form;
pub mod outcome;
pub mod predicates;
pub mod session;
pub mod validate;

pub use fields::FieldName;
pub use outcome::{FieldError, FormValidationResult, ValidationOutcome};

// Re-export the entry points and the collaborator surface at the crate root
// for convenience.
pub use form::{FormController, FormValues, OutcomeRenderer, validate_form};
pub use session::ValidationSession;
pub use validate::{
    validate_email, validate_password, validate_password_repeat, validate_username,
};
