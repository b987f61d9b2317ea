//! Per-field validation rules.
//!
//! Each rule function applies its checks in precedence order; the first
//! failing check wins and supplies the message. All functions here are pure.
//! The repeat check takes its comparison password as an argument instead of
//! reading shared state; [`crate::session::ValidationSession`] threads that
//! value between calls.

use crate::outcome::ValidationOutcome;
use crate::predicates::{
    PASSWORD_SYMBOLS, is_email_valid, is_password_complex, is_username_alpha_numeric,
};

/// Minimum accepted username length, in characters.
pub const USERNAME_MIN_LENGTH: usize = 4;

/// Maximum accepted username length, in characters.
pub const USERNAME_MAX_LENGTH: usize = 16;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

// ─── Email ──────────────────────────────────────────────────────────────────

/// Validate the email field.
pub fn validate_email(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        ValidationOutcome::invalid("The email cannot be blank.")
    } else if !is_email_valid(value) {
        ValidationOutcome::invalid("The email is not valid.")
    } else {
        ValidationOutcome::Valid
    }
}

// ─── Password ───────────────────────────────────────────────────────────────

/// Validate the password field against the complexity requirements.
pub fn validate_password(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        ValidationOutcome::invalid("Password cannot be blank.")
    } else if !is_password_complex(value) {
        ValidationOutcome::invalid(complexity_message())
    } else {
        ValidationOutcome::Valid
    }
}

/// The full requirement list is shown whatever subset of conditions failed.
fn complexity_message() -> String {
    format!(
        "The password is not complex enough. Passwords must have:\n \
         A length of at least {PASSWORD_MIN_LENGTH} characters\n \
         At least one uppercase character\n \
         At least one lowercase character\n \
         At least one number\n \
         At least one special character ({PASSWORD_SYMBOLS})"
    )
}

// ─── Password repeat ────────────────────────────────────────────────────────

/// Validate the repeated password against `password`, the value the field
/// must match. Callers supply the comparison target explicitly; there is no
/// remembered state at this layer.
pub fn validate_password_repeat(value: &str, password: &str) -> ValidationOutcome {
    if value.is_empty() {
        // No trailing period; consumers match the exact help-slot text.
        ValidationOutcome::invalid("Password cannot be blank")
    } else if value != password {
        ValidationOutcome::invalid("Does not match password")
    } else {
        ValidationOutcome::Valid
    }
}

// ─── Username ───────────────────────────────────────────────────────────────

/// Validate the username field: 4 to 16 characters, ASCII letters and digits
/// only.
pub fn validate_username(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::invalid("The username cannot be blank.");
    }
    let length = value.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
        ValidationOutcome::invalid(format!(
            "The username must be between {USERNAME_MIN_LENGTH} and {USERNAME_MAX_LENGTH} characters."
        ))
    } else if !is_username_alpha_numeric(value) {
        ValidationOutcome::invalid("The username must be made of only alphanumeric characters.")
    } else {
        ValidationOutcome::Valid
    }
}
