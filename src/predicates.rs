//! Boolean predicate helpers behind the per-field rules.
//!
//! Each predicate tests one structural property of a value and nothing else.
//! Blankness and rule precedence are handled by [`crate::validate`].

use regex::Regex;
use std::sync::LazyLock;

/// Special characters accepted toward password complexity.
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

// ─── Cached regexes ─────────────────────────────────────────────────────────

// Matches any value, so the email rule only rejects blank input.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*").unwrap());

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").unwrap());

// ─── Predicates ─────────────────────────────────────────────────────────────

/// True when `value` passes the email format check.
///
/// The current pattern is a placeholder that accepts every value; presence is
/// the only property the email field enforces.
pub fn is_email_valid(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// True when `value` meets all five complexity requirements: at least 8
/// characters, one lowercase letter, one uppercase letter, one digit, and one
/// character from [`PASSWORD_SYMBOLS`]. The conditions are a conjunction;
/// character order does not matter.
pub fn is_password_complex(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// True when every character of `value` is an ASCII letter or digit.
/// Vacuously true for the empty string.
pub fn is_username_alpha_numeric(value: &str) -> bool {
    USERNAME_RE.is_match(value)
}
