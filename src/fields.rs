//! Closed enumeration of the form's input fields.
//!
//! Only the four account-creation fields exist. Wire names follow the form's
//! camelCase element ids (`email`, `password`, `passwordRepeat`, `username`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four named user-input slots on the account-creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Email,
    Password,
    PasswordRepeat,
    Username,
}

impl FieldName {
    /// All fields in submit order. `Password` precedes `PasswordRepeat` so
    /// the repeat check always compares against the freshly validated
    /// password.
    pub const ALL: [FieldName; 4] = [
        FieldName::Email,
        FieldName::Password,
        FieldName::PasswordRepeat,
        FieldName::Username,
    ];

    /// The field's element id on the form.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::PasswordRepeat => "passwordRepeat",
            FieldName::Username => "username",
        }
    }

    /// Id of the field's error-display slot: the element id plus `Help`.
    pub fn help_slot(self) -> String {
        format!("{}Help", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
