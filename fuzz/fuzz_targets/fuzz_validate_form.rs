#![no_main]

use formcheck::{FormValues, validate_form};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|fields: (String, String, String, String)| {
    let (email, password, password_repeat, username) = fields;
    let result = validate_form(&FormValues {
        email,
        password,
        password_repeat,
        username,
    });
    // At most one error per field.
    assert!(result.errors.len() <= 4);
});
