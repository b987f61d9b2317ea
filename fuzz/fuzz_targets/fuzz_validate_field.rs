#![no_main]

use formcheck::{FieldName, ValidationSession};
use libfuzzer_sys::fuzz_target;

// Every field rule is total: arbitrary input must never panic, whatever the
// session state.
fuzz_target!(|data: &[u8]| {
    let value = String::from_utf8_lossy(data);
    let mut session = ValidationSession::new();
    for field in FieldName::ALL {
        let _ = session.validate(field, &value);
    }
    // Same inputs again, now with whatever password the first pass remembered.
    for field in FieldName::ALL {
        let _ = session.validate(field, &value);
    }
});
