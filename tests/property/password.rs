use formcheck::validate::{validate_password, validate_password_repeat};
use proptest::prelude::*;

const COMPLEXITY_PREFIX: &str = "The password is not complex enough.";

/// Passwords drawing from all four required character classes, length >= 8.
fn meets_all_requirements() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,4}",
        "[A-Z]{1,4}",
        "[0-9]{1,4}",
        "[@$!%*#?&]{1,4}",
        "[a-zA-Z0-9@$!%*#?&]{4,12}",
    )
        .prop_map(|(lower, upper, digit, symbol, tail)| {
            format!("{lower}{upper}{digit}{symbol}{tail}")
        })
}

fn is_complexity_rejection(password: &str) -> bool {
    validate_password(password)
        .message()
        .is_some_and(|m| m.starts_with(COMPLEXITY_PREFIX))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn all_requirements_met_is_valid(password in meets_all_requirements()) {
        prop_assert!(validate_password(&password).is_valid());
    }

    #[test]
    fn missing_lowercase_is_rejected(password in "[A-Z0-9@$!%*#?&]{8,24}") {
        prop_assert!(is_complexity_rejection(&password));
    }

    #[test]
    fn missing_uppercase_is_rejected(password in "[a-z0-9@$!%*#?&]{8,24}") {
        prop_assert!(is_complexity_rejection(&password));
    }

    #[test]
    fn missing_digit_is_rejected(password in "[a-zA-Z@$!%*#?&]{8,24}") {
        prop_assert!(is_complexity_rejection(&password));
    }

    #[test]
    fn missing_symbol_is_rejected(password in "[a-zA-Z0-9]{8,24}") {
        prop_assert!(is_complexity_rejection(&password));
    }

    #[test]
    fn shorter_than_eight_is_rejected(password in "[a-zA-Z0-9@$!%*#?&]{1,7}") {
        prop_assert!(is_complexity_rejection(&password));
    }

    #[test]
    fn repeat_is_valid_iff_values_are_equal(
        value in "[ -~]{1,16}",
        password in "[ -~]{1,16}",
    ) {
        let outcome = validate_password_repeat(&value, &password);
        prop_assert_eq!(outcome.is_valid(), value == password);
    }

    #[test]
    fn idempotent(password in ".{0,24}") {
        prop_assert_eq!(validate_password(&password), validate_password(&password));
    }
}
