use formcheck::validate::validate_email;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The permissive format rule: presence is the only property checked.
    #[test]
    fn any_non_empty_value_is_valid(address in ".{1,48}") {
        prop_assert!(validate_email(&address).is_valid());
    }

    #[test]
    fn idempotent(address in ".{0,48}") {
        prop_assert_eq!(validate_email(&address), validate_email(&address));
    }
}
