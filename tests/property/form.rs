use formcheck::{FieldName, FormValues, validate_form};
use proptest::prelude::*;

fn field_index(field: FieldName) -> usize {
    FieldName::ALL.iter().position(|f| *f == field).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Errors come out in submit order with at most one entry per field.
    #[test]
    fn errors_are_reported_in_submit_order(
        email in ".{0,12}",
        password in ".{0,12}",
        password_repeat in ".{0,12}",
        username in ".{0,12}",
    ) {
        let result = validate_form(&FormValues {
            email,
            password,
            password_repeat,
            username,
        });

        let indices: Vec<usize> = result.errors.iter().map(|e| field_index(e.field)).collect();
        let mut expected = indices.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(indices, expected);
    }

    // is_valid is exactly "no errors collected".
    #[test]
    fn validity_mirrors_the_error_list(
        email in ".{0,12}",
        password in ".{0,12}",
        password_repeat in ".{0,12}",
        username in ".{0,12}",
    ) {
        let result = validate_form(&FormValues {
            email,
            password,
            password_repeat,
            username,
        });
        prop_assert_eq!(result.is_valid(), result.errors.is_empty());
    }
}
