//! Property-based tests for the Luhn check digit.

use proptest::prelude::*;

use super::luhn::{append_check_digit, luhn_check_digit, verify};

/// Strategy for non-empty digit strings up to 18 characters.
fn digit_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 1..18)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Appending the computed check digit always yields a verifying code.
    #[test]
    fn prop_append_then_verify(base in digit_string()) {
        let code = append_check_digit(&base).expect("digit strings always have a check digit");
        prop_assert!(verify(&code));
    }

    /// Altering any single digit of a checked code breaks verification -
    /// the single-digit transcription-error guarantee.
    #[test]
    fn prop_single_digit_mutation_is_detected(
        base in digit_string(),
        position in any::<prop::sample::Index>(),
        bump in 1u8..10,
    ) {
        let code = append_check_digit(&base).expect("digit strings always have a check digit");
        let mut digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
        let ix = position.index(digits.len());
        digits[ix] = (digits[ix] + bump) % 10;
        let mutated: String = digits.into_iter().map(|d| char::from(b'0' + d)).collect();

        prop_assert_ne!(&mutated, &code);
        prop_assert!(!verify(&mutated), "mutation at {} went undetected: {}", ix, mutated);
    }

    /// The check digit is always a single decimal digit.
    #[test]
    fn prop_check_digit_is_decimal(base in digit_string()) {
        let check = luhn_check_digit(&base).expect("digit strings always have a check digit");
        prop_assert!(check < 10);
    }
}
