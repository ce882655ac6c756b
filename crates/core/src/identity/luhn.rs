//! Luhn check digits for transcription-error detection.

/// Computes the Luhn check digit for a string of ASCII digits.
///
/// Standard algorithm: walking right-to-left, digits at odd positions are
/// summed as-is and digits at even positions are doubled with their own
/// digits summed; the check digit is `(10 - total % 10) % 10`.
///
/// Returns `None` if `digits` is empty or contains a non-digit.
#[must_use]
pub fn luhn_check_digit(digits: &str) -> Option<u8> {
    if digits.is_empty() {
        return None;
    }

    let mut checksum: u32 = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let d = c.to_digit(10)?;
        if i % 2 == 0 {
            checksum += d;
        } else {
            let doubled = d * 2;
            checksum += doubled / 10 + doubled % 10;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    Some(((10 - checksum % 10) % 10) as u8)
}

/// Appends the Luhn check digit to a string of ASCII digits.
#[must_use]
pub fn append_check_digit(digits: &str) -> Option<String> {
    let check = luhn_check_digit(digits)?;
    Some(format!("{digits}{check}"))
}

/// Verifies a Luhn-terminated code: the last character must be the check
/// digit of everything before it.
#[must_use]
pub fn verify(code: &str) -> bool {
    if !code.is_ascii() {
        return false;
    }
    let Some(last) = code.chars().last().and_then(|c| c.to_digit(10)) else {
        return false;
    };
    let base = &code[..code.len() - 1];
    luhn_check_digit(base).is_some_and(|check| u32::from(check) == last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_check_digits() {
        // 7992739871 is the classic worked example; its check digit is 3.
        assert_eq!(luhn_check_digit("7992739871"), Some(3));
        assert_eq!(luhn_check_digit("0"), Some(0));
        assert_eq!(luhn_check_digit("5"), Some(5));
    }

    #[test]
    fn test_append_and_verify() {
        let code = append_check_digit("7992739871").unwrap();
        assert_eq!(code, "79927398713");
        assert!(verify(&code));
    }

    #[test]
    fn test_verify_rejects_wrong_digit() {
        assert!(!verify("79927398714"));
        assert!(!verify("79927398712"));
    }

    #[test]
    fn test_non_digits_are_rejected() {
        assert_eq!(luhn_check_digit("79a27"), None);
        assert_eq!(luhn_check_digit(""), None);
        assert!(!verify("79a273"));
        assert!(!verify(""));
    }
}
