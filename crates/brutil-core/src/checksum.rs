//! # Check-Digit Arithmetic
//!
//! The modulus algorithms behind every Brazilian identifier in the workspace.
//! All functions take a string of ASCII digits and silently skip any other
//! character, so callers are expected to canonicalize first.
//!
//! | Algorithm | Used by | Function |
//! |---|---|---|
//! | Weighted mod 11, `r < 2 → 0` | CPF, CNPJ | [`mod11`] |
//! | Weighted mod 11, raw remainder | PIS | [`weighted_sum`] |
//! | FEBRABAN mod 10 | boleto partial fields | [`mod10`] |
//! | FEBRABAN mod 11, `{0,10,11} → 1` | boleto barcode | [`febraban_mod11`] |
//! | ISO 7064 mod 97-10 | CNJ judicial process | [`mod97`], [`mod97_check_digits`] |

/// CPF first check-digit weights (10 down to 2).
pub const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF second check-digit weights (11 down to 2).
pub const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ first check-digit weights.
pub const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ second check-digit weights (the first table shifted by one).
pub const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// PIS/PASEP/NIT check-digit weights.
pub const PIS_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Sum of each digit multiplied by the weight at the same position.
///
/// Digits and weights are aligned left to right; extra digits or extra
/// weights are ignored.
pub fn weighted_sum(digits: &str, weights: &[u32]) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .zip(weights)
        .map(|(d, w)| d * w)
        .sum()
}

/// Weighted mod 11 check digit: a remainder below 2 maps to 0, anything
/// else to `11 - remainder`.
pub fn mod11(digits: &str, weights: &[u32]) -> u32 {
    let remainder = weighted_sum(digits, weights) % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// FEBRABAN mod 10 check digit for a boleto partial field.
///
/// Right to left, digits are alternately multiplied by 2 and 1; a product
/// above 9 folds to `1 + product % 10` (the sum of its two digits).
pub fn mod10(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            let product = if i % 2 == 0 { d * 2 } else { d };
            if product > 9 {
                1 + product % 10
            } else {
                product
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

/// FEBRABAN mod 11 general check digit for a 43-digit barcode body.
///
/// Weights cycle 2..=9 from the rightmost digit. A result of 0, 10 or 11
/// is replaced by 1.
pub fn febraban_mod11(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| d * (2 + (i as u32 % 8)))
        .sum();

    match 11 - sum % 11 {
        0 | 10 | 11 => 1,
        dv => dv,
    }
}

/// Remainder modulo 97 of the concatenation of `groups`.
///
/// Equivalent to concatenating the running remainder with each group and
/// reducing, as CNJ Resolution 65 describes. The reduction happens one digit
/// at a time so no group width can overflow.
pub fn mod97(groups: &[&str]) -> u32 {
    groups.iter().fold(0, |remainder, group| {
        group
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(remainder, |acc, d| (acc * 10 + d) % 97)
    })
}

/// ISO 7064 mod 97-10 verifier for `body`: `98 - (body ‖ "00") mod 97`.
///
/// The result is always in `2..=98`.
pub fn mod97_check_digits(body: &[&str]) -> u32 {
    let mut groups = body.to_vec();
    groups.push("00");
    98 - mod97(&groups)
}

/// Digit character for a value in `0..=9`.
pub fn digit_char(value: u32) -> char {
    char::from_digit(value % 10, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cpf_check_digits() {
        assert_eq!(mod11("111444777", &CPF_WEIGHTS_FIRST), 3);
        assert_eq!(mod11("1114447773", &CPF_WEIGHTS_SECOND), 5);
    }

    #[test]
    fn cnpj_check_digits() {
        assert_eq!(mod11("112223330001", &CNPJ_WEIGHTS_FIRST), 8);
        assert_eq!(mod11("1122233300018", &CNPJ_WEIGHTS_SECOND), 1);
    }

    #[test]
    fn mod11_low_remainder_maps_to_zero() {
        assert_eq!(mod11("000000000", &CPF_WEIGHTS_FIRST), 0);
        // remainder 1
        assert_eq!(mod11("1", &[1]), 0);
        // remainder 2
        assert_eq!(mod11("1", &[2]), 9);
    }

    #[test]
    fn pis_weighted_sum() {
        assert_eq!(weighted_sum("1204545513", &PIS_WEIGHTS) % 11, 9);
    }

    #[test]
    fn mod10_known_boleto_fields() {
        // Partial fields of 00190.00009 01149.718601 68524.522114 6 75860000102656
        assert_eq!(mod10("001900000"), 9);
        assert_eq!(mod10("0114971860"), 1);
        assert_eq!(mod10("6852452211"), 4);
    }

    #[test]
    fn mod10_zero_sum_is_zero() {
        assert_eq!(mod10("0000000000"), 0);
    }

    #[test]
    fn febraban_mod11_known_barcode() {
        // Barcode of the line above without its check digit (position 4).
        let body = "0019758600001026560000001149718606852452211";
        assert_eq!(body.len(), 43);
        assert_eq!(febraban_mod11(body), 6);
    }

    #[test]
    fn mod97_matches_cnj_example() {
        // 0000001-73.2023.8.26.0100
        assert_eq!(mod97_check_digits(&["0000001", "2023826", "0100"]), 73);
        assert_eq!(mod97(&["0000001", "2023826", "0100", "73"]), 1);
    }

    #[test]
    fn digit_char_maps_values() {
        assert_eq!(digit_char(0), '0');
        assert_eq!(digit_char(9), '9');
    }

    proptest! {
        /// mod 11 digits are always single decimal digits.
        #[test]
        fn mod11_is_a_digit(digits in "[0-9]{12}") {
            prop_assert!(mod11(&digits, &CNPJ_WEIGHTS_FIRST) <= 9);
        }

        /// mod 10 never yields 10.
        #[test]
        fn mod10_is_a_digit(digits in "[0-9]{9,10}") {
            prop_assert!(mod10(&digits) <= 9);
        }

        /// FEBRABAN mod 11 never yields 0.
        #[test]
        fn febraban_mod11_is_never_zero(digits in "[0-9]{43}") {
            let dv = febraban_mod11(&digits);
            prop_assert!((1..=9).contains(&dv));
        }

        /// Inserting the mod 97 verifier makes the whole number ≡ 1 (mod 97).
        #[test]
        fn mod97_verifier_closes_to_one(body in "[0-9]{18}") {
            let dv = mod97_check_digits(&[&body]);
            let dv_text = format!("{dv:02}");
            prop_assert_eq!(mod97(&[&body, &dv_text]), 1);
        }
    }
}
