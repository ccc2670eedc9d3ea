//! # PIS / PASEP / NIT
//!
//! Social-integration number: ten base digits and one check digit. The
//! check digit is `11 - (weighted sum mod 11)`, with both 10 and 11 mapped
//! to 0.

use std::fmt;

use serde::Serialize;

use brutil_core::checksum::{weighted_sum, PIS_WEIGHTS};
use brutil_core::{
    is_repeated_sequence, only_digits, IdentifierKind, PositionalFormat, RawInput,
    ValidationError,
};

use crate::{reject, require, require_length};

/// Canonical digit count.
pub const LENGTH: usize = 11;

/// Display form `000.00000.00-0`.
pub const FORMAT: PositionalFormat = PositionalFormat::new(LENGTH, &[(2, "."), (7, "."), (9, "-")]);

const KIND: IdentifierKind = IdentifierKind::Pis;

/// `true` if `value` is a valid PIS.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 11 digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let digits = require_length(only_digits(raw), KIND, LENGTH, "11 digits")?;
    if is_repeated_sequence(&digits) {
        return reject(ValidationError::Reserved {
            kind: KIND,
            value: digits,
        });
    }
    if digits.as_bytes()[10] - b'0' != check_digit(&digits[..10]) as u8 {
        return reject(ValidationError::Checksum {
            kind: KIND,
            value: digits,
        });
    }
    Ok(digits)
}

/// The check digit for a 10-digit base.
pub fn check_digit(base: &str) -> u32 {
    match 11 - weighted_sum(base, &PIS_WEIGHTS) % 11 {
        10 | 11 => 0,
        dv => dv,
    }
}

/// Render `value` as `000.00000.00-0`.
pub fn format(value: &str) -> String {
    FORMAT.render(value, false)
}

/// A validated PIS, stored as 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pis(String);

impl_validating_deserialize!(Pis);

impl Pis {
    /// Parse and validate a PIS.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 11 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `000.00000.00-0`.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }
}

impl fmt::Display for Pis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brutil_core::checksum::digit_char;
    use proptest::prelude::*;

    #[test]
    fn accepts_known_numbers() {
        for pis in ["12045455132", "12034567899", "10112345678", "120.45455.13-2"] {
            assert!(is_valid(pis), "{pis} should be valid");
        }
    }

    #[test]
    fn both_overflow_results_map_to_zero() {
        // weighted sum ≡ 1 (mod 11) gives 10; ≡ 0 gives 11
        assert_eq!(weighted_sum("1000000013", &PIS_WEIGHTS) % 11, 1);
        assert_eq!(check_digit("1000000013"), 0);
        assert!(is_valid("10000000130"));

        assert_eq!(weighted_sum("1000000004", &PIS_WEIGHTS) % 11, 0);
        assert_eq!(check_digit("1000000004"), 0);
        assert!(is_valid("10000000040"));
        assert!(is_valid("12345678900"));
    }

    #[test]
    fn rejects_reserved_and_bad_digits() {
        assert!(!is_valid("00000000000"));
        assert!(!is_valid("11111111111"));
        assert!(matches!(
            validate("12045455131"),
            Err(ValidationError::Checksum { .. })
        ));
        assert!(matches!(
            validate("1204545513"),
            Err(ValidationError::Length { actual: 10, .. })
        ));
        assert!(!is_valid(None::<&str>));
    }

    #[test]
    fn formats_to_display_form() {
        assert_eq!(format("12045455132"), "120.45455.13-2");
        assert_eq!(format("120454"), "120.454");
    }

    #[test]
    fn newtype_roundtrip() {
        let pis = Pis::new("120.45455.13-2").unwrap();
        assert_eq!(pis.as_str(), "12045455132");
        assert_eq!(pis.to_string(), "120.45455.13-2");
        let back: Pis = serde_json::from_str(&serde_json::to_string(&pis).unwrap()).unwrap();
        assert_eq!(back, pis);
    }

    proptest! {
        /// A computed check digit always validates, formatted or not.
        #[test]
        fn computed_check_digit_validates(base in "[0-9]{10}") {
            prop_assume!(!is_repeated_sequence(&base));
            let pis = format!("{base}{}", digit_char(check_digit(&base)));
            prop_assume!(!is_repeated_sequence(&pis));
            prop_assert!(is_valid(pis.as_str()));
            prop_assert!(is_valid(super::format(&pis)));
        }
    }
}
