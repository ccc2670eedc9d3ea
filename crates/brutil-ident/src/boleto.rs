//! # Boleto Bancário (digitable line)
//!
//! The 47-digit "linha digitável" printed on bank payment slips. It is a
//! rearrangement of the 44-digit barcode with three extra mod 10 digits:
//!
//! ```text
//! line:    AAABC CCCCX DDDDD DDDDDY EEEEE EEEEEZ K UUUUVVVVVVVVVV
//!          0   4    9  10       20  21      31  32 33          46
//! barcode: AAAB K UUUU VVVVVVVVVV CCCCC DDDDDDDDDD EEEEEEEEEE
//! ```
//!
//! `X`, `Y`, `Z` are FEBRABAN mod 10 digits over the three partial fields;
//! `K` is the FEBRABAN mod 11 digit over the other 43 barcode digits.
//! `AAA` is the bank, `B` the currency, `UUUU` the due-date factor and `V`
//! the amount in cents.

use std::fmt;

use serde::Serialize;

use brutil_core::checksum::{febraban_mod11, mod10};
use brutil_core::{only_digits, IdentifierKind, PositionalFormat, RawInput, ValidationError};

use crate::{reject, require, require_length};

/// Canonical digit count of the digitable line.
pub const LENGTH: usize = 47;

/// Digit count of the barcode.
pub const BARCODE_LENGTH: usize = 44;

/// Display form `00000.00000 00000.000000 00000.000000 0 00000000000000`.
pub const FORMAT: PositionalFormat = PositionalFormat::new(
    LENGTH,
    &[(4, "."), (9, " "), (14, "."), (20, " "), (25, "."), (31, " "), (32, " ")],
);

/// Partial fields as `(start, end)` line ranges; the mod 10 digit sits at `end`.
const PARTIAL_FIELDS: [(usize, usize); 3] = [(0, 9), (10, 20), (21, 31)];

/// Line ranges that, concatenated, form the barcode.
const BARCODE_LAYOUT: [(usize, usize); 6] = [(0, 4), (32, 33), (33, 47), (4, 9), (10, 20), (21, 31)];

/// Position of the general check digit in the barcode.
const BARCODE_CHECK_POSITION: usize = 4;

const KIND: IdentifierKind = IdentifierKind::Boleto;

/// `true` if `value` is a valid digitable line.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 47 digits.
///
/// # Errors
///
/// Empty input, a digit count other than 47, or a mismatch in any of the
/// four check digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let digits = require_length(only_digits(raw), KIND, LENGTH, "47 digits")?;

    let fields_ok = PARTIAL_FIELDS
        .iter()
        .all(|&(start, end)| digit_at(&digits, end) == mod10(&digits[start..end]));
    if !fields_ok || !barcode_check_digit_matches(&to_barcode(&digits)) {
        return reject(ValidationError::Checksum {
            kind: KIND,
            value: digits,
        });
    }
    Ok(digits)
}

/// Rearrange a canonical 47-digit line into the 44-digit barcode.
///
/// The input must already be 47 ASCII digits.
pub fn to_barcode(line: &str) -> String {
    BARCODE_LAYOUT
        .iter()
        .map(|&(start, end)| &line[start..end])
        .collect()
}

fn barcode_check_digit_matches(barcode: &str) -> bool {
    let body = format!(
        "{}{}",
        &barcode[..BARCODE_CHECK_POSITION],
        &barcode[BARCODE_CHECK_POSITION + 1..]
    );
    digit_at(barcode, BARCODE_CHECK_POSITION) == febraban_mod11(&body)
}

fn digit_at(digits: &str, index: usize) -> u32 {
    u32::from(digits.as_bytes()[index] - b'0')
}

/// Render `value` in the grouped display form.
pub fn format(value: &str) -> String {
    FORMAT.render(value, false)
}

/// A validated digitable line, stored as 47 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Boleto(String);

impl_validating_deserialize!(Boleto);

impl Boleto {
    /// Parse and validate a digitable line.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 47 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 3-digit FEBRABAN bank code.
    pub fn bank_code(&self) -> &str {
        &self.0[..3]
    }

    /// The currency code (`9` for the Real).
    pub fn currency_code(&self) -> char {
        char::from(self.0.as_bytes()[3])
    }

    /// Days since the FEBRABAN base date; `0` when the slip has no due date.
    pub fn due_factor(&self) -> u16 {
        self.0[33..37].parse().unwrap_or_default()
    }

    /// Amount in cents; `0` when the payer fills in the amount.
    pub fn amount_cents(&self) -> u64 {
        self.0[37..47].parse().unwrap_or_default()
    }

    /// The 44-digit barcode.
    pub fn to_barcode(&self) -> String {
        to_barcode(&self.0)
    }

    /// The grouped display form.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }
}

impl fmt::Display for Boleto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANCO_DO_BRASIL: &str = "00190000090114971860168524522114675860000102656";
    const SYNTHETIC: &str = "00190000090000012345567000000009312340000001000";
    const BRADESCO: &str = "23793380296000000001223456789009395740000010000";

    #[test]
    fn accepts_known_lines() {
        assert!(is_valid(BANCO_DO_BRASIL));
        assert!(is_valid(SYNTHETIC));
        assert!(is_valid(BRADESCO));
        assert!(is_valid("00190.00009 00000.123455 67000.000009 3 12340000001000"));
    }

    #[test]
    fn rejects_wrong_length_and_empty() {
        assert!(matches!(
            validate(&BANCO_DO_BRASIL[..46]),
            Err(ValidationError::Length { actual: 46, .. })
        ));
        assert!(!is_valid(""));
        assert!(!is_valid(None::<&str>));
    }

    #[test]
    fn partial_field_digit_is_checked() {
        // last digit of the first field, position 9
        let mut line = BANCO_DO_BRASIL.to_string();
        line.replace_range(9..10, "1");
        assert!(matches!(validate(line.as_str()), Err(ValidationError::Checksum { .. })));
    }

    #[test]
    fn general_digit_is_checked() {
        let line = format!("{}5{}", &BANCO_DO_BRASIL[..32], &BANCO_DO_BRASIL[33..]);
        assert!(!is_valid(line.as_str()));
    }

    #[test]
    fn barcode_layout() {
        assert_eq!(
            to_barcode(BANCO_DO_BRASIL),
            "00196758600001026560000001149718606852452211"
        );
        assert_eq!(to_barcode(BANCO_DO_BRASIL).len(), BARCODE_LENGTH);
    }

    #[test]
    fn formats_in_groups() {
        assert_eq!(format(SYNTHETIC), "00190.00009 00000.123455 67000.000009 3 12340000001000");
        assert_eq!(format(BRADESCO), "23793.38029 60000.000012 23456.789009 3 95740000010000");
        assert_eq!(format("00190"), "00190");
        assert_eq!(format("001900"), "00190.0");
    }

    #[test]
    fn newtype_fields() {
        let boleto = Boleto::new(BANCO_DO_BRASIL).unwrap();
        assert_eq!(boleto.bank_code(), "001");
        assert_eq!(boleto.currency_code(), '9');
        assert_eq!(boleto.due_factor(), 7586);
        assert_eq!(boleto.amount_cents(), 102656);
        assert_eq!(boleto.to_barcode().len(), BARCODE_LENGTH);

        let bradesco = Boleto::new(BRADESCO).unwrap();
        assert_eq!(bradesco.bank_code(), "237");
        assert_eq!(bradesco.amount_cents(), 10000);
    }

    #[test]
    fn newtype_serde_roundtrip() {
        let boleto = Boleto::new(SYNTHETIC).unwrap();
        let json = serde_json::to_string(&boleto).unwrap();
        assert_eq!(serde_json::from_str::<Boleto>(&json).unwrap(), boleto);
        assert_eq!(boleto.to_string(), format(SYNTHETIC));
    }
}
