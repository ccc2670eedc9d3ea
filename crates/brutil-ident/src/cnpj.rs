//! # CNPJ (Cadastro Nacional da Pessoa Jurídica)
//!
//! The company registry number: an 8-digit root identifying the company, a
//! 4-digit branch number (`0001` for the headquarters), and two mod 11
//! check digits.
//!
//! Accepted raw forms are `00.000.000/0000-00` with each separator optional.

use std::fmt;

use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;

use brutil_core::checksum::{digit_char, mod11, CNPJ_WEIGHTS_FIRST, CNPJ_WEIGHTS_SECOND};
use brutil_core::{
    is_repeated_sequence, only_digits, random_digits, FormatOptions, IdentifierKind,
    PositionalFormat, RawInput, ValidationError,
};

use crate::{reject, require, require_length};

/// Canonical digit count.
pub const LENGTH: usize = 14;

/// Display form `00.000.000/0000-00`.
pub const FORMAT: PositionalFormat =
    PositionalFormat::new(LENGTH, &[(1, "."), (4, "."), (7, "/"), (11, "-")]);

/// Branch number of a company's headquarters.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// Display form with every separator optional.
pub(crate) const PATTERN: &str = r"^\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}$";

const KIND: IdentifierKind = IdentifierKind::Cnpj;
const EXPECTED: &str = "00.000.000/0000-00";

/// `true` if `value` is a valid CNPJ.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 14 digits.
///
/// # Errors
///
/// The first failed check: empty input, raw pattern, length, repeated-digit
/// number, check digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    if !static_regex!(PATTERN).is_match(raw) {
        return reject(ValidationError::Malformed {
            kind: KIND,
            value: raw.to_string(),
            expected: EXPECTED,
        });
    }

    let digits = require_length(only_digits(raw), KIND, LENGTH, "14 digits")?;
    if is_repeated_sequence(&digits) {
        return reject(ValidationError::Reserved {
            kind: KIND,
            value: digits,
        });
    }
    if digits[12..] != check_digits(&digits[..12]) {
        return reject(ValidationError::Checksum {
            kind: KIND,
            value: digits,
        });
    }
    Ok(digits)
}

/// The two check digits for a 12-digit base.
pub fn check_digits(base: &str) -> String {
    let first = mod11(base, &CNPJ_WEIGHTS_FIRST);
    let with_first = format!("{base}{}", digit_char(first));
    let second = mod11(&with_first, &CNPJ_WEIGHTS_SECOND);
    [digit_char(first), digit_char(second)].iter().collect()
}

/// Render `value` as `00.000.000/0000-00`.
pub fn format(value: impl fmt::Display, options: FormatOptions) -> String {
    FORMAT.render(&value.to_string(), options.pad)
}

/// Generate a valid CNPJ with [`OsRng`].
pub fn generate() -> String {
    generate_with(&mut OsRng)
}

/// Generate a valid CNPJ from `rng`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        let base = random_digits(rng, 12);
        if is_repeated_sequence(&base) {
            continue;
        }
        let cnpj = format!("{base}{}", check_digits(&base));
        tracing::debug!("generated CNPJ");
        return cnpj;
    }
}

/// Generate a valid CNPJ in display form.
pub fn generate_formatted() -> String {
    FORMAT.apply(&generate(), false)
}

/// A validated CNPJ, stored as 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Parse and validate a CNPJ in any accepted raw form.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 14 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `00.000.000/0000-00`.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }

    /// The 8-digit company root, shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// `true` for the headquarters (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_known_numbers() {
        for cnpj in ["11222333000181", "11444777000161", "00000000000191"] {
            assert!(is_valid(cnpj), "{cnpj} should be valid");
        }
        assert!(is_valid("11.222.333/0001-81"));
        assert!(is_valid("11222333/0001-81"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid("11-222-333/0001-81"));
        assert!(!is_valid("11.222.333.0001.81"));
        assert!(!is_valid("1122233300018"));
        assert!(!is_valid(""));
        assert!(!is_valid(None::<String>));
    }

    #[test]
    fn rejects_repeated_digits() {
        assert!(matches!(
            validate("00000000000000"),
            Err(ValidationError::Reserved { .. })
        ));
        assert!(!is_valid("11.111.111/1111-11"));
    }

    #[test]
    fn rejects_bad_check_digits() {
        assert!(matches!(
            validate("11222333000182"),
            Err(ValidationError::Checksum { .. })
        ));
    }

    #[test]
    fn formats_to_display_form() {
        assert_eq!(format("11222333000181", FormatOptions::default()), "11.222.333/0001-81");
        assert_eq!(format(191u64, FormatOptions::padded()), "00.000.000/0001-91");
        assert_eq!(format("112223", FormatOptions::default()), "11.222.3");
    }

    #[test]
    fn generates_valid_numbers() {
        for _ in 0..100 {
            assert!(is_valid(generate().as_str()));
        }
        let formatted = generate_formatted();
        assert_eq!(formatted.len(), 18);
        assert!(is_valid(formatted.as_str()));
    }

    #[test]
    fn newtype_exposes_root_and_branch() {
        let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert!(cnpj.is_headquarters());
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    }

    #[test]
    fn newtype_serde_roundtrip() {
        let cnpj = Cnpj::new("11444777000161").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(cnpj, back);
        assert!(serde_json::from_str::<Cnpj>("\"11444777000162\"").is_err());
    }

    proptest! {
        /// Any 12-digit base with computed check digits validates.
        #[test]
        fn computed_check_digits_validate(base in "[0-9]{12}") {
            prop_assume!(!is_repeated_sequence(&base));
            let cnpj = format!("{base}{}", check_digits(&base));
            prop_assert!(is_valid(cnpj.as_str()));
            prop_assert!(is_valid(format(&cnpj, FormatOptions::default())));
        }
    }
}
