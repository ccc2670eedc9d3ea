#![deny(missing_docs)]

//! # brutil-ident — Brazilian Identifiers
//!
//! One module per identifier. Each exposes the same surface:
//!
//! | Function | Contract |
//! |---|---|
//! | `is_valid(value)` | Total, never panics, `false` for absent or empty input |
//! | `validate(value)` | Same decision, with the rejection reason as a [`ValidationError`] |
//! | `format(value, ..)` | Canonical digits with the official separators inserted |
//!
//! plus a validated newtype ([`Cpf`], [`Cnpj`], ...) that stores the
//! canonical form, renders the display form through `Display`, and
//! re-validates on deserialization.
//!
//! CPF and CNPJ additionally provide generators that draw from an injected
//! [`rand::Rng`].
//!
//! ## Validation Pipeline
//!
//! Validators apply their checks in a fixed order and stop at the first
//! failure: presence, raw textual pattern, digit count, reserved numbers,
//! type-specific structure, check digits. Every rejection is logged at
//! `TRACE` with the identifier kind and reason; input values are never
//! logged.

use brutil_core::{IdentifierKind, ValidationError};

/// Implements `Deserialize` for a validated newtype by reading a string and
/// passing it through the type's `new` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = brutil_core::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

/// A `&'static Regex` compiled on first use.
///
/// Patterns are module constants; every one is compiled by this crate's
/// tests, so the `expect` cannot fire at runtime.
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("static pattern is valid"))
    }};
}

pub mod boleto;
pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod email;
pub mod judicial;
pub mod license_plate;
pub mod phone;
pub mod pis;

pub use boleto::Boleto;
pub use cep::Cep;
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use email::Email;
pub use judicial::{JudicialProcess, JudicialSegment};
pub use license_plate::{LicensePlate, PlateFormat};
pub use phone::{Phone, PhoneKind};
pub use pis::Pis;

/// Log a rejection and return it as an error.
pub(crate) fn reject<T>(error: ValidationError) -> Result<T, ValidationError> {
    tracing::trace!(kind = %error.kind(), reason = error.reason(), "identifier rejected");
    Err(error)
}

/// The trimmed input, or [`ValidationError::Empty`] if absent or blank.
pub(crate) fn require(raw: Option<&str>, kind: IdentifierKind) -> Result<&str, ValidationError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => reject(ValidationError::Empty { kind }),
    }
}

/// `digits` if it has exactly `length` characters.
pub(crate) fn require_length(
    digits: String,
    kind: IdentifierKind,
    length: usize,
    expected: &'static str,
) -> Result<String, ValidationError> {
    if digits.len() == length {
        Ok(digits)
    } else {
        reject(ValidationError::Length {
            kind,
            actual: digits.len(),
            value: digits,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_and_rejects_blank() {
        assert_eq!(require(Some("  12 "), IdentifierKind::Cep), Ok("12"));
        assert!(matches!(
            require(Some("   "), IdentifierKind::Cep),
            Err(ValidationError::Empty { kind: IdentifierKind::Cep })
        ));
        assert!(require(None, IdentifierKind::Cpf).is_err());
    }

    #[test]
    fn require_length_reports_actual_count() {
        let err = require_length("123".to_string(), IdentifierKind::Cep, 8, "8 digits").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length {
                kind: IdentifierKind::Cep,
                value: "123".to_string(),
                actual: 3,
                expected: "8 digits",
            }
        );
    }
}
