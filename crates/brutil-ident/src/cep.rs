//! # CEP (Código de Endereçamento Postal)
//!
//! Eight-digit postal code. There is no check digit: any input with exactly
//! eight digits after stripping is valid.

use std::fmt;

use serde::Serialize;

use brutil_core::{only_digits, IdentifierKind, PositionalFormat, RawInput, ValidationError};

use crate::{require, require_length};

/// Canonical digit count.
pub const LENGTH: usize = 8;

/// Display form `00000-000`.
pub const FORMAT: PositionalFormat = PositionalFormat::new(LENGTH, &[(4, "-")]);

const KIND: IdentifierKind = IdentifierKind::Cep;

/// `true` if `value` has exactly eight digits.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 8 digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    require_length(only_digits(raw), KIND, LENGTH, "8 digits")
}

/// Render `value` as `00000-000`.
pub fn format(value: &str) -> String {
    FORMAT.render(value, false)
}

/// A validated CEP, stored as 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cep(String);

impl_validating_deserialize!(Cep);

impl Cep {
    /// Parse and validate a CEP.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 8 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `00000-000`.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
