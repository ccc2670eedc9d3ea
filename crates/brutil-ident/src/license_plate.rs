//! # Vehicle License Plates
//!
//! Two layouts are in circulation:
//!
//! - legacy: three letters and four digits, written `ABC-1234`;
//! - Mercosul (since 2018): `ABC1D23`, the fifth character a letter.
//!
//! Input is case-insensitive and the legacy hyphen is optional. Converting
//! a legacy plate to Mercosul replaces its second digit with the letter of
//! the same index (`0` → `A` … `9` → `J`).

use std::fmt;

use serde::{Deserialize, Serialize};

use brutil_core::{IdentifierKind, RawInput, ValidationError};

use crate::{reject, require};

pub(crate) const LEGACY_PATTERN: &str = r"^[A-Za-z]{3}-?[0-9]{4}$";
pub(crate) const MERCOSUL_PATTERN: &str = r"^[A-Za-z]{3}[0-9][A-Za-z][0-9]{2}$";

const KIND: IdentifierKind = IdentifierKind::LicensePlate;
const EXPECTED: &str = "ABC-1234 or ABC1D23";

/// Plate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFormat {
    /// `ABC-1234`.
    Legacy,
    /// `ABC1D23`.
    Mercosul,
}

/// `true` if `value` is a legacy or Mercosul plate.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return it upper-cased without the hyphen.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    classify(value).map(|(plate, _)| plate)
}

fn classify(value: impl RawInput) -> Result<(String, PlateFormat), ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let layout = if static_regex!(LEGACY_PATTERN).is_match(raw) {
        PlateFormat::Legacy
    } else if static_regex!(MERCOSUL_PATTERN).is_match(raw) {
        PlateFormat::Mercosul
    } else {
        return reject(ValidationError::Malformed {
            kind: KIND,
            value: raw.to_string(),
            expected: EXPECTED,
        });
    };
    let plate = raw.replace('-', "").to_ascii_uppercase();
    Ok((plate, layout))
}

/// Upper-case `value` and render its layout; input that is not a plate is
/// returned upper-cased and otherwise unchanged.
pub fn format(value: &str) -> String {
    match LicensePlate::new(value) {
        Ok(plate) => plate.formatted(),
        Err(_) => value.trim().to_ascii_uppercase(),
    }
}

/// A validated plate, stored upper-case without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LicensePlate(String);

impl_validating_deserialize!(LicensePlate);

impl LicensePlate {
    /// Parse and validate a plate.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical seven characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Legacy or Mercosul, from the fifth character.
    pub fn layout(&self) -> PlateFormat {
        if self.0.as_bytes()[4].is_ascii_digit() {
            PlateFormat::Legacy
        } else {
            PlateFormat::Mercosul
        }
    }

    /// `ABC-1234` for legacy plates, `ABC1D23` for Mercosul.
    pub fn formatted(&self) -> String {
        match self.layout() {
            PlateFormat::Legacy => format!("{}-{}", &self.0[..3], &self.0[3..]),
            PlateFormat::Mercosul => self.0.clone(),
        }
    }

    /// The Mercosul equivalent; Mercosul plates are returned unchanged.
    pub fn to_mercosul(&self) -> Self {
        match self.layout() {
            PlateFormat::Mercosul => self.clone(),
            PlateFormat::Legacy => {
                let mut plate = self.0.clone().into_bytes();
                plate[4] = b'A' + (plate[4] - b'0');
                Self(plate.into_iter().map(char::from).collect())
            }
        }
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
