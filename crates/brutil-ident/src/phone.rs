//! # Telephone Numbers
//!
//! A two-digit area code (DDD) followed by the subscriber number. Landlines
//! have 10 digits in total and a subscriber number starting with 2 to 5;
//! mobiles have 11 digits and start with 6 to 9. The area code must be
//! assigned to a state in the reference table.

use std::fmt;

use serde::{Deserialize, Serialize};

use brutil_core::{only_digits, IdentifierKind, PositionalFormat, RawInput, ValidationError};
use brutil_geo::State;

use crate::{reject, require};

/// Digit count of a landline number, area code included.
pub const LANDLINE_LENGTH: usize = 10;

/// Digit count of a mobile number, area code included.
pub const MOBILE_LENGTH: usize = 11;

/// Display form `(00) 0000-0000`, without the opening parenthesis.
const LANDLINE_FORMAT: PositionalFormat =
    PositionalFormat::new(LANDLINE_LENGTH, &[(1, ") "), (5, "-")]);

/// Display form `(00) 00000-0000`, without the opening parenthesis.
const MOBILE_FORMAT: PositionalFormat =
    PositionalFormat::new(MOBILE_LENGTH, &[(1, ") "), (6, "-")]);

const KIND: IdentifierKind = IdentifierKind::Phone;

/// Landline or mobile, decided by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// 10 digits, subscriber number starting with 2 to 5.
    Landline,
    /// 11 digits, subscriber number starting with 6 to 9.
    Mobile,
}

impl PhoneKind {
    fn from_length(length: usize) -> Option<Self> {
        match length {
            LANDLINE_LENGTH => Some(Self::Landline),
            MOBILE_LENGTH => Some(Self::Mobile),
            _ => None,
        }
    }

    fn accepts_first_digit(self, digit: u8) -> bool {
        match self {
            Self::Landline => (b'2'..=b'5').contains(&digit),
            Self::Mobile => (b'6'..=b'9').contains(&digit),
        }
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landline => write!(f, "landline"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

/// `true` if `value` is a valid landline or mobile number.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// `true` if `value` is a valid mobile number.
pub fn is_valid_mobile(value: impl RawInput) -> bool {
    matches!(classify(value), Ok((_, PhoneKind::Mobile)))
}

/// `true` if `value` is a valid landline number.
pub fn is_valid_landline(value: impl RawInput) -> bool {
    matches!(classify(value), Ok((_, PhoneKind::Landline)))
}

/// `true` if `value` holds exactly two digits forming an assigned area code.
pub fn is_valid_area_code(value: impl RawInput) -> bool {
    let digits = only_digits(value.raw().unwrap_or_default());
    digits.len() == 2
        && digits
            .parse::<u8>()
            .is_ok_and(brutil_geo::is_known_area_code)
}

/// Validate `value` and return its canonical 10 or 11 digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    classify(value).map(|(digits, _)| digits)
}

fn classify(value: impl RawInput) -> Result<(String, PhoneKind), ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let digits = only_digits(raw);

    let Some(kind) = PhoneKind::from_length(digits.len()) else {
        return reject(ValidationError::Length {
            kind: KIND,
            actual: digits.len(),
            value: digits,
            expected: "10 or 11 digits",
        });
    };

    let area_code = &digits[..2];
    if !area_code.parse::<u8>().is_ok_and(brutil_geo::is_known_area_code) {
        return reject(ValidationError::UnknownAreaCode {
            area_code: area_code.to_string(),
            value: digits,
        });
    }

    if !kind.accepts_first_digit(digits.as_bytes()[2]) {
        let reason = match kind {
            PhoneKind::Landline => "landline numbers start with 2 to 5",
            PhoneKind::Mobile => "mobile numbers start with 6 to 9",
        };
        return reject(ValidationError::Structure {
            kind: KIND,
            value: digits,
            reason,
        });
    }

    Ok((digits, kind))
}

/// Render `value` as `(00) 0000-0000` (up to 10 digits) or
/// `(00) 00000-0000` (11 digits).
pub fn format(value: &str) -> String {
    let digits = only_digits(value);
    if digits.is_empty() {
        return String::new();
    }
    let layout = if digits.len() > LANDLINE_LENGTH {
        MOBILE_FORMAT
    } else {
        LANDLINE_FORMAT
    };
    format!("({}", layout.apply(&digits, false))
}

/// A validated phone number, stored as 10 or 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone(String);

impl_validating_deserialize!(Phone);

impl Phone {
    /// Parse and validate a phone number.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Landline or mobile.
    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == MOBILE_LENGTH {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> u8 {
        let bytes = self.0.as_bytes();
        (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
    }

    /// The subscriber number, without the area code.
    pub fn subscriber_number(&self) -> &str {
        &self.0[2..]
    }

    /// The state the area code belongs to.
    pub fn state(&self) -> Option<&'static State> {
        brutil_geo::state_for_area_code(self.area_code())
    }

    /// The display form.
    pub fn formatted(&self) -> String {
        format(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
