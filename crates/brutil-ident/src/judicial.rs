//! # CNJ Judicial Process Numbers
//!
//! The unified numbering of CNJ Resolution 65/2008, `NNNNNNN-DD.AAAA.J.TR.OOOO`:
//!
//! | Field | Digits | Meaning |
//! |---|---|---|
//! | `NNNNNNN` | 7 | sequence within the origin unit and year |
//! | `DD` | 2 | ISO 7064 mod 97-10 check digits |
//! | `AAAA` | 4 | filing year |
//! | `J` | 1 | judicial segment |
//! | `TR` | 2 | court |
//! | `OOOO` | 4 | origin unit |
//!
//! The check digits are `98 - (N ‖ AAAAJTR ‖ OOOO ‖ 00) mod 97`.

use std::fmt;

use serde::{Deserialize, Serialize};

use brutil_core::checksum::mod97_check_digits;
use brutil_core::{only_digits, IdentifierKind, PositionalFormat, RawInput, ValidationError};

use crate::{reject, require, require_length};

/// Canonical digit count.
pub const LENGTH: usize = 20;

/// Digit count without the check digits.
pub const BODY_LENGTH: usize = 18;

/// Display form `0000000-00.0000.0.00.0000`.
pub const FORMAT: PositionalFormat =
    PositionalFormat::new(LENGTH, &[(6, "-"), (8, "."), (12, "."), (13, "."), (15, ".")]);

const SEQUENCE: (usize, usize) = (0, 7);
const CHECK_DIGITS: (usize, usize) = (7, 9);
const YEAR: (usize, usize) = (9, 13);
const SEGMENT: usize = 13;
const COURT: (usize, usize) = (14, 16);
const ORIGIN: (usize, usize) = (16, 20);

const KIND: IdentifierKind = IdentifierKind::JudicialProcess;

/// Branch of the judiciary, the `J` digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudicialSegment {
    /// 1: Supremo Tribunal Federal.
    SupremeCourt,
    /// 2: Conselho Nacional de Justiça.
    NationalCouncil,
    /// 3: Superior Tribunal de Justiça.
    SuperiorCourt,
    /// 4: Justiça Federal.
    Federal,
    /// 5: Justiça do Trabalho.
    Labor,
    /// 6: Justiça Eleitoral.
    Electoral,
    /// 7: Justiça Militar da União.
    FederalMilitary,
    /// 8: Justiça dos Estados e do Distrito Federal.
    State,
    /// 9: Justiça Militar Estadual.
    StateMilitary,
}

impl JudicialSegment {
    /// The segment for a `J` digit; `None` for 0.
    pub fn from_digit(digit: u8) -> Option<Self> {
        Some(match digit {
            1 => Self::SupremeCourt,
            2 => Self::NationalCouncil,
            3 => Self::SuperiorCourt,
            4 => Self::Federal,
            5 => Self::Labor,
            6 => Self::Electoral,
            7 => Self::FederalMilitary,
            8 => Self::State,
            9 => Self::StateMilitary,
            _ => return None,
        })
    }
}

/// `true` if `value` is a valid CNJ process number.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 20 digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let digits = require_length(only_digits(raw), KIND, LENGTH, "20 digits")?;

    let body = format!("{}{}", slice(&digits, SEQUENCE), &digits[YEAR.0..]);
    if check_digits(&body).as_deref() != Some(slice(&digits, CHECK_DIGITS)) {
        return reject(ValidationError::Checksum {
            kind: KIND,
            value: digits,
        });
    }
    Ok(digits)
}

/// The two check digits for an 18-digit body `NNNNNNNAAAAJTROOOO`.
///
/// Returns `None` unless `body` is exactly 18 ASCII digits.
pub fn check_digits(body: &str) -> Option<String> {
    if body.len() != BODY_LENGTH || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let dv = mod97_check_digits(&[&body[..7], &body[7..14], &body[14..]]);
    Some(format!("{dv:02}"))
}

/// Render `value` as `0000000-00.0000.0.00.0000`.
pub fn format(value: &str) -> String {
    FORMAT.render(value, false)
}

fn slice(digits: &str, (start, end): (usize, usize)) -> &str {
    &digits[start..end]
}

/// A validated CNJ process number, stored as 20 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct JudicialProcess(String);

impl_validating_deserialize!(JudicialProcess);

impl JudicialProcess {
    /// Parse and validate a process number.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 20 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `NNNNNNN`.
    pub fn sequence(&self) -> &str {
        slice(&self.0, SEQUENCE)
    }

    /// `DD`.
    pub fn check_digits(&self) -> &str {
        slice(&self.0, CHECK_DIGITS)
    }

    /// `AAAA`.
    pub fn year(&self) -> u16 {
        slice(&self.0, YEAR).parse().unwrap_or_default()
    }

    /// `J`, or `None` for the unassigned digit 0.
    pub fn segment(&self) -> Option<JudicialSegment> {
        JudicialSegment::from_digit(self.0.as_bytes()[SEGMENT] - b'0')
    }

    /// `TR`.
    pub fn court(&self) -> &str {
        slice(&self.0, COURT)
    }

    /// `OOOO`.
    pub fn origin(&self) -> &str {
        slice(&self.0, ORIGIN)
    }

    /// The display form.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }
}

impl fmt::Display for JudicialProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
