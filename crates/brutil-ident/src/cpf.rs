//! # CPF (Cadastro de Pessoas Físicas)
//!
//! The individual taxpayer number: nine base digits followed by two mod 11
//! check digits. The ninth base digit encodes the fiscal region that issued
//! the number.
//!
//! Accepted raw forms are `000.000.000-00` with each separator optional;
//! anything else is rejected before the digits are examined. Numbers made
//! of a single repeated digit pass the checksum but are reserved.

use std::fmt;

use rand::rngs::OsRng;
use rand::Rng;
use serde::Serialize;

use brutil_core::checksum::{digit_char, mod11, CPF_WEIGHTS_FIRST, CPF_WEIGHTS_SECOND};
use brutil_core::{
    is_repeated_sequence, only_digits, random_digits, FormatOptions, IdentifierKind,
    PositionalFormat, RawInput, ValidationError,
};
use brutil_geo::State;

use crate::{reject, require, require_length};

/// Canonical digit count.
pub const LENGTH: usize = 11;

/// Display form `000.000.000-00`.
pub const FORMAT: PositionalFormat = PositionalFormat::new(LENGTH, &[(2, "."), (5, "."), (8, "-")]);

/// Display form with every separator optional.
pub(crate) const PATTERN: &str = r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$";

const KIND: IdentifierKind = IdentifierKind::Cpf;
const EXPECTED: &str = "000.000.000-00";

/// `true` if `value` is a valid CPF.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return its canonical 11 digits.
///
/// # Errors
///
/// The first failed check, in pipeline order: empty input, raw pattern,
/// length, repeated-digit number, check digits.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    if !static_regex!(PATTERN).is_match(raw) {
        return reject(ValidationError::Malformed {
            kind: KIND,
            value: raw.to_string(),
            expected: EXPECTED,
        });
    }

    let digits = require_length(only_digits(raw), KIND, LENGTH, "11 digits")?;
    if is_repeated_sequence(&digits) {
        return reject(ValidationError::Reserved {
            kind: KIND,
            value: digits,
        });
    }
    if digits[9..] != check_digits(&digits[..9]) {
        return reject(ValidationError::Checksum {
            kind: KIND,
            value: digits,
        });
    }
    Ok(digits)
}

/// The two check digits for a 9-digit base.
pub fn check_digits(base: &str) -> String {
    let first = mod11(base, &CPF_WEIGHTS_FIRST);
    let with_first = format!("{base}{}", digit_char(first));
    let second = mod11(&with_first, &CPF_WEIGHTS_SECOND);
    [digit_char(first), digit_char(second)].iter().collect()
}

/// Render `value` as `000.000.000-00`.
///
/// Non-digits are stripped and extra digits dropped. Integers can be passed
/// directly; set [`FormatOptions::pad`] to restore their leading zeros.
pub fn format(value: impl fmt::Display, options: FormatOptions) -> String {
    FORMAT.render(&value.to_string(), options.pad)
}

/// Generate a valid CPF with [`OsRng`].
///
/// With `state` (code or name), the ninth digit is that state's fiscal
/// region; an unknown state is ignored.
pub fn generate(state: Option<&str>) -> String {
    generate_with(&mut OsRng, state)
}

/// Generate a valid CPF from `rng`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, state: Option<&str>) -> String {
    let region = state.and_then(|query| {
        let found = brutil_geo::find_state(query);
        if found.is_none() {
            tracing::trace!(state = query, "unknown state, drawing a random fiscal region");
        }
        found.map(|s| u32::from(s.fiscal_region))
    });

    loop {
        let mut base = random_digits(rng, 8);
        match region {
            Some(region) => base.push(digit_char(region)),
            None => base.push_str(&random_digits(rng, 1)),
        }
        if is_repeated_sequence(&base) {
            continue;
        }
        let cpf = format!("{base}{}", check_digits(&base));
        tracing::debug!(region = ?region, "generated CPF");
        return cpf;
    }
}

/// Generate a valid CPF in display form.
pub fn generate_formatted(state: Option<&str>) -> String {
    FORMAT.apply(&generate(state), false)
}

/// A validated CPF, stored as 11 digits.
///
/// `Display` renders `000.000.000-00`; serialization emits the digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Parse and validate a CPF in any accepted raw form.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical 11 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form `000.000.000-00`.
    pub fn formatted(&self) -> String {
        FORMAT.apply(&self.0, false)
    }

    /// Fiscal region digit (the ninth digit).
    pub fn fiscal_region(&self) -> u8 {
        self.0.as_bytes()[8] - b'0'
    }

    /// States served by this CPF's fiscal region.
    pub fn issuing_states(&self) -> Vec<&'static State> {
        let region = self.fiscal_region();
        brutil_geo::get_states()
            .into_iter()
            .filter(|s| s.fiscal_region == region)
            .collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
