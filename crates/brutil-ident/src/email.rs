//! # Email Addresses
//!
//! A pragmatic subset of RFC 5321/5322: dot-atom local part, a domain of
//! alphanumeric labels joined by dots, and an alphabetic top-level domain.
//! Quoted local parts and address literals are not accepted.
//!
//! Size limits: 254 characters overall, 64 for the local part, 253 for the
//! domain, 63 per domain label.

use std::fmt;

use serde::Serialize;

use brutil_core::{IdentifierKind, RawInput, ValidationError};

use crate::{reject, require};

/// Maximum length of a whole address.
pub const MAX_LENGTH: usize = 254;

/// Maximum length of the part before `@`.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of the part after `@`.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of one dot-separated domain label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Dot-atom local part, hostname labels, alphabetic TLD.
pub(crate) const PATTERN: &str =
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$";

const KIND: IdentifierKind = IdentifierKind::Email;
const EXPECTED: &str = "local-part@domain.tld";

/// `true` if `value` is a well-formed address.
pub fn is_valid(value: impl RawInput) -> bool {
    validate(value).is_ok()
}

/// Validate `value` and return it trimmed, with the domain lower-cased.
pub fn validate(value: impl RawInput) -> Result<String, ValidationError> {
    let raw = require(value.raw(), KIND)?;
    let structure = |reason| {
        reject(ValidationError::Structure {
            kind: KIND,
            value: raw.to_string(),
            reason,
        })
    };

    if raw.chars().count() > MAX_LENGTH {
        return structure("address longer than 254 characters");
    }
    let Some((local, domain)) = raw.rsplit_once('@') else {
        return reject(ValidationError::Malformed {
            kind: KIND,
            value: raw.to_string(),
            expected: EXPECTED,
        });
    };
    if local.len() > MAX_LOCAL_PART_LENGTH {
        return structure("local part longer than 64 characters");
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return structure("domain longer than 253 characters");
    }
    if domain.split('.').any(|label| label.len() > MAX_LABEL_LENGTH) {
        return structure("domain label longer than 63 characters");
    }

    let pattern = static_regex!(PATTERN);
    if !pattern.is_match(raw) {
        return reject(ValidationError::Malformed {
            kind: KIND,
            value: raw.to_string(),
            expected: EXPECTED,
        });
    }

    Ok(format!("{local}@{}", domain.to_ascii_lowercase()))
}

/// A validated address, stored trimmed with a lower-case domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl_validating_deserialize!(Email);

impl Email {
    /// Parse and validate an address.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate(value.as_ref()).map(Self)
    }

    /// The canonical address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before `@`.
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
