//! # Error Hierarchy
//!
//! Structured error types for the workspace, built with `thiserror`.
//!
//! The boolean `is_valid` functions deliberately collapse every rejection to
//! `false`. The `validate` functions and the validated newtypes surface the
//! same decision as a [`ValidationError`], carrying the identifier kind, the
//! offending input, and what was expected, so callers that need to explain a
//! rejection can do so without re-deriving it.

use thiserror::Error;

use crate::kind::IdentifierKind;

/// Convenience alias for results in this workspace.
pub type BrutilResult<T> = Result<T, BrutilError>;

/// Top-level error type for the workspace.
#[derive(Error, Debug)]
pub enum BrutilError {
    /// An identifier failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Embedded reference data is inconsistent.
    #[error("reference data error: {0}")]
    ReferenceData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an identifier was rejected.
///
/// Variants follow the order in which validators apply their checks:
/// presence, raw format, length, reserved numbers, structure, check digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No input, or input that is empty after trimming.
    #[error("empty {kind} value")]
    Empty {
        /// The identifier being validated.
        kind: IdentifierKind,
    },

    /// Raw text does not match the accepted textual pattern.
    #[error("malformed {kind}: \"{value}\" (expected {expected})")]
    Malformed {
        /// The identifier being validated.
        kind: IdentifierKind,
        /// The raw input.
        value: String,
        /// Human-readable description of the accepted format.
        expected: &'static str,
    },

    /// Canonical digit count is not one of the accepted lengths.
    #[error("invalid {kind} length: \"{value}\" has {actual} digits (expected {expected})")]
    Length {
        /// The identifier being validated.
        kind: IdentifierKind,
        /// The canonical (digits-only) value.
        value: String,
        /// Number of digits found.
        actual: usize,
        /// Human-readable description of the accepted lengths.
        expected: &'static str,
    },

    /// The number is well formed but reserved by the issuing registry.
    #[error("reserved {kind} number: \"{value}\"")]
    Reserved {
        /// The identifier being validated.
        kind: IdentifierKind,
        /// The canonical value.
        value: String,
    },

    /// A type-specific structural rule failed.
    #[error("invalid {kind} structure: \"{value}\" ({reason})")]
    Structure {
        /// The identifier being validated.
        kind: IdentifierKind,
        /// The canonical value.
        value: String,
        /// Which rule failed.
        reason: &'static str,
    },

    /// The telephone area code (DDD) is not assigned to any state.
    #[error("unknown area code {area_code} in \"{value}\"")]
    UnknownAreaCode {
        /// The two-digit area code.
        area_code: String,
        /// The canonical phone number.
        value: String,
    },

    /// Embedded check digits do not match the computed ones.
    #[error("{kind} check digit mismatch for \"{value}\"")]
    Checksum {
        /// The identifier being validated.
        kind: IdentifierKind,
        /// The canonical value.
        value: String,
    },
}

impl ValidationError {
    /// The identifier kind this error refers to.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Empty { kind }
            | Self::Malformed { kind, .. }
            | Self::Length { kind, .. }
            | Self::Reserved { kind, .. }
            | Self::Structure { kind, .. }
            | Self::Checksum { kind, .. } => *kind,
            Self::UnknownAreaCode { .. } => IdentifierKind::Phone,
        }
    }

    /// Short machine-friendly label for the rejection class, used as a
    /// structured field in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::Malformed { .. } => "malformed",
            Self::Length { .. } => "length",
            Self::Reserved { .. } => "reserved",
            Self::Structure { .. } => "structure",
            Self::UnknownAreaCode { .. } => "unknown_area_code",
            Self::Checksum { .. } => "checksum",
        }
    }
}
