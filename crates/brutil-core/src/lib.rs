#![deny(missing_docs)]

//! # brutil-core — Foundational Pieces for brutil
//!
//! Every identifier crate in the workspace is assembled from the same
//! building blocks defined here. This crate has no internal dependencies.
//!
//! ## Building Blocks
//!
//! 1. **Digit extraction** ([`digits`]). Canonicalization of user input is
//!    always "keep the ASCII digits, drop everything else".
//!
//! 2. **Positional formatting** ([`PositionalFormat`]). Display forms such as
//!    `000.000.000-00` are fixed separator tables applied to a canonical
//!    digit string, never hand-assembled `format!` calls.
//!
//! 3. **Check-digit arithmetic** ([`checksum`]). Weighted mod 11, the FEBRABAN
//!    mod 10 / mod 11 pair, and ISO 7064 mod 97-10.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured rejection reasons with
//!    `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` reachable from malformed input.

pub mod checksum;
pub mod digits;
pub mod error;
pub mod format;
pub mod input;
pub mod kind;
pub mod random;

// Re-export primary types at crate root for ergonomic imports.
pub use digits::{is_repeated_sequence, only_digits};
pub use error::{BrutilError, BrutilResult, ValidationError};
pub use format::{FormatOptions, PositionalFormat};
pub use input::RawInput;
pub use kind::IdentifierKind;
pub use random::random_digits;
