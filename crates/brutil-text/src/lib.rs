#![deny(missing_docs)]

//! # brutil-text — Portuguese Text Helpers
//!
//! - [`capitalize`]: title-casing of names with connective and acronym
//!   exception lists.
//! - [`currency`]: Real (BRL) amount formatting and parsing.

pub mod capitalize;
pub mod currency;

pub use capitalize::{capitalize, capitalize_with, CapitalizeOptions};
pub use currency::CurrencyOptions;
