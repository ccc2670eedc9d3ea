//! # Positional Formatting
//!
//! Every display form in the workspace is a canonical digit string with fixed
//! separators inserted after fixed positions. [`PositionalFormat`] captures
//! that table once per identifier as a `const`, so formatting code never
//! slices strings by hand.
//!
//! ## Rendering Rules
//!
//! 1. The input is truncated to the identifier's length; excess characters
//!    are dropped silently.
//! 2. With `pad`, a short input is left-padded with `'0'` up to the length.
//! 3. A separator is emitted after position `i` only if another character
//!    follows it, so partial input never ends with a dangling separator.

use serde::{Deserialize, Serialize};

use crate::digits::only_digits;

/// Caller-facing formatting options for CPF and CNPJ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Left-pad with zeros to the full identifier length before formatting.
    ///
    /// Useful when the value went through an integer type and lost its
    /// leading zeros.
    pub pad: bool,
}

impl FormatOptions {
    /// Options with padding enabled.
    pub fn padded() -> Self {
        Self { pad: true }
    }
}

/// A fixed separator table for one identifier's display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalFormat {
    length: usize,
    separators: &'static [(usize, &'static str)],
}

impl PositionalFormat {
    /// Build a format for canonical values of `length` characters.
    ///
    /// `separators` lists `(index, separator)` pairs: the separator is
    /// inserted right after the character at zero-based `index`.
    pub const fn new(length: usize, separators: &'static [(usize, &'static str)]) -> Self {
        Self { length, separators }
    }

    /// Fixed canonical length of the identifier.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Truncate (and optionally pad) `canonical` to the fixed length without
    /// inserting separators.
    pub fn canonicalize(&self, canonical: &str, pad: bool) -> String {
        let truncated: String = canonical.chars().take(self.length).collect();
        if pad {
            format!("{truncated:0>width$}", width = self.length)
        } else {
            truncated
        }
    }

    /// Render an already-canonical value.
    pub fn apply(&self, canonical: &str, pad: bool) -> String {
        let value = self.canonicalize(canonical, pad);
        let count = value.chars().count();
        let mut out = String::with_capacity(value.len() + self.separators.len() * 2);

        for (i, c) in value.chars().enumerate() {
            out.push(c);
            if i + 1 == count {
                break;
            }
            if let Some((_, sep)) = self.separators.iter().find(|(pos, _)| *pos == i) {
                out.push_str(sep);
            }
        }

        out
    }

    /// Extract the digits of arbitrary input, then render them.
    pub fn render(&self, raw: &str, pad: bool) -> String {
        self.apply(&only_digits(raw), pad)
    }
}
