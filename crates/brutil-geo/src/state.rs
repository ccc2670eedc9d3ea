//! # State Records
//!
//! One [`State`] per Brazilian federative unit: two-letter code, name,
//! Receita Federal fiscal region, telephone area codes, and city names.

use serde::{Deserialize, Serialize};

/// A Brazilian state (or the Federal District) with its reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Two-letter code, e.g. `"SP"`.
    pub code: String,
    /// Full name, e.g. `"São Paulo"`.
    pub name: String,
    /// Receita Federal fiscal region (0–9). A CPF issued in the state
    /// carries this value as its ninth digit.
    pub fiscal_region: u8,
    /// Telephone area codes (DDD) assigned to the state.
    pub area_codes: Vec<u8>,
    /// City names, in asset order.
    #[serde(default)]
    pub cities: Vec<String>,
}

impl State {
    /// `true` if `area_code` is assigned to this state.
    pub fn has_area_code(&self, area_code: u8) -> bool {
        self.area_codes.contains(&area_code)
    }

    /// `true` if `query` is this state's code (case-insensitive) or its
    /// name (case- and accent-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.code.eq_ignore_ascii_case(query) || crate::collate::matches(&self.name, query)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
