//! # Reference Table
//!
//! The parsed, validated, read-only form of the state/city asset.
//!
//! The embedded asset (`data/states.json`) is parsed once on first use and
//! shared for the lifetime of the process. Other data sets in the same shape
//! (for instance the complete IBGE city list) can be loaded with
//! [`ReferenceTable::from_json`] and queried through the same methods.
//!
//! ## Load-Time Checks
//!
//! - State codes are two ASCII upper-case letters and unique.
//! - Names are non-empty.
//! - Fiscal regions are single digits.
//! - Area codes are two-digit numbers assigned to exactly one state.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Deserialize;

use brutil_core::{BrutilError, BrutilResult};

use crate::collate;
use crate::state::State;

const EMBEDDED_JSON: &str = include_str!("../data/states.json");

static EMBEDDED: OnceLock<ReferenceTable> = OnceLock::new();

#[derive(Deserialize)]
struct Document {
    states: Vec<State>,
}

/// Immutable state/city/area-code lookup structure.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    /// States ordered by name.
    states: Vec<State>,
    /// Area code → index into `states`.
    by_area_code: BTreeMap<u8, usize>,
}

impl ReferenceTable {
    /// Parse and validate a table from a JSON document of the form
    /// `{"states": [{"code", "name", "fiscal_region", "area_codes", "cities"}]}`.
    ///
    /// # Errors
    ///
    /// Returns [`BrutilError::Json`] if the document does not parse and
    /// [`BrutilError::ReferenceData`] if a load-time check fails.
    pub fn from_json(json: &str) -> BrutilResult<Self> {
        let document: Document = serde_json::from_str(json)?;
        Self::from_states(document.states)
    }

    /// Validate and index a list of states.
    ///
    /// # Errors
    ///
    /// Returns [`BrutilError::ReferenceData`] if a load-time check fails.
    pub fn from_states(mut states: Vec<State>) -> BrutilResult<Self> {
        let mut codes = BTreeSet::new();
        for state in &states {
            if state.code.len() != 2 || !state.code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(BrutilError::ReferenceData(format!(
                    "invalid state code \"{}\"",
                    state.code
                )));
            }
            if !codes.insert(state.code.as_str()) {
                return Err(BrutilError::ReferenceData(format!(
                    "duplicate state code \"{}\"",
                    state.code
                )));
            }
            if state.name.trim().is_empty() {
                return Err(BrutilError::ReferenceData(format!(
                    "state \"{}\" has an empty name",
                    state.code
                )));
            }
            if state.fiscal_region > 9 {
                return Err(BrutilError::ReferenceData(format!(
                    "state \"{}\" has fiscal region {} (expected 0-9)",
                    state.code, state.fiscal_region
                )));
            }
        }

        states.sort_by(|a, b| collate::compare(&a.name, &b.name));

        let mut by_area_code = BTreeMap::new();
        for (index, state) in states.iter().enumerate() {
            for &area_code in &state.area_codes {
                if !(11..=99).contains(&area_code) {
                    return Err(BrutilError::ReferenceData(format!(
                        "state \"{}\" has invalid area code {area_code}",
                        state.code
                    )));
                }
                if let Some(previous) = by_area_code.insert(area_code, index) {
                    return Err(BrutilError::ReferenceData(format!(
                        "area code {area_code} assigned to both \"{}\" and \"{}\"",
                        states[previous].code, state.code
                    )));
                }
            }
        }

        Ok(Self {
            states,
            by_area_code,
        })
    }

    /// The table parsed from the embedded asset.
    ///
    /// Parsed on first call. A corrupt asset is logged at `WARN` and yields
    /// an empty table.
    pub fn embedded() -> &'static ReferenceTable {
        EMBEDDED.get_or_init(|| match Self::from_json(EMBEDDED_JSON) {
            Ok(table) => {
                tracing::debug!(
                    states = table.states.len(),
                    area_codes = table.by_area_code.len(),
                    "loaded embedded reference table"
                );
                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "embedded reference table rejected; lookups will be empty");
                Self::default()
            }
        })
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if the table holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states, ordered by name.
    pub fn states(&self) -> Vec<&State> {
        self.states.iter().collect()
    }

    /// The state whose code or name matches `query`.
    pub fn find_state(&self, query: &str) -> Option<&State> {
        if query.trim().is_empty() {
            return None;
        }
        self.states.iter().find(|state| state.matches(query))
    }

    /// City names of the matching state, or of every state when `query`
    /// is `None`, ordered by name. Unknown states yield an empty list.
    pub fn cities(&self, query: Option<&str>) -> Vec<&str> {
        let mut cities: Vec<&str> = match query {
            Some(query) => match self.find_state(query) {
                Some(state) => state.cities.iter().map(String::as_str).collect(),
                None => {
                    tracing::trace!(query, "no state matches city query");
                    return Vec::new();
                }
            },
            None => self
                .states
                .iter()
                .flat_map(|state| state.cities.iter().map(String::as_str))
                .collect(),
        };
        collate::sort_names(&mut cities);
        cities
    }

    /// The state an area code is assigned to.
    pub fn state_for_area_code(&self, area_code: u8) -> Option<&State> {
        self.by_area_code
            .get(&area_code)
            .and_then(|&index| self.states.get(index))
    }

    /// `true` if the area code is assigned to any state.
    pub fn is_known_area_code(&self, area_code: u8) -> bool {
        self.by_area_code.contains_key(&area_code)
    }

    /// Every assigned area code, ascending.
    pub fn area_codes(&self) -> Vec<u8> {
        self.by_area_code.keys().copied().collect()
    }
}
