#![deny(missing_docs)]

//! # brutil-geo — Brazilian Reference Data
//!
//! Read-only lookups over the 27 federative units: names, fiscal regions,
//! telephone area codes (DDD), and cities. The data ships as an embedded
//! JSON asset, parsed once into a [`ReferenceTable`] and never mutated.
//!
//! The free functions below query the embedded table. Every lookup is total:
//! an unknown state yields `None` or an empty list.
//!
//! ```
//! let cities = brutil_geo::get_cities(Some("SP"));
//! assert!(cities.contains(&"Campinas"));
//! assert!(brutil_geo::get_cities(Some("XX")).is_empty());
//! ```

pub mod collate;
pub mod state;
pub mod table;

pub use state::State;
pub use table::ReferenceTable;

/// All states, ordered by name (Portuguese-aware).
pub fn get_states() -> Vec<&'static State> {
    ReferenceTable::embedded().states()
}

/// City names of the state matching `state` (code or name), or of every
/// state when `None`, ordered by name. Unknown states yield an empty list.
pub fn get_cities(state: Option<&str>) -> Vec<&'static str> {
    ReferenceTable::embedded().cities(state)
}

/// The state whose two-letter code or name matches `query`.
pub fn find_state(query: &str) -> Option<&'static State> {
    ReferenceTable::embedded().find_state(query)
}

/// The state a telephone area code (DDD) belongs to.
pub fn state_for_area_code(area_code: u8) -> Option<&'static State> {
    ReferenceTable::embedded().state_for_area_code(area_code)
}

/// `true` if the area code (DDD) is assigned to a state.
pub fn is_known_area_code(area_code: u8) -> bool {
    ReferenceTable::embedded().is_known_area_code(area_code)
}

/// Every assigned area code, ascending.
pub fn area_codes() -> Vec<u8> {
    ReferenceTable::embedded().area_codes()
}
