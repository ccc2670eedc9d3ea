//! # Title-Casing for Portuguese Names
//!
//! `"JOÃO DA SILVA"` → `"João da Silva"`. Connectives such as *da*, *de*,
//! *dos* stay lower case unless they open the text; acronyms such as *CPF*
//! and *LTDA* are forced upper case; every other word gets an upper-case
//! initial and a lower-case remainder.
//!
//! Tokens are split on single spaces and empty tokens are dropped, so runs of
//! spaces collapse to one. Word lists are matched case-insensitively.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Words kept lower case when they are not the first word.
pub const DEFAULT_LOWER_CASE_WORDS: &[&str] = &[
    "a", "as", "o", "os", "e", "da", "das", "de", "di", "do", "dos", "du", "em", "na", "nas", "no",
    "nos",
];

/// Words always rendered fully upper case.
pub const DEFAULT_UPPER_CASE_WORDS: &[&str] =
    &["cpf", "cnpj", "rg", "cep", "cnh", "pis", "ltda", "mei", "epp"];

/// Exception word lists for [`capitalize_with`].
///
/// Supplied lists replace the defaults; a field missing from a deserialized
/// configuration keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalizeOptions {
    /// Words rendered lower case unless first.
    pub lower_case_words: Vec<String>,
    /// Words rendered fully upper case.
    pub upper_case_words: Vec<String>,
}

impl Default for CapitalizeOptions {
    fn default() -> Self {
        Self {
            lower_case_words: DEFAULT_LOWER_CASE_WORDS.iter().map(|w| w.to_string()).collect(),
            upper_case_words: DEFAULT_UPPER_CASE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Title-case `value` with the default word lists.
pub fn capitalize(value: &str) -> String {
    capitalize_with(value, &CapitalizeOptions::default())
}

/// Title-case `value` with caller-supplied word lists.
pub fn capitalize_with(value: &str, options: &CapitalizeOptions) -> String {
    let lower: HashSet<String> = options
        .lower_case_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();
    let upper: HashSet<String> = options
        .upper_case_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    value
        .split(' ')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            let word = token.to_lowercase();
            if index > 0 && lower.contains(&word) {
                word
            } else if upper.contains(&word) {
                word.to_uppercase()
            } else {
                upper_initial(&word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_initial(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
