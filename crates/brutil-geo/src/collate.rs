//! Portuguese-aware ordering and matching.
//!
//! State and city names are compared on a folded key: lower case with the
//! diacritics removed, so `"Águas Lindas"` sorts among the `a`s and
//! `"sao paulo"` matches `"São Paulo"`. Ties on the folded key
//! fall back to the original text, which places unaccented forms first.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case `value` and strip diacritics.
///
/// The text is decomposed (NFKD) and combining marks dropped, so precomposed
/// `"ã"` and `"a\u{0303}"` fold to the same key.
pub fn fold(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names the way a Brazilian reader expects them ordered.
pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// `true` when both names are equal after trimming and folding.
pub fn matches(a: &str, b: &str) -> bool {
    fold(a.trim()) == fold(b.trim())
}

/// Sort names in place with [`compare`].
pub fn sort_names<T: AsRef<str>>(names: &mut [T]) {
    names.sort_by_cached_key(|name| (fold(name.as_ref()), name.as_ref().to_string()));
}
