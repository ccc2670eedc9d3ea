//! # Digit Extraction
//!
//! Canonicalization shared by every identifier: keep the ASCII digits of the
//! input in order and discard everything else. Non-ASCII numerals (Arabic,
//! full-width) are discarded too.

/// Return the ASCII digits of `value`, in order.
///
/// Total: never fails, and an input without digits yields an empty string.
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `true` when `digits` is non-empty and made of one repeated character
/// (`"00000000000"`, `"77777777777"`, ...).
///
/// Registries reserve these sequences: several of them carry a correct check
/// digit by accident of the arithmetic but are never issued.
pub fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digits_strips_separators() {
        assert_eq!(only_digits("111.444.777-35"), "11144477735");
        assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(only_digits("R$ 1.234,56"), "123456");
    }

    #[test]
    fn only_digits_empty_and_digitless_input() {
        assert_eq!(only_digits(""), "");
        assert_eq!(only_digits("abc-./ "), "");
    }

    #[test]
    fn only_digits_ignores_non_ascii_numerals() {
        // U+0661 ARABIC-INDIC DIGIT ONE, U+FF12 FULLWIDTH DIGIT TWO
        assert_eq!(only_digits("1\u{0661}2\u{FF12}3"), "123");
    }

    #[test]
    fn repeated_sequence_detection() {
        assert!(is_repeated_sequence("00000000000"));
        assert!(is_repeated_sequence("9"));
        assert!(!is_repeated_sequence("11144477735"));
        assert!(!is_repeated_sequence(""));
    }
}
