//! # Real (BRL) Currency Strings
//!
//! Brazilian notation uses `,` as the decimal separator and `.` to group
//! thousands: `1234.56` renders as `"1.234,56"`.
//!
//! [`parse`] is the inverse for *typed* amounts: it keeps only the digits
//! and reads them as cents, the way a masked currency input field works.
//! `"R$ 1.234,56"` and `"123456"` both parse to `1234.56`.

use serde::{Deserialize, Serialize};

use brutil_core::only_digits;

/// Decimal places used when no precision is given.
pub const DEFAULT_PRECISION: usize = 2;

/// Formatting options for [`format_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// Number of decimal places.
    pub precision: usize,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Render `value` with `precision` decimal places in Brazilian notation.
///
/// Rounding follows the exact binary value of `value`. Non-finite values
/// render as an empty string.
pub fn format(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        tracing::trace!(value, "non-finite currency value");
        return String::new();
    }

    let fixed = std::format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

/// Render `value` with the given options.
pub fn format_with(value: f64, options: &CurrencyOptions) -> String {
    format(value, options.precision)
}

/// Render `value` with two decimal places and the `R$` symbol.
pub fn format_brl(value: f64) -> String {
    let amount = format(value, DEFAULT_PRECISION);
    if amount.is_empty() {
        return amount;
    }
    std::format!("R$ {amount}")
}

/// Read the digits of `value` as a number of cents.
///
/// Every non-digit character is discarded, so signs and separators carry
/// no meaning. Input without digits parses to `0.0`.
pub fn parse(value: &str) -> f64 {
    let digits = only_digits(value);
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().unwrap_or(0.0) / 100.0
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_brazilian_separators() {
        assert_eq!(format(1234.56, 2), "1.234,56");
        assert_eq!(format(1234567.891, 2), "1.234.567,89");
        assert_eq!(format(0.0, 2), "0,00");
        assert_eq!(format(999.0, 2), "999,00");
        assert_eq!(format(1000.0, 2), "1.000,00");
    }

    #[test]
    fn precision_controls_decimal_places() {
        assert_eq!(format(1234.5678, 3), "1.234,568");
        assert_eq!(format(1234.4, 0), "1.234");
        assert_eq!(format_with(10.0, &CurrencyOptions { precision: 4 }), "10,0000");
        assert_eq!(format_with(10.0, &CurrencyOptions::default()), "10,00");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format(-1234.56, 2), "-1.234,56");
        assert_eq!(format(-0.001, 2), "0,00");
    }

    #[test]
    fn non_finite_values_render_empty() {
        assert_eq!(format(f64::NAN, 2), "");
        assert_eq!(format(f64::INFINITY, 2), "");
        assert_eq!(format_brl(f64::NEG_INFINITY), "");
    }

    #[test]
    fn brl_prefix() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
    }

    #[test]
    fn parses_masked_amounts() {
        assert_eq!(parse("R$ 1.234,56"), 1234.56);
        assert_eq!(parse("123456"), 1234.56);
        assert_eq!(parse("0,05"), 0.05);
    }

    #[test]
    fn parse_without_digits_is_zero() {
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("R$ ,"), 0.0);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CurrencyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.precision, DEFAULT_PRECISION);
    }

    proptest! {
        /// Formatting whole cents and parsing the text back is lossless.
        #[test]
        fn format_then_parse_recovers_cents(cents in 0u64..10_000_000_000) {
            let value = cents as f64 / 100.0;
            let parsed = parse(&format(value, 2));
            prop_assert_eq!((parsed * 100.0).round() as u64, cents);
        }

        /// Grouping never changes the digits.
        #[test]
        fn grouping_preserves_digits(integer in "[1-9][0-9]{0,15}") {
            let grouped = group_thousands(&integer);
            prop_assert_eq!(grouped.replace('.', ""), integer);
        }
    }
}
