//! # Format Round-Trips
//!
//! Formatting never changes the digits: stripping the separators from a
//! formatted value returns the (truncated or padded) canonical digits, and a
//! valid identifier stays valid once formatted.

use brutil_core::checksum::{digit_char, mod97_check_digits};
use brutil_core::{is_repeated_sequence, only_digits, FormatOptions};
use brutil_ident::{boleto, cep, cnpj, cpf, judicial, phone, pis};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cpf_format_preserves_digits(digits in "[0-9]{0,15}") {
        let expected: String = digits.chars().take(cpf::LENGTH).collect();
        prop_assert_eq!(only_digits(&cpf::format(&digits, FormatOptions::default())), expected);
    }

    #[test]
    fn cpf_padding_restores_leading_zeros(n in 0u64..100_000_000_000) {
        let formatted = cpf::format(n, FormatOptions::padded());
        prop_assert_eq!(formatted.len(), 14);
        prop_assert_eq!(only_digits(&formatted), format!("{n:011}"));
    }

    #[test]
    fn cnpj_format_preserves_digits(digits in "[0-9]{0,20}") {
        let expected: String = digits.chars().take(cnpj::LENGTH).collect();
        prop_assert_eq!(only_digits(&cnpj::format(&digits, FormatOptions::default())), expected);
    }

    #[test]
    fn cnpj_padding_restores_leading_zeros(n in 0u64..100_000_000_000_000) {
        let formatted = cnpj::format(n, FormatOptions::padded());
        prop_assert_eq!(only_digits(&formatted), format!("{n:014}"));
    }

    #[test]
    fn cep_format_preserves_digits(digits in "[0-9]{0,12}") {
        let expected: String = digits.chars().take(cep::LENGTH).collect();
        prop_assert_eq!(only_digits(&cep::format(&digits)), expected);
    }

    #[test]
    fn fixed_layouts_preserve_digits(digits in "[0-9]{0,50}") {
        let take = |n: usize| digits.chars().take(n).collect::<String>();
        prop_assert_eq!(only_digits(&pis::format(&digits)), take(pis::LENGTH));
        prop_assert_eq!(only_digits(&boleto::format(&digits)), take(boleto::LENGTH));
        prop_assert_eq!(only_digits(&judicial::format(&digits)), take(judicial::LENGTH));
        prop_assert_eq!(only_digits(&phone::format(&digits)), take(phone::MOBILE_LENGTH));
    }

    #[test]
    fn formatted_cpf_stays_valid(base in "[0-9]{9}") {
        prop_assume!(!is_repeated_sequence(&base));
        let number = format!("{base}{}", cpf::check_digits(&base));
        prop_assert!(cpf::is_valid(cpf::format(&number, FormatOptions::default())));
    }

    #[test]
    fn formatted_cnpj_stays_valid(base in "[0-9]{12}") {
        prop_assume!(!is_repeated_sequence(&base));
        let number = format!("{base}{}", cnpj::check_digits(&base));
        prop_assert!(cnpj::is_valid(cnpj::format(&number, FormatOptions::default())));
    }

    #[test]
    fn formatted_pis_stays_valid(base in "[0-9]{10}") {
        prop_assume!(!is_repeated_sequence(&base));
        let number = format!("{base}{}", digit_char(pis::check_digit(&base)));
        prop_assert!(pis::is_valid(pis::format(&number)));
    }

    #[test]
    fn formatted_judicial_process_stays_valid(body in "[0-9]{18}") {
        let dv = mod97_check_digits(&[&body[..7], &body[7..14], &body[14..]]);
        let number = format!("{}{dv:02}{}", &body[..7], &body[7..]);
        prop_assert!(judicial::is_valid(judicial::format(&number)));
    }
}

#[test]
fn formatted_boleto_stays_valid() {
    for line in [
        "00190000090114971860168524522114675860000102656",
        "00190000090000012345567000000009312340000001000",
        "23793380296000000001223456789009395740000010000",
    ] {
        let formatted = boleto::format(line);
        assert!(boleto::is_valid(formatted.as_str()), "{formatted}");
        assert_eq!(only_digits(&formatted), line);
    }
}
