//! Property tests for normalization, parsing and formatting.

use assert_matches::assert_matches;
use ibancheck_core::normalize::normalize;
use ibancheck_core::{Iban, IbanError};
use proptest::prelude::*;

const VALID: &[&str] = &[
    "FR7630006000011234567890189",
    "DE89370400440532013000",
    "BE68539007547034",
    "ES9121000418450200051332",
    "NL91ABNA0417164300",
    "GB82WEST12345698765432",
];

/// Lowercase `s` and insert a space before the characters selected by `mask`.
fn scramble(s: &str, mask: &[bool]) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if mask.get(i).copied().unwrap_or(false) {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_removes_every_space(s in any::<String>()) {
        prop_assert!(!normalize(&s).contains(' '));
    }

    #[test]
    fn equality_survives_case_and_spacing(
        index in 0..VALID.len(),
        mask in proptest::collection::vec(any::<bool>(), 34),
    ) {
        let plain = Iban::parse(VALID[index]).unwrap();
        let messy = Iban::parse(&scramble(VALID[index], &mask)).unwrap();
        prop_assert_eq!(plain, messy);
    }

    #[test]
    fn formatted_round_trips(index in 0..VALID.len()) {
        let iban = Iban::parse(VALID[index]).unwrap();
        let formatted = iban.formatted();
        prop_assert_eq!(formatted.replace(' ', ""), iban.as_str());
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
    }

    #[test]
    fn accessors_recompose_canonical(index in 0..VALID.len()) {
        let iban = Iban::parse(VALID[index]).unwrap();
        let joined = format!("{}{}{}", iban.country_code(), iban.check_digits(), iban.bban());
        prop_assert_eq!(joined, iban.as_str());
    }

    #[test]
    fn parse_never_panics(s in any::<String>()) {
        let _ = Iban::parse(&s);
    }

    #[test]
    fn single_digit_change_breaks_checksum(index in 0..VALID.len(), position in 4usize..16, bump in 1u8..10) {
        let original = VALID[index];
        prop_assume!(position < original.len());
        let mut bytes = original.as_bytes().to_vec();
        prop_assume!(bytes[position].is_ascii_digit());
        bytes[position] = b'0' + (bytes[position] - b'0' + bump) % 10;
        let altered = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(Iban::parse(&altered), Err(IbanError::InvalidChecksum));
    }
}

#[test]
fn tab_is_not_handled_whitespace() {
    assert_matches!(Iban::parse("FR76\t3000"), Err(IbanError::InvalidCharacters));
    assert_matches!(
        Iban::parse("FR7630006000011234567890189\n"),
        Err(IbanError::InvalidCharacters)
    );
}

#[test]
fn iban_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Iban>();
    assert_send_sync::<IbanError>();
}
