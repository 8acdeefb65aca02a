//! ISN validation, classification, and conversion integration tests

use impress_isn::{
    analyze, canonical_form, classify, generate_check, is_valid_identifier, isbn10_to_13,
    isbn10_to_13_with_prefix, issn_from_ean13, pad, recover_leading_zeroes, IdentifierType,
    IsnError,
};
use proptest::prelude::*;
use rstest::rstest;

// === Validation ===

#[rstest]
#[case("9781408855652")]
#[case("978-0805071665")]
#[case("978-0-321-12521-7")]
#[case("0805071660")]
#[case("0-306-40615-2")]
#[case("080442957X")]
#[case("00014664")]
#[case("2434-561X")]
#[case("2434561x")]
#[case("9772434561006")]
#[case("9790260000438")]
fn test_valid_identifiers(#[case] isn: &str) {
    assert!(is_valid_identifier(isn), "{} should be valid", isn);
}

#[rstest]
#[case("0805071661")] // check digit off by one
#[case("0-8-0-5-0-7-1-6-6-1")] // too many hyphens for any shape
#[case("978-0-321-12521-8")]
#[case("2434561Y")]
#[case("12345")]
#[case("")]
#[case("ISSN 2434-561X")]
fn test_invalid_identifiers(#[case] isn: &str) {
    assert!(!is_valid_identifier(isn), "{} should be invalid", isn);
}

#[test]
fn test_transposition_is_caught() {
    assert!(is_valid_identifier("0306406152"));
    assert!(!is_valid_identifier("0360406152"));
    assert!(!is_valid_identifier("0306401652"));
}

// === Check digits ===

#[test]
fn test_x_check_digit_body_and_full_agree() {
    assert_eq!(generate_check("2434561").unwrap(), 'X');
    assert_eq!(generate_check("2434561X").unwrap(), 'X');
}

#[rstest]
#[case("123456")]
#[case("12345678901")]
#[case("12345678901234")]
fn test_generate_check_rejects_length(#[case] body: &str) {
    assert!(matches!(
        generate_check(body),
        Err(IsnError::UnsupportedLength { .. })
    ));
}

// === Classification ===

#[rstest]
#[case("00014664", IdentifierType::Issn)]
#[case("2434-561X", IdentifierType::Issn)]
#[case("0805071660", IdentifierType::Isbn10)]
#[case("9780262510875", IdentifierType::Isbn13)]
#[case("9790260000438", IdentifierType::Ismn)]
#[case("9772434561006", IdentifierType::IssnEan13)]
fn test_classify(#[case] isn: &str, #[case] expected: IdentifierType) {
    assert_eq!(classify(isn).unwrap(), expected);
}

#[test]
fn test_ismn_is_not_isbn13() {
    assert_ne!(classify("9790260000438").unwrap(), IdentifierType::Isbn13);
}

#[test]
fn test_classify_invalid_is_error_not_other() {
    assert!(matches!(
        classify("0805071661"),
        Err(IsnError::InvalidIdentifier(_))
    ));
}

// === Conversion ===

#[test]
fn test_isbn10_to_13() {
    assert_eq!(isbn10_to_13("0262510871").unwrap(), "9780262510875");
    assert_eq!(
        isbn10_to_13_with_prefix("978", "0262510871").unwrap(),
        "9780262510875"
    );
}

#[test]
fn test_issn_from_ean13() {
    assert_eq!(issn_from_ean13("9772434561006"), "2434561X");
    assert_eq!(issn_from_ean13("1234567890123"), "1234567890123");
}

#[test]
fn test_issn_from_ean13_round_trips_through_validation() {
    let issn = issn_from_ean13("9772434561006");
    assert!(is_valid_identifier(&issn));
    assert_eq!(classify(&issn).unwrap(), IdentifierType::Issn);
}

#[test]
fn test_pad() {
    assert_eq!(pad("14664", 8).unwrap().len(), 8);
    assert_eq!(pad("14664", 10).unwrap().len(), 10);
    assert_eq!(pad("14664", 8).unwrap(), "00014664");
    assert_eq!(pad("14664", 10).unwrap(), "0000014664");
    assert_eq!(pad("14664", 13), Err(IsnError::UnsupportedPadLength(13)));
}

#[test]
fn test_recover_leading_zeroes() {
    assert!(recover_leading_zeroes("306406152", IdentifierType::Isbn10));
    assert!(recover_leading_zeroes("14664", IdentifierType::Issn));
    assert!(!recover_leading_zeroes("4664", IdentifierType::Issn));
    assert!(!recover_leading_zeroes("14664", IdentifierType::Ismn));
}

// === Analysis ===

#[test]
fn test_analyze_serializes() {
    let report = analyze("2434-561X");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["canonical"], "2434561X");
    assert_eq!(json["valid"], true);
    assert_eq!(json["identifier_type"], "ISSN");
    assert_eq!(json["check_digit"], "X");
}

// === Properties ===

proptest! {
    #[test]
    fn test_canonical_form_idempotent(s in any::<String>()) {
        let once = canonical_form(&s);
        prop_assert_eq!(canonical_form(&once), once);
    }

    #[test]
    fn test_isbn10_to_13_classifies_as_isbn13(body in "[0-9]{9}") {
        let check = generate_check(&body).unwrap();
        let isbn10 = format!("{}{}", body, check);
        prop_assert!(is_valid_identifier(&isbn10));

        let isbn13 = isbn10_to_13(&isbn10).unwrap();
        prop_assert!(is_valid_identifier(&isbn13));
        prop_assert_eq!(classify(&isbn13).unwrap(), IdentifierType::Isbn13);
    }

    #[test]
    fn test_generated_check_makes_valid_identifier(body in "[0-9]{7}|[0-9]{9}|[0-9]{12}") {
        let check = generate_check(&body).unwrap();
        let full = format!("{}{}", body, check);
        prop_assert!(is_valid_identifier(&full), "{} should be valid", full);
        prop_assert_eq!(generate_check(&full).unwrap(), check);
    }

    #[test]
    fn test_mod10_never_yields_x(body in "[0-9]{12}") {
        prop_assert_ne!(generate_check(&body).unwrap(), 'X');
    }

    #[test]
    fn test_hyphenated_issn_agrees_with_plain(body in "[0-9]{7}") {
        let check = generate_check(&body).unwrap();
        let plain = format!("{}{}", body, check);
        let hyphenated = format!("{}-{}{}", &body[..4], &body[4..], check);
        prop_assert!(is_valid_identifier(&plain));
        prop_assert!(is_valid_identifier(&hyphenated));
        prop_assert_eq!(classify(&hyphenated).unwrap(), IdentifierType::Issn);
    }

    #[test]
    fn test_stripped_zeroes_recover(digits in "[1-9][0-9]{1,5}") {
        let body = format!("{:0>7}", digits);
        let check = generate_check(&body).unwrap();
        let issn = format!("{}{}", body, check);
        let stripped = issn.trim_start_matches('0');
        prop_assert!(recover_leading_zeroes(stripped, IdentifierType::Issn));
    }
}
