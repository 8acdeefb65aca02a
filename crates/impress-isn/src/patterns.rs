//! Structural shapes of raw identifiers
//!
//! These are matched against the raw input before canonicalization, so they
//! bound how many hyphens an identifier may carry as well as its digits.
//! Digits are ASCII only; `\d` would admit other Unicode digits.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 4 digits, optional hyphen, 3 digits, digit or X
    static ref ISSN_PATTERN: Regex = Regex::new(r"^[0-9]{4}-?[0-9]{3}[0-9xX]$").unwrap();

    // 9-13 digits/hyphens, then digit or X
    static ref ISBN10_PATTERN: Regex = Regex::new(r"^[0-9-]{9,13}[0-9xX]$").unwrap();

    // 977/978/979, 9-13 digits/hyphens, final digit (never X)
    static ref EAN13_PATTERN: Regex = Regex::new(r"^97[789][0-9-]{9,13}[0-9]$").unwrap();
}

/// Raw string has the shape of an ISSN
pub fn matches_issn(raw: &str) -> bool {
    ISSN_PATTERN.is_match(raw)
}

/// Raw string has the shape of an ISBN-10
pub fn matches_isbn10(raw: &str) -> bool {
    ISBN10_PATTERN.is_match(raw)
}

/// Raw string has the shape of an EAN13 (ISBN-13, ISMN, or ISSN-as-EAN13)
pub fn matches_ean13(raw: &str) -> bool {
    EAN13_PATTERN.is_match(raw)
}

/// Raw string has any of the supported shapes
pub fn matches_any(raw: &str) -> bool {
    matches_issn(raw) || matches_isbn10(raw) || matches_ean13(raw)
}
