//! Conversions between related identifier forms

use tracing::debug;

use crate::canonical::{canonical_form, pad, ISBN10_LENGTH, ISSN_LENGTH};
use crate::checksum::{is_valid_mod11, mod10_check_digit, mod11_check_digit};
use crate::error::{IsnError, Result};
use crate::patterns::matches_ean13;
use crate::types::IdentifierType;

/// Prefix used by [`isbn10_to_13`]
pub const DEFAULT_ISBN13_PREFIX: &str = "978";

const ISSN_EAN13_PREFIX: &str = "977";

/// Convert an ISBN-10 to ISBN-13 under the `978` prefix.
///
/// # Examples
/// ```
/// use impress_isn::isbn10_to_13;
/// assert_eq!(isbn10_to_13("0262510871").unwrap(), "9780262510875");
/// ```
pub fn isbn10_to_13(isbn10: &str) -> Result<String> {
    isbn10_to_13_with_prefix(DEFAULT_ISBN13_PREFIX, isbn10)
}

/// Convert an ISBN-10 to ISBN-13 under `prefix`.
///
/// The ISBN-10 check digit is dropped without being verified; validate
/// first if the input may be mistyped.
pub fn isbn10_to_13_with_prefix(prefix: &str, isbn10: &str) -> Result<String> {
    if !is_isbn13_prefix(prefix) {
        return Err(IsnError::InvalidPrefix(prefix.to_string()));
    }

    let canon = canonical_form(isbn10);
    let length = canon.chars().count();
    if length != ISBN10_LENGTH {
        return Err(IsnError::UnsupportedLength {
            length,
            expected: &[ISBN10_LENGTH],
        });
    }

    let mut isbn13: String = prefix.to_string();
    isbn13.extend(canon.chars().take(ISBN10_LENGTH - 1));
    let check = mod10_check_digit(&isbn13)?;
    isbn13.push(check);
    Ok(isbn13)
}

/// Three ASCII digits
pub(crate) fn is_isbn13_prefix(prefix: &str) -> bool {
    prefix.len() == 3 && prefix.bytes().all(|b| b.is_ascii_digit())
}

/// Extract the ISSN carried by an EAN13.
///
/// Input that neither has the EAN13 shape nor starts with `977` comes back
/// unchanged, as does input too short to hold an ISSN body or whose body is
/// not all digits.
///
/// # Examples
/// ```
/// use impress_isn::issn_from_ean13;
/// assert_eq!(issn_from_ean13("9772434561006"), "2434561X");
/// assert_eq!(issn_from_ean13("1234567890123"), "1234567890123");
/// ```
pub fn issn_from_ean13(ean: &str) -> String {
    if !(matches_ean13(ean) || ean.starts_with(ISSN_EAN13_PREFIX)) {
        debug!(ean, "not an EAN13, passing through");
        return ean.to_string();
    }

    let canon = canonical_form(ean);
    let body: String = canon.chars().skip(3).take(ISSN_LENGTH - 1).collect();
    if body.chars().count() != ISSN_LENGTH - 1 {
        debug!(ean, "EAN13 too short to hold an ISSN");
        return ean.to_string();
    }

    match mod11_check_digit(&body) {
        Ok(check) => format!("{}{}", body, check),
        Err(err) => {
            debug!(ean, %err, "EAN13 body is not an ISSN");
            ean.to_string()
        }
    }
}

/// Whether `isn` validates once its lost leading zeroes are restored.
///
/// Only ISSN and ISBN-10 can lose zeroes this way; other types, and input
/// already longer than the type allows, give `false`.
pub fn recover_leading_zeroes(isn: &str, isn_type: IdentifierType) -> bool {
    let length = match isn_type {
        IdentifierType::Issn => ISSN_LENGTH,
        IdentifierType::Isbn10 => ISBN10_LENGTH,
        _ => return false,
    };

    match pad(&canonical_form(isn), length) {
        Ok(padded) if padded.chars().count() == length => is_valid_mod11(&padded),
        _ => false,
    }
}
