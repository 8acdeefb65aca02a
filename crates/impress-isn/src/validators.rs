//! Identifier validation and classification

use tracing::debug;

use crate::canonical::{canonical_form, ISBN10_LENGTH, ISBN13_LENGTH, ISSN_LENGTH};
use crate::checksum::{generate_check, is_valid_mod11};
use crate::error::{IsnError, Result};
use crate::patterns::matches_any;
use crate::types::{IdentifierType, IsnReport};

const ISSN_EAN13_PREFIX: &str = "977";
const ISMN_PREFIX: &str = "9790";
const ISBN13_PREFIX: &str = "978";
const ISBN13_ALT_PREFIX: &str = "979";

/// Check that `isn` has a supported shape and a matching check digit.
///
/// The raw string must match the ISSN, ISBN-10, or EAN13 shape; its
/// canonical length then selects the checksum. Never fails.
///
/// # Examples
/// ```
/// use impress_isn::is_valid_identifier;
/// assert!(is_valid_identifier("0805071660"));
/// assert!(!is_valid_identifier("0805071661"));
/// assert!(is_valid_identifier("2434561X"));
/// ```
pub fn is_valid_identifier(isn: &str) -> bool {
    if !matches_any(isn) {
        debug!(isn, "no identifier shape matched");
        return false;
    }

    let canon = canonical_form(isn);
    match canon.len() {
        ISBN13_LENGTH => match generate_check(&canon) {
            Ok(check) => canon.ends_with(check),
            Err(_) => false,
        },
        ISBN10_LENGTH | ISSN_LENGTH => is_valid_mod11(&canon),
        length => {
            debug!(isn, length, "canonical length has no checksum");
            false
        }
    }
}

/// Identifier type of a valid ISN.
///
/// Fails with [`IsnError::InvalidIdentifier`] when [`is_valid_identifier`]
/// is false. Prefixes are tested most specific first, so an ISMN (`9790`)
/// is never reported as an ISBN-13 (`979`).
pub fn classify(isn: &str) -> Result<IdentifierType> {
    if !is_valid_identifier(isn) {
        return Err(IsnError::InvalidIdentifier(isn.to_string()));
    }

    let canon = canonical_form(isn);
    let kind = if canon.len() == ISSN_LENGTH {
        IdentifierType::Issn
    } else if canon.len() == ISBN10_LENGTH {
        IdentifierType::Isbn10
    } else if canon.starts_with(ISSN_EAN13_PREFIX) {
        IdentifierType::IssnEan13
    } else if canon.starts_with(ISMN_PREFIX) {
        IdentifierType::Ismn
    } else if canon.starts_with(ISBN13_PREFIX) || canon.starts_with(ISBN13_ALT_PREFIX) {
        IdentifierType::Isbn13
    } else {
        IdentifierType::Other
    };
    Ok(kind)
}

/// Everything that can be said about `isn` without failing.
pub fn analyze(isn: &str) -> IsnReport {
    let canonical = canonical_form(isn);
    let valid = is_valid_identifier(isn);
    IsnReport {
        input: isn.to_string(),
        identifier_type: if valid { classify(isn).ok() } else { None },
        check_digit: generate_check(&canonical).ok(),
        canonical,
        valid,
    }
}
