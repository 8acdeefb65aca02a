//! Canonical forms and zero padding

use crate::config::IsnConfig;
use crate::error::{IsnError, Result};

/// ISSN length, check digit included
pub const ISSN_LENGTH: usize = 8;
/// ISBN-10 length, check digit included
pub const ISBN10_LENGTH: usize = 10;
/// ISBN-13 / EAN13 / ISMN length, check digit included
pub const ISBN13_LENGTH: usize = 13;

/// Strip hyphens and surrounding whitespace.
///
/// Internal whitespace is kept; use [`canonical_form_with`] to drop it too.
///
/// # Examples
/// ```
/// use impress_isn::canonical_form;
/// assert_eq!(canonical_form("978-3-16-148410-0"), "9783161484100");
/// assert_eq!(canonical_form("978140885565 "), "978140885565");
/// ```
pub fn canonical_form(isn: &str) -> String {
    isn.replace('-', "").trim().to_string()
}

/// Canonical form honoring the whitespace policy in `config`.
pub fn canonical_form_with(isn: &str, config: &IsnConfig) -> String {
    if config.strip_internal_whitespace {
        isn.chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect()
    } else {
        canonical_form(isn)
    }
}

/// Left-pad with zeroes to `length`, which must be an ISSN or ISBN-10 length.
///
/// Strings already at or past `length` come back unchanged.
pub fn pad(isn: &str, length: usize) -> Result<String> {
    if length != ISSN_LENGTH && length != ISBN10_LENGTH {
        return Err(IsnError::UnsupportedPadLength(length));
    }

    let missing = length.saturating_sub(isn.chars().count());
    let mut padded = "0".repeat(missing);
    padded.push_str(isn);
    Ok(padded)
}
