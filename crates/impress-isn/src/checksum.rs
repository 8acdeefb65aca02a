//! Check digit computation and verification
//!
//! Two families:
//! - modulo 11 (ISBN-10, ISSN): weights count down to 1 from the full
//!   length, and a remainder of 10 is written as `X`
//! - modulo 10 (ISBN-13, EAN13, ISMN): alternating weights 1 and 3 over a
//!   12 digit body, never `X`

use tracing::trace;

use crate::canonical::{ISBN10_LENGTH, ISBN13_LENGTH, ISSN_LENGTH};
use crate::error::{IsnError, Result};

/// Lengths accepted by [`generate_check`]
pub const CHECKABLE_LENGTHS: &[usize] = &[7, 8, 9, 10, 12, 13];

const MOD10_BODY_LENGTH: usize = ISBN13_LENGTH - 1;

fn digit_value(c: char, position: usize) -> Result<u32> {
    c.to_digit(10)
        .ok_or(IsnError::NonDigit { position, found: c })
}

fn check_char(value: u32) -> char {
    if value == 10 {
        'X'
    } else {
        char::from_digit(value, 10).unwrap_or('0')
    }
}

/// Verify a complete ISSN (8) or ISBN-10 (10) with the running accumulator.
///
/// `t` collects the digits seen so far and `s` collects every `t`, so the
/// digit at position `i` ends up counted `length - i` times without any
/// multiplication. Only the final character may be `X`/`x`.
pub fn is_valid_mod11(isn: &str) -> bool {
    let chars: Vec<char> = isn.chars().collect();
    let length = chars.len();
    if length != ISSN_LENGTH && length != ISBN10_LENGTH {
        trace!(length, "modulo 11 check needs 8 or 10 characters");
        return false;
    }

    let mut s = 0u32;
    let mut t = 0u32;
    for &c in &chars[..length - 1] {
        match c.to_digit(10) {
            Some(d) => t += d,
            None => return false,
        }
        s += t;
    }

    let last = match chars[length - 1] {
        'X' | 'x' => 10,
        c => match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        },
    };
    t += last;
    s += t;

    s % 11 == 0
}

/// Modulo 11 check digit for an ISSN or ISBN-10 body.
///
/// The target length is `body.len()` rounded up to even, so 7 and 8
/// characters both yield an ISSN check digit and 9 and 10 an ISBN-10 one.
/// Only the first `target - 1` characters are read; an existing check digit
/// is ignored.
pub fn mod11_check_digit(body: &str) -> Result<char> {
    let chars: Vec<char> = body.chars().collect();
    let length = chars.len();
    if !(ISSN_LENGTH - 1..=ISBN10_LENGTH).contains(&length) {
        return Err(IsnError::UnsupportedLength {
            length,
            expected: &[7, 8, 9, 10],
        });
    }

    let target = length.div_ceil(2) * 2;
    let mut sum = 0u32;
    for (i, &c) in chars.iter().take(target - 1).enumerate() {
        sum += digit_value(c, i)? * (target - i) as u32;
    }

    Ok(check_char((11 - sum % 11) % 11))
}

/// Modulo 10 check digit over the first 12 characters of an EAN13 body.
pub fn mod10_check_digit(body: &str) -> Result<char> {
    let chars: Vec<char> = body.chars().collect();
    let length = chars.len();
    if length != MOD10_BODY_LENGTH && length != ISBN13_LENGTH {
        return Err(IsnError::UnsupportedLength {
            length,
            expected: &[12, 13],
        });
    }

    let mut odd = 0u32;
    let mut even = 0u32;
    for (i, &c) in chars.iter().take(MOD10_BODY_LENGTH).enumerate() {
        let d = digit_value(c, i)?;
        if i % 2 == 1 {
            odd += d;
        } else {
            even += d;
        }
    }

    Ok(check_char((10 - (odd * 3 + even) % 10) % 10))
}

/// Check digit for a body, with or without its existing check digit.
///
/// Lengths 12 and 13 use modulo 10; 7 through 10 use modulo 11.
///
/// # Examples
/// ```
/// use impress_isn::generate_check;
/// assert_eq!(generate_check("978140885565").unwrap(), '2');
/// assert_eq!(generate_check("2434561").unwrap(), 'X');
/// assert!(generate_check("12345").is_err());
/// ```
pub fn generate_check(isn: &str) -> Result<char> {
    let length = isn.chars().count();
    match length {
        12 | 13 => mod10_check_digit(isn),
        7..=10 => mod11_check_digit(isn),
        _ => Err(IsnError::UnsupportedLength {
            length,
            expected: CHECKABLE_LENGTHS,
        }),
    }
}
