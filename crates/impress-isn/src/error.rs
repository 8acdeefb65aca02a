//! Error types for impress-isn
//!
//! Every variant is an invalid-argument condition: the caller passed a
//! string or length outside an operation's domain. Predicates such as
//! [`crate::is_valid_identifier`] never produce these; they return `false`.

use thiserror::Error;

/// Main error type for ISN operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsnError {
    /// Input length is not one the operation accepts
    #[error("unsupported length {length}, expected one of {expected:?}")]
    UnsupportedLength {
        length: usize,
        expected: &'static [usize],
    },

    /// `pad` only targets ISSN (8) and ISBN-10 (10) lengths
    #[error("cannot pad to length {0}, expected 8 or 10")]
    UnsupportedPadLength(usize),

    /// A character the checksum reads is not an ASCII digit
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    /// ISBN-13 prefix must be three digits
    #[error("invalid ISBN-13 prefix: {0:?}")]
    InvalidPrefix(String),

    /// Input failed validation, so it has no type
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Configuration could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for ISN operations
pub type Result<T> = std::result::Result<T, IsnError>;
