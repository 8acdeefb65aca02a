//! Identifier type tags and analysis records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier family of a validated ISN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    #[serde(rename = "ISSN")]
    Issn,
    #[serde(rename = "ISBN10")]
    Isbn10,
    #[serde(rename = "ISBN13")]
    Isbn13,
    #[serde(rename = "ISMN")]
    Ismn,
    #[serde(rename = "ISSNEAN13")]
    IssnEan13,
    #[serde(rename = "OTHER")]
    Other,
}

impl IdentifierType {
    /// All identifier types, in declaration order
    pub const ALL: [IdentifierType; 6] = [
        IdentifierType::Issn,
        IdentifierType::Isbn10,
        IdentifierType::Isbn13,
        IdentifierType::Ismn,
        IdentifierType::IssnEan13,
        IdentifierType::Other,
    ];

    /// Display name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Issn => "ISSN",
            IdentifierType::Isbn10 => "ISBN10",
            IdentifierType::Isbn13 => "ISBN13",
            IdentifierType::Ismn => "ISMN",
            IdentifierType::IssnEan13 => "ISSNEAN13",
            IdentifierType::Other => "OTHER",
        }
    }

    /// Canonical length of identifiers of this type
    pub fn canonical_length(&self) -> Option<usize> {
        match self {
            IdentifierType::Issn => Some(8),
            IdentifierType::Isbn10 => Some(10),
            IdentifierType::Isbn13 | IdentifierType::Ismn | IdentifierType::IssnEan13 => Some(13),
            IdentifierType::Other => None,
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown identifier type: {}", s))
    }
}

/// Summary of what is known about a raw identifier string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsnReport {
    pub input: String,
    pub canonical: String,
    pub valid: bool,
    pub identifier_type: Option<IdentifierType>,
    /// Check digit computed from the canonical body, when its length is supported
    pub check_digit: Option<char>,
}
