//! International Standard Number handling for the impress suite
//!
//! Validation, classification, and conversion of bibliographic identifiers:
//! - ISBN-10 and ISBN-13 (books)
//! - ISSN, plus ISSNs carried in a `977` EAN13 (serials)
//! - ISMN (printed music)
//!
//! Every function is pure; nothing here does I/O except
//! [`IsnConfig::load`].
//!
//! ```
//! use impress_isn::{classify, isbn10_to_13, IdentifierType};
//!
//! let isbn13 = isbn10_to_13("0-262-51087-1").unwrap();
//! assert_eq!(isbn13, "9780262510875");
//! assert_eq!(classify(&isbn13).unwrap(), IdentifierType::Isbn13);
//! ```

pub mod canonical;
pub mod checksum;
pub mod config;
pub mod converters;
pub mod error;
pub mod patterns;
pub mod types;
pub mod validators;

pub use canonical::*;
pub use checksum::*;
pub use config::*;
pub use converters::*;
pub use error::*;
pub use types::*;
pub use validators::*;
