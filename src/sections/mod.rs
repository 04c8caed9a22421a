//! Check sections
//!
//! Each section enforces one phase of a check. They run in a fixed order
//! and the first failing section ends the check.

mod characters;
mod complexity;
mod length;
mod sequence;

pub use characters::{character_section, GroupCounts};
pub use complexity::complexity_section;
pub use length::length_section;
pub use sequence::sequence_section;

use thiserror::Error;

/// Why a check failed. The `Display` text is what gets recorded in the
/// diagnostics log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Input length {length} is less than min length {min}")]
    TooShort { length: usize, min: i64 },
    #[error("Input length {length} is not below max length {max}")]
    TooLong { length: usize, max: i64 },
    #[error("Number {0} found, but numbers aren't allowed")]
    NumberNotAllowed(char),
    #[error("Found whitespace {0}, but whitespaces aren't allowed")]
    WhitespaceNotAllowed(&'static str),
    #[error("Found symbol {0}, but symbols aren't allowed")]
    SymbolNotAllowed(char),
    #[error("Input contained disallowed sequence {0}")]
    DisallowedSequence(String),
    #[error("Complexity requirements weren't met: needed {required} groups, but had {met}")]
    ComplexityNotMet { required: i64, met: i64 },
}

/// Result type for section functions.
/// - `Ok(value)` - Section passed
/// - `Err(rejection)` - Check fails here
pub type SectionResult<T = ()> = Result<T, Rejection>;
