//! Error type shared by parsing, construction and generation.

use thiserror::Error;

/// Errors returned by fallible operations of this crate.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The string is not a UUID representation accepted by the parser.
    #[error("invalid string representation: {0:?}")]
    InvalidFormat(String),

    /// Field values do not agree with each other or with the requested variant.
    #[error("invalid fields: {0}")]
    InvalidFields(&'static str),

    /// A decimal string is negative or exceeds 2^128 - 1.
    #[error("integer out of 128-bit unsigned range")]
    OutOfRange,

    /// A calendar time cannot be expressed as a 60-bit Gregorian timestamp.
    #[error("timestamp out of range")]
    TimestampOutOfRange,

    /// The UUID does not carry the information requested.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The random number generator failed to supply bytes.
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

/// Error parsing an invalid string representation of UUID.
pub type ParseError = Error;

impl From<rand::Error> for Error {
    fn from(src: rand::Error) -> Self {
        Self::RandomSourceUnavailable(src.to_string())
    }
}
