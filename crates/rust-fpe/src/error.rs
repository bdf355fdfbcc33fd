//! Error kinds returned by the FPE library.
//!
//! Every fallible operation in this crate returns [`crate::result::Result`],
//! and every error is one of the variants below -- callers can match on the
//! kind instead of parsing a message, unlike the ad hoc string errors this
//! crate grew out of.

/// Errors returned by the FPE library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying block cipher rejected the key length.
    #[error("invalid key length: expected 16, 24, or 32 bytes, got {actual}")]
    Key { actual: usize },

    /// The radix is outside `[2, 2^16]`, or doesn't match an alphabet/processor.
    #[error("{reason}")]
    Radix { reason: String },

    /// A numeral string or credit-card digit count is outside the bounds
    /// allowed for the algorithm.
    #[error("{reason}")]
    Length { reason: String },

    /// The tweak length is invalid for the algorithm in use.
    #[error("{reason}")]
    Tweak { reason: String },

    /// A duplicate symbol was found while building an alphabet, or a
    /// symbol wasn't found in the alphabet during translation.
    #[error("{reason}")]
    Alphabet { reason: String },

    /// An internal numeral-string invariant was violated (decoded digit
    /// out of range for the radix). Should be unreachable for any input
    /// that passed the public validation functions.
    #[error("{reason}")]
    Codec { reason: String },
}

impl Error {
    pub(crate) fn key(actual: usize) -> Self {
        Error::Key { actual }
    }

    pub(crate) fn radix(reason: impl Into<String>) -> Self {
        Error::Radix { reason: reason.into() }
    }

    pub(crate) fn length(reason: impl Into<String>) -> Self {
        Error::Length { reason: reason.into() }
    }

    pub(crate) fn tweak(reason: impl Into<String>) -> Self {
        Error::Tweak { reason: reason.into() }
    }

    pub(crate) fn alphabet(reason: impl Into<String>) -> Self {
        Error::Alphabet { reason: reason.into() }
    }

    pub(crate) fn codec(reason: impl Into<String>) -> Self {
        Error::Codec { reason: reason.into() }
    }
}
