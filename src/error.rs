//! Error types for strict color parsing.
//!
//! The picker itself never surfaces these to the UI: malformed keystrokes
//! are dropped and malformed external values degrade to black. They exist
//! for callers that want to know *why* a value was rejected.

use thiserror::Error;

/// Errors produced by the strict parsing APIs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A hex string is not `#` followed by 3 or 6 hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A channel entry does not start with an integer.
    #[error("invalid channel value: {0:?}")]
    InvalidChannel(String),

    /// A channel array does not hold exactly three values.
    #[error("expected 3 color channels, got {0}")]
    ChannelCount(usize),

    /// A channel array holds NaN or an infinity.
    #[error("color channel {index} is not a finite number")]
    NonFiniteChannel {
        /// Position of the offending channel.
        index: usize,
    },
}
