//! Error types for lzwrs

use std::io;
use thiserror::Error;

/// Main error type for lzwrs operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// IO error occurred while reading the source or writing the sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A code does not fit the width of the code stream it was written to
    #[error("Code {code} does not fit in {width} bits")]
    CodeOverflow { code: u32, width: u32 },

    /// The decoder received a code it cannot resolve
    #[error("Invalid code {0}: not in dictionary and no previous string to extend")]
    InvalidCode(u32),

    /// A code was written after the stream was finalized
    #[error("Code stream already finalized")]
    Finalized,

    /// Unknown code stream strategy name
    #[error("Unknown code stream strategy: {0}")]
    UnknownStrategy(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Broken internal invariant
    #[error("Internal error (this is a bug): {0}")]
    Internal(String),
}

/// Result type alias for lzwrs operations
pub type Result<T> = std::result::Result<T, LzwError>;
