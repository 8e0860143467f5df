//! Codec error types

use thiserror::Error as ThisError;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing CSV streams
#[derive(Debug, ThisError)]
pub enum Error {
    /// I/O error on the underlying stream, propagated unmodified
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not valid UTF-8
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: u64 },

    /// End of stream inside a quoted field (strict mode only)
    #[error("unterminated quoted field at end of stream")]
    TruncatedQuotedField,
}
