//! Reader and writer configuration

use crate::{DEFAULT_DELIMITER, DEFAULT_QUOTE, DEFAULT_TERMINATOR};

/// Options for reading CSV streams
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: char,
    /// Quote character (default: double quote)
    pub quote: char,
    /// Report an unterminated quoted field at end of stream as an error
    /// instead of returning the accumulated content (default: off)
    pub strict: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            strict: false,
        }
    }
}

/// Options for writing CSV streams
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: char,
    /// Quote character (default: double quote)
    pub quote: char,
    /// Line terminator appended after each row (default: CRLF)
    pub terminator: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}
