//! # streamcsv
//!
//! A streaming CSV reader and writer that processes input one character at a
//! time.
//!
//! The reader pulls rows lazily from any [`std::io::Read`] stream, handling
//! quoted fields, doubled-quote escapes, and embedded newlines with a single
//! character of look-ahead. The writer produces correctly escaped CSV text
//! on any [`std::io::Write`] sink. Malformed quoting at end of stream is
//! absorbed rather than rejected unless strict mode is enabled.

pub mod error;
pub mod io;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use options::{ReadOptions, WriteOptions};
pub use reader::Reader;
pub use writer::Writer;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default quote character
pub const DEFAULT_QUOTE: char = '"';

/// Default line terminator
pub const DEFAULT_TERMINATOR: &str = "\r\n";
