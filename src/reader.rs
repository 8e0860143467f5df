//! Streaming CSV parser

use std::io::Read;

use log::trace;

use crate::error::{Error, Result};
use crate::io::CharReader;
use crate::options::ReadOptions;

/// Streaming CSV reader.
///
/// Pulls characters from the underlying stream one at a time and yields rows
/// as `Vec<String>` through [`Iterator`]. Reads exactly as many characters
/// as each row requires, with at most one character of look-ahead. The
/// sequence is finite and non-restartable; once the stream is exhausted the
/// iterator stays exhausted.
///
/// Quoting follows the conventional dialect: a field wrapped in quote
/// characters may contain the delimiter, newlines, and doubled quote
/// characters (each pair decodes to one literal quote). A quote left open at
/// end of stream returns the accumulated content as-is, unless
/// [`ReadOptions::strict`] is set, in which case it is reported as
/// [`Error::TruncatedQuotedField`].
pub struct Reader<R> {
    input: CharReader<R>,
    opts: ReadOptions,
    done: bool,
}

impl<R: Read> Reader<R> {
    /// Create a reader with default options (comma delimiter, double quote)
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReadOptions::default())
    }

    pub fn with_options(inner: R, opts: ReadOptions) -> Self {
        Self {
            input: CharReader::new(inner),
            opts,
            done: false,
        }
    }

    /// Parse one row, or `None` when the stream ends with no partial row
    /// pending
    fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        loop {
            let ch = match self.input.next_char()? {
                Some(ch) => ch,
                None => {
                    self.done = true;
                    if in_quotes && self.opts.strict {
                        return Err(Error::TruncatedQuotedField);
                    }
                    if !field.is_empty() || !row.is_empty() {
                        row.push(field);
                        return Ok(Some(row));
                    }
                    return Ok(None);
                }
            };

            if ch == self.opts.quote {
                if !in_quotes {
                    in_quotes = true;
                } else {
                    // Only the next character tells an escaped quote apart
                    // from the end of the quoted section.
                    match self.input.next_char()? {
                        Some(next) if next == self.opts.quote => field.push(self.opts.quote),
                        Some(next) => {
                            // Not part of the quoted section; re-dispatch it
                            // as an ordinary character.
                            in_quotes = false;
                            self.input.push_back(next);
                        }
                        None => {
                            self.done = true;
                            row.push(field);
                            return Ok(Some(row));
                        }
                    }
                }
                continue;
            }

            if in_quotes {
                field.push(ch);
                continue;
            }

            if ch == self.opts.delimiter {
                row.push(std::mem::take(&mut field));
            } else if ch == '\n' {
                row.push(field);
                return Ok(Some(row));
            } else if ch == '\r' {
                // CRLF counts as one terminator, as does CR at end of
                // stream; CR followed by anything else was not a terminator
                // for that character, so it stays in the field.
                match self.input.next_char()? {
                    Some('\n') | None => {}
                    Some(next) => field.push(next),
                }
                row.push(field);
                return Ok(Some(row));
            } else {
                field.push(ch);
            }
        }
    }
}

impl<R: Read> Iterator for Reader<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_row() {
            Ok(Some(row)) => {
                trace!("row complete, {} fields", row.len());
                Some(Ok(row))
            }
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
