//! CSV serialization

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;
use crate::options::WriteOptions;

/// Streaming CSV writer.
///
/// Appends one correctly escaped, terminator-ended line per row to the sink.
/// A field is quoted only when it contains the delimiter, the quote
/// character, or a line break; embedded quote characters are doubled. The
/// writer never flushes or closes the sink; that stays with the caller.
pub struct Writer<W> {
    sink: W,
    opts: WriteOptions,
}

impl<W: Write> Writer<W> {
    /// Create a writer with default options (comma delimiter, double quote,
    /// CRLF terminator)
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriteOptions::default())
    }

    pub fn with_options(sink: W, opts: WriteOptions) -> Self {
        Self { sink, opts }
    }

    /// Append one row as a terminated line, fields in iteration order
    pub fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let mut line = String::new();
        for (i, value) in row.into_iter().enumerate() {
            if i > 0 {
                line.push(self.opts.delimiter);
            }
            self.push_field(&mut line, &value.to_string());
        }
        line.push_str(&self.opts.terminator);
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Append one terminated line per row, in order
    pub fn write_rows<I, R, T>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Display,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Append a single field, quoted and escaped if its content requires it
    fn push_field(&self, line: &mut String, field: &str) {
        let needs_quotes = field.contains(self.opts.delimiter)
            || field.contains(self.opts.quote)
            || field.contains('\n')
            || field.contains('\r');

        if needs_quotes {
            line.push(self.opts.quote);
            for ch in field.chars() {
                if ch == self.opts.quote {
                    line.push(self.opts.quote);
                }
                line.push(ch);
            }
            line.push(self.opts.quote);
        } else {
            line.push_str(field);
        }
    }
}
