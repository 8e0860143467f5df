//! Character-level input with one slot of push-back
//!
//! The parser disambiguates a closing quote and a carriage-return terminator
//! by reading one character past the current position. `CharReader` keeps
//! that character in a single push-back slot so the state machine never has
//! to unread from the underlying stream.

use std::io::{ErrorKind, Read};

use crate::error::{Error, Result};

/// Decodes one UTF-8 scalar value at a time from a byte stream
pub struct CharReader<R> {
    inner: R,
    pushed_back: Option<char>,
    offset: u64,
}

impl<R: Read> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: None,
            offset: 0,
        }
    }

    /// Byte offset of the next character to be decoded
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Return a character to the reader; the next `next_char` yields it.
    ///
    /// The slot holds one character. Pushing while it is occupied is a logic
    /// error in the caller.
    pub fn push_back(&mut self, ch: char) {
        debug_assert!(self.pushed_back.is_none(), "push-back slot occupied");
        self.pushed_back = Some(ch);
    }

    /// Read the next character, or `None` at end of stream
    pub fn next_char(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.pushed_back.take() {
            return Ok(Some(ch));
        }

        let start = self.offset;
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let width = utf8_width(first);
        if width == 0 {
            return Err(Error::InvalidUtf8 { offset: start });
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = match self.read_byte()? {
                Some(b) => b,
                None => return Err(Error::InvalidUtf8 { offset: start }),
            };
        }

        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(Error::InvalidUtf8 { offset: start }),
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Length in bytes of a UTF-8 sequence given its first byte; 0 if the byte
/// cannot start a sequence
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ascii_stream() {
        let mut r = CharReader::new(Cursor::new("a,b"));
        assert_eq!(r.next_char().unwrap(), Some('a'));
        assert_eq!(r.next_char().unwrap(), Some(','));
        assert_eq!(r.next_char().unwrap(), Some('b'));
        assert_eq!(r.next_char().unwrap(), None);
        // EOF is sticky
        assert_eq!(r.next_char().unwrap(), None);
        assert_eq!(r.offset(), 3);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut r = CharReader::new(Cursor::new("é,日"));
        assert_eq!(r.next_char().unwrap(), Some('é'));
        assert_eq!(r.next_char().unwrap(), Some(','));
        assert_eq!(r.next_char().unwrap(), Some('日'));
        assert_eq!(r.next_char().unwrap(), None);
    }

    #[test]
    fn test_push_back_round() {
        let mut r = CharReader::new(Cursor::new("xy"));
        assert_eq!(r.next_char().unwrap(), Some('x'));
        r.push_back('x');
        assert_eq!(r.next_char().unwrap(), Some('x'));
        assert_eq!(r.next_char().unwrap(), Some('y'));
    }

    #[test]
    fn test_invalid_utf8_reports_offset() {
        let mut r = CharReader::new(Cursor::new(&b"a\xff"[..]));
        assert_eq!(r.next_char().unwrap(), Some('a'));
        match r.next_char() {
            Err(Error::InvalidUtf8 { offset }) => assert_eq!(offset, 1),
            other => panic!("expected InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_sequence_is_invalid() {
        // First byte promises two bytes, stream ends after one
        let mut r = CharReader::new(Cursor::new(&b"\xc3"[..]));
        assert!(matches!(
            r.next_char(),
            Err(Error::InvalidUtf8 { offset: 0 })
        ));
    }
}
