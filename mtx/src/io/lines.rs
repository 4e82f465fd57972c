//! Bounded line reader

use super::counter::ByteCounter;
use crate::{Error, Result};
use mtx_core::ErrorKind;
use std::io::{self, BufRead};

/// Splits a buffered stream into numbered text lines
///
/// Line terminators (`\n` or `\r\n`) are stripped. A line longer than the
/// configured maximum fails with `LineTooLong` without buffering the rest of
/// it.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: ByteCounter<R>,
    buf: Vec<u8>,
    max_len: usize,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self {
            inner: ByteCounter::new(inner),
            buf: Vec::new(),
            max_len,
            line: 0,
        }
    }

    /// Number of lines returned so far
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Bytes consumed from the underlying stream
    pub fn bytes_consumed(&self) -> u64 {
        self.inner.total()
    }

    /// Next line and its 1-based number, `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<(usize, &str)>> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::read(e)),
            };

            if available.is_empty() {
                break;
            }
            read_any = true;

            let (chunk, used, done) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (&available[..i], i + 1, true),
                None => (available, available.len(), false),
            };

            // a trailing '\r' is part of the terminator, not the line
            let trailing_cr = match chunk.last() {
                Some(&b) => b == b'\r',
                None => self.buf.last() == Some(&b'\r'),
            };
            let content = self.buf.len() + chunk.len() - usize::from(trailing_cr);
            if content > self.max_len {
                return Err(Error::at_line(ErrorKind::LineTooLong, self.line + 1));
            }

            self.buf.extend_from_slice(chunk);
            self.inner.consume(used);

            if done {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }

        self.line += 1;
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        match std::str::from_utf8(&self.buf) {
            Ok(text) => Ok(Some((self.line, text))),
            Err(_) => Err(Error::at_line(ErrorKind::InputScanError, self.line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, max_len: usize) -> Result<Vec<String>> {
        let mut reader = LineReader::new(input.as_bytes(), max_len);
        let mut lines = Vec::new();
        while let Some((_, line)) = reader.next_line()? {
            lines.push(line.to_owned());
        }
        Ok(lines)
    }

    #[test]
    fn test_splits_lines() {
        assert_eq!(collect("a\nb\r\n\nc", 16).unwrap(), ["a", "b", "", "c"]);
        assert_eq!(collect("a\n", 16).unwrap(), ["a"]);
        assert!(collect("", 16).unwrap().is_empty());
    }

    #[test]
    fn test_line_numbers_and_bytes() {
        let mut reader = LineReader::new(&b"one\ntwo\n"[..], 16);
        assert_eq!(reader.next_line().unwrap(), Some((1, "one")));
        assert_eq!(reader.next_line().unwrap(), Some((2, "two")));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.bytes_consumed(), 8);
    }

    #[test]
    fn test_line_too_long() {
        assert_eq!(collect("abcd\r\n", 4).unwrap(), ["abcd"]);

        let err = collect("ok\nabcde\n", 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LineTooLong);
        assert_eq!(err.line(), Some(2));

        // the limit holds across buffer refills
        let input = std::io::BufReader::with_capacity(2, &b"abcdef"[..]);
        let mut reader = LineReader::new(input, 4);
        assert_eq!(reader.next_line().unwrap_err().kind(), ErrorKind::LineTooLong);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut reader = LineReader::new(&b"\xff\xfe\n"[..], 16);
        assert_eq!(reader.next_line().unwrap_err().kind(), ErrorKind::InputScanError);
    }
}
