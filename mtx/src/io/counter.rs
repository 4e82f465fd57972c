//! Byte counting stream decorator

use std::io::{self, BufRead, Read, Write};

/// Wraps a stream and tallies the bytes passing through it
///
/// Reads count bytes returned by `read`, buffered reads count bytes passed to
/// `consume`, writes count bytes accepted by `write`. Mixing `read` and
/// `consume` on one counter counts the same bytes twice.
#[derive(Debug)]
pub struct ByteCounter<T> {
    inner: T,
    total: u64,
}

impl<T> ByteCounter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, total: 0 }
    }

    /// Bytes counted so far
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }
}

impl<R: Read> Read for ByteCounter<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.total += n as u64;
        Ok(n)
    }
}

impl<R: BufRead> BufRead for ByteCounter<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.total += amt as u64;
    }
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.total += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
