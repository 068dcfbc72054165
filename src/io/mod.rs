//! I/O layer: raw symbol streams and framed code streams
//!
//! - [`symbol`] - verbatim byte input and output
//! - [`code`] - the four interchangeable code stream strategies

pub mod code;
pub mod symbol;

pub use code::{
    AdaptiveCodeReader, AdaptiveCodeWriter, CodeReader, CodeStreamReader, CodeStreamWriter,
    CodeWriter, Fixed16CodeReader, Fixed16CodeWriter, FixedWidthCodeReader, FixedWidthCodeWriter,
    TextCodeReader, TextCodeWriter,
};
pub use symbol::{SymbolReader, SymbolWriter};

use std::io::{self, Read};

/// Read a single byte, returning `None` once the source is exhausted.
///
/// Interrupted reads are retried; every other error propagates.
pub(crate) fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Source that fails once with `Interrupted` before yielding data.
    struct Flaky {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_read_byte_until_exhausted() {
        let mut src = Cursor::new(vec![0x00, 0xFF]);
        assert_eq!(read_byte(&mut src).unwrap(), Some(0x00));
        assert_eq!(read_byte(&mut src).unwrap(), Some(0xFF));
        assert_eq!(read_byte(&mut src).unwrap(), None);
        assert_eq!(read_byte(&mut src).unwrap(), None);
    }

    #[test]
    fn test_read_byte_retries_interrupted() {
        let mut src = Flaky {
            interrupted: false,
            inner: Cursor::new(vec![42]),
        };
        assert_eq!(read_byte(&mut src).unwrap(), Some(42));
    }
}
