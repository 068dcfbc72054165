//! Raw symbol streams
//!
//! Symbols are plain bytes. Nothing is interpreted or skipped: `0x00`,
//! newlines and whitespace pass through exactly like any other value.

use super::read_byte;
use crate::error::Result;
use std::io::{Read, Write};

/// Byte-at-a-time reader over the uncompressed input
pub struct SymbolReader<R: Read> {
    reader: R,
    symbols_read: u64,
}

impl<R: Read> SymbolReader<R> {
    /// Create a new symbol reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            symbols_read: 0,
        }
    }

    /// Read the next symbol, or `None` at end of input
    pub fn read_symbol(&mut self) -> Result<Option<u8>> {
        let symbol = read_byte(&mut self.reader)?;
        if symbol.is_some() {
            self.symbols_read += 1;
        }
        Ok(symbol)
    }

    /// Number of symbols returned so far
    pub fn symbols_read(&self) -> u64 {
        self.symbols_read
    }

    /// Get the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Writer for decoded symbol sequences
pub struct SymbolWriter<W: Write> {
    writer: W,
    symbols_written: u64,
}

impl<W: Write> SymbolWriter<W> {
    /// Create a new symbol writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            symbols_written: 0,
        }
    }

    /// Append a sequence of symbols verbatim
    pub fn write_symbols(&mut self, symbols: &[u8]) -> Result<()> {
        self.writer.write_all(symbols)?;
        self.symbols_written += symbols.len() as u64;
        Ok(())
    }

    /// Number of symbols written so far
    pub fn symbols_written(&self) -> u64 {
        self.symbols_written
    }

    /// Flush the writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_every_byte_value() {
        let data: Vec<u8> = (0..=255u8).collect();
        let mut reader = SymbolReader::new(Cursor::new(data.clone()));
        let mut seen = Vec::new();
        while let Some(b) = reader.read_symbol().unwrap() {
            seen.push(b);
        }
        assert_eq!(seen, data);
        assert_eq!(reader.symbols_read(), 256);
    }

    #[test]
    fn test_whitespace_is_not_skipped() {
        let data = b" \t\n\r\0 x".to_vec();
        let mut reader = SymbolReader::new(Cursor::new(data.clone()));
        let mut seen = Vec::new();
        while let Some(b) = reader.read_symbol().unwrap() {
            seen.push(b);
        }
        assert_eq!(seen, data);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = SymbolReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.read_symbol().unwrap(), None);
        assert_eq!(reader.symbols_read(), 0);
    }

    #[test]
    fn test_write_symbols_verbatim() {
        let mut buf = Vec::new();
        {
            let mut writer = SymbolWriter::new(&mut buf);
            writer.write_symbols(b"AB").unwrap();
            writer.write_symbols(&[0, 10, 255]).unwrap();
            writer.write_symbols(&[]).unwrap();
            assert_eq!(writer.symbols_written(), 5);
        }
        assert_eq!(buf, vec![b'A', b'B', 0, 10, 255]);
    }
}
