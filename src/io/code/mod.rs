//! Code streams
//!
//! A code stream frames unsigned integer codes onto a byte sink and reads
//! them back. Four framings are provided:
//!
//! | Strategy | Framing | Width |
//! |---|---|---|
//! | [`TextCodeWriter`] | decimal ASCII, one per line | unbounded |
//! | [`Fixed16CodeWriter`] | little-endian `u16` | 16 bits |
//! | [`FixedWidthCodeWriter`] | LSB-first bit packing | derived from `max_code` |
//! | [`AdaptiveCodeWriter`] | LSB-first bit packing | 9 bits, growing |
//!
//! Every writer terminates its stream with [`EOF_CODE`] when finished, and
//! every reader stops (returning `None`) when it sees it. The sentinel is
//! never handed to the caller.
//!
//! [`EOF_CODE`]: crate::types::EOF_CODE

mod bit_packed;
mod fixed16;
mod text;
mod width;

pub use bit_packed::{BitPackedReader, BitPackedWriter};
pub use fixed16::{Fixed16CodeReader, Fixed16CodeWriter};
pub use text::{TextCodeReader, TextCodeWriter};
pub use width::{AdaptiveWidth, FixedWidth, WidthSchedule};

use crate::error::Result;
use crate::types::{Code, CodeStreamKind};
use std::io::{Read, Write};

/// Bit-packed writer at a constant width
pub type FixedWidthCodeWriter<W> = BitPackedWriter<W, FixedWidth>;
/// Bit-packed reader at a constant width
pub type FixedWidthCodeReader<R> = BitPackedReader<R, FixedWidth>;
/// Bit-packed writer whose width tracks dictionary growth
pub type AdaptiveCodeWriter<W> = BitPackedWriter<W, AdaptiveWidth>;
/// Bit-packed reader whose width tracks dictionary growth
pub type AdaptiveCodeReader<R> = BitPackedReader<R, AdaptiveWidth>;

/// Trait for writing codes to a stream
pub trait CodeWriter {
    /// Write a single code
    fn write_code(&mut self, code: Code) -> Result<()>;

    /// Terminate the stream with the EOF sentinel and flush everything.
    ///
    /// Calling it more than once is a no-op. Writers that are dropped
    /// without being finished finish themselves on a best-effort basis.
    fn finish(&mut self) -> Result<()>;

    /// Whether `finish` has run
    fn is_finished(&self) -> bool;
}

/// Trait for reading codes from a stream
pub trait CodeReader {
    /// Read the next code.
    ///
    /// Returns `None` once the EOF sentinel is read or the underlying
    /// stream runs dry.
    fn read_code(&mut self) -> Result<Option<Code>>;
}

/// Runtime-selected code stream writer
pub enum CodeStreamWriter<W: Write> {
    Text(TextCodeWriter<W>),
    Fixed16(Fixed16CodeWriter<W>),
    FixedWidth(FixedWidthCodeWriter<W>),
    Adaptive(AdaptiveCodeWriter<W>),
}

impl<W: Write> CodeStreamWriter<W> {
    /// Create a writer for `kind` over `writer`
    pub fn new(kind: CodeStreamKind, writer: W, max_code: Code) -> Self {
        match kind {
            CodeStreamKind::Text => CodeStreamWriter::Text(TextCodeWriter::new(writer)),
            CodeStreamKind::Fixed16 => CodeStreamWriter::Fixed16(Fixed16CodeWriter::new(writer)),
            CodeStreamKind::FixedWidth => CodeStreamWriter::FixedWidth(BitPackedWriter::new(
                writer,
                FixedWidth::new(max_code),
            )),
            CodeStreamKind::Adaptive => CodeStreamWriter::Adaptive(BitPackedWriter::new(
                writer,
                AdaptiveWidth::new(max_code),
            )),
        }
    }

    /// The strategy this writer implements
    pub fn kind(&self) -> CodeStreamKind {
        match self {
            CodeStreamWriter::Text(_) => CodeStreamKind::Text,
            CodeStreamWriter::Fixed16(_) => CodeStreamKind::Fixed16,
            CodeStreamWriter::FixedWidth(_) => CodeStreamKind::FixedWidth,
            CodeStreamWriter::Adaptive(_) => CodeStreamKind::Adaptive,
        }
    }
}

impl<W: Write> CodeWriter for CodeStreamWriter<W> {
    fn write_code(&mut self, code: Code) -> Result<()> {
        match self {
            CodeStreamWriter::Text(w) => w.write_code(code),
            CodeStreamWriter::Fixed16(w) => w.write_code(code),
            CodeStreamWriter::FixedWidth(w) => w.write_code(code),
            CodeStreamWriter::Adaptive(w) => w.write_code(code),
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            CodeStreamWriter::Text(w) => w.finish(),
            CodeStreamWriter::Fixed16(w) => w.finish(),
            CodeStreamWriter::FixedWidth(w) => w.finish(),
            CodeStreamWriter::Adaptive(w) => w.finish(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            CodeStreamWriter::Text(w) => w.is_finished(),
            CodeStreamWriter::Fixed16(w) => w.is_finished(),
            CodeStreamWriter::FixedWidth(w) => w.is_finished(),
            CodeStreamWriter::Adaptive(w) => w.is_finished(),
        }
    }
}

/// Runtime-selected code stream reader
pub enum CodeStreamReader<R: Read> {
    Text(TextCodeReader<R>),
    Fixed16(Fixed16CodeReader<R>),
    FixedWidth(FixedWidthCodeReader<R>),
    Adaptive(AdaptiveCodeReader<R>),
}

impl<R: Read> CodeStreamReader<R> {
    /// Create a reader for `kind` over `reader`
    pub fn new(kind: CodeStreamKind, reader: R, max_code: Code) -> Self {
        match kind {
            CodeStreamKind::Text => CodeStreamReader::Text(TextCodeReader::new(reader)),
            CodeStreamKind::Fixed16 => CodeStreamReader::Fixed16(Fixed16CodeReader::new(reader)),
            CodeStreamKind::FixedWidth => CodeStreamReader::FixedWidth(BitPackedReader::new(
                reader,
                FixedWidth::new(max_code),
            )),
            CodeStreamKind::Adaptive => CodeStreamReader::Adaptive(BitPackedReader::new(
                reader,
                AdaptiveWidth::new(max_code),
            )),
        }
    }

    /// The strategy this reader implements
    pub fn kind(&self) -> CodeStreamKind {
        match self {
            CodeStreamReader::Text(_) => CodeStreamKind::Text,
            CodeStreamReader::Fixed16(_) => CodeStreamKind::Fixed16,
            CodeStreamReader::FixedWidth(_) => CodeStreamKind::FixedWidth,
            CodeStreamReader::Adaptive(_) => CodeStreamKind::Adaptive,
        }
    }
}

impl<R: Read> CodeReader for CodeStreamReader<R> {
    fn read_code(&mut self) -> Result<Option<Code>> {
        match self {
            CodeStreamReader::Text(r) => r.read_code(),
            CodeStreamReader::Fixed16(r) => r.read_code(),
            CodeStreamReader::FixedWidth(r) => r.read_code(),
            CodeStreamReader::Adaptive(r) => r.read_code(),
        }
    }
}
