//! Fixed 16-bit code stream
//!
//! Every code occupies exactly two bytes, low byte first, regardless of
//! how small `max_code` is. Simple, byte aligned, and wasteful.

use crate::error::{LzwError, Result};
use crate::types::{Code, EOF_CODE};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use super::{CodeReader, CodeWriter};

const FIXED16_WIDTH: u32 = 16;

/// Fixed 16-bit code stream writer
pub struct Fixed16CodeWriter<W: Write> {
    writer: W,
    finished: bool,
}

impl<W: Write> Fixed16CodeWriter<W> {
    /// Create a new fixed 16-bit code writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            finished: false,
        }
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    fn put(&mut self, code: Code) -> Result<()> {
        let value = u16::try_from(code).map_err(|_| LzwError::CodeOverflow {
            code,
            width: FIXED16_WIDTH,
        })?;
        self.writer.write_u16::<LittleEndian>(value)?;
        Ok(())
    }
}

impl<W: Write> CodeWriter for Fixed16CodeWriter<W> {
    fn write_code(&mut self, code: Code) -> Result<()> {
        if self.finished {
            return Err(LzwError::Finalized);
        }
        self.put(code)
    }

    fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.put(EOF_CODE)?;
        self.writer.flush()?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<W: Write> Drop for Fixed16CodeWriter<W> {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(e) = self.finish() {
                log::warn!("failed to terminate fixed16 code stream: {}", e);
            }
        }
    }
}

/// Fixed 16-bit code stream reader
pub struct Fixed16CodeReader<R: Read> {
    reader: R,
    done: bool,
}

impl<R: Read> Fixed16CodeReader<R> {
    /// Create a new fixed 16-bit code reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> CodeReader for Fixed16CodeReader<R> {
    fn read_code(&mut self) -> Result<Option<Code>> {
        if self.done {
            return Ok(None);
        }
        let code = match self.reader.read_u16::<LittleEndian>() {
            Ok(value) => Code::from(value),
            // A missing or dangling half code is the end of the stream
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.done = true;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        if code == EOF_CODE {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(code))
    }
}
