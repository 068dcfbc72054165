//! LSB-first bit-packed code streams
//!
//! Codes are laid down back to back, least significant bit first, at the
//! width dictated by a [`WidthSchedule`]. The writer keeps fewer than 8
//! pending bits between codes; the final partial byte is zero-padded when
//! the stream is finished. The reader stops at the EOF sentinel and never
//! looks at the padding.

use crate::error::{LzwError, Result};
use crate::io::read_byte;
use crate::types::{Code, EOF_CODE};
use byteorder::WriteBytesExt;
use std::io::{Read, Write};

use super::width::WidthSchedule;
use super::{CodeReader, CodeWriter};

/// Bit-packed code stream writer
pub struct BitPackedWriter<W: Write, S: WidthSchedule> {
    writer: W,
    schedule: S,
    pending_output: u64,
    pending_bits: u32,
    finished: bool,
}

impl<W: Write, S: WidthSchedule> BitPackedWriter<W, S> {
    /// Create a new bit-packed writer driven by `schedule`
    pub fn new(writer: W, schedule: S) -> Self {
        Self {
            writer,
            schedule,
            pending_output: 0,
            pending_bits: 0,
            finished: false,
        }
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the width schedule
    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    fn put(&mut self, code: Code) -> Result<()> {
        let width = self.schedule.width();
        if !width.fits(code) {
            return Err(LzwError::CodeOverflow {
                code,
                width: width.bits(),
            });
        }
        self.pending_output |= u64::from(code) << self.pending_bits;
        self.pending_bits += width.bits();
        self.flush_bits(8)?;
        self.schedule.advance();
        Ok(())
    }

    /// Emit whole bytes while at least `floor` bits are pending.
    fn flush_bits(&mut self, floor: u32) -> Result<()> {
        while self.pending_bits >= floor && self.pending_bits > 0 {
            self.writer.write_u8((self.pending_output & 0xFF) as u8)?;
            self.pending_output >>= 8;
            self.pending_bits = self.pending_bits.saturating_sub(8);
        }
        Ok(())
    }
}

impl<W: Write, S: WidthSchedule> CodeWriter for BitPackedWriter<W, S> {
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
        // Nothing follows the sentinel, so the last partial byte goes out too
        self.flush_bits(1)?;
        self.pending_output = 0;
        self.writer.flush()?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<W: Write, S: WidthSchedule> Drop for BitPackedWriter<W, S> {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(e) = self.finish() {
                log::warn!("failed to terminate bit-packed code stream: {}", e);
            }
        }
    }
}

/// Bit-packed code stream reader
pub struct BitPackedReader<R: Read, S: WidthSchedule> {
    reader: R,
    schedule: S,
    pending_input: u64,
    available_bits: u32,
    done: bool,
}

impl<R: Read, S: WidthSchedule> BitPackedReader<R, S> {
    /// Create a new bit-packed reader driven by `schedule`
    pub fn new(reader: R, schedule: S) -> Self {
        Self {
            reader,
            schedule,
            pending_input: 0,
            available_bits: 0,
            done: false,
        }
    }

    /// Get the width schedule
    pub fn schedule(&self) -> &S {
        &self.schedule
    }
}

impl<R: Read, S: WidthSchedule> CodeReader for BitPackedReader<R, S> {
    fn read_code(&mut self) -> Result<Option<Code>> {
        if self.done {
            return Ok(None);
        }

        let width = self.schedule.width();
        while self.available_bits < width.bits() {
            match read_byte(&mut self.reader)? {
                Some(byte) => {
                    self.pending_input |= u64::from(byte) << self.available_bits;
                    self.available_bits += 8;
                }
                None => {
                    self.done = true;
                    return Ok(None);
                }
            }
        }

        let code = (self.pending_input & width.mask()) as Code;
        self.pending_input >>= width.bits();
        self.available_bits -= width.bits();
        self.schedule.advance();

        if code == EOF_CODE {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(code))
    }
}
