//! Decimal text code stream
//!
//! Each code is written as its decimal value followed by a newline. The
//! output can be opened in a text editor, which makes it the strategy of
//! choice when debugging the dictionary engine. It is not compact.

use crate::error::{LzwError, Result};
use crate::io::read_byte;
use crate::types::{Code, EOF_CODE};
use std::io::{Read, Write};

use super::{CodeReader, CodeWriter};

/// Text code stream writer
pub struct TextCodeWriter<W: Write> {
    writer: W,
    finished: bool,
}

impl<W: Write> TextCodeWriter<W> {
    /// Create a new text code writer
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
        writeln!(self.writer, "{}", code)?;
        Ok(())
    }
}

impl<W: Write> CodeWriter for TextCodeWriter<W> {
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

impl<W: Write> Drop for TextCodeWriter<W> {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(e) = self.finish() {
                log::warn!("failed to terminate text code stream: {}", e);
            }
        }
    }
}

/// Text code stream reader
///
/// Codes are whitespace-separated decimal tokens. A token that is not a
/// valid code ends the stream the same way exhaustion does.
pub struct TextCodeReader<R: Read> {
    reader: R,
    token: Vec<u8>,
    done: bool,
}

impl<R: Read> TextCodeReader<R> {
    /// Create a new text code reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::with_capacity(16),
            done: false,
        }
    }

    /// Read the next whitespace-delimited token into `self.token`.
    ///
    /// Returns `false` if the source ran out before any token byte.
    fn next_token(&mut self) -> Result<bool> {
        self.token.clear();
        loop {
            match read_byte(&mut self.reader)? {
                None => return Ok(!self.token.is_empty()),
                Some(b) if b.is_ascii_whitespace() => {
                    if !self.token.is_empty() {
                        return Ok(true);
                    }
                }
                Some(b) => self.token.push(b),
            }
        }
    }
}

impl<R: Read> CodeReader for TextCodeReader<R> {
    fn read_code(&mut self) -> Result<Option<Code>> {
        if self.done {
            return Ok(None);
        }
        if !self.next_token()? {
            self.done = true;
            return Ok(None);
        }

        let parsed = std::str::from_utf8(&self.token)
            .ok()
            .and_then(|s| s.parse::<Code>().ok());

        match parsed {
            Some(EOF_CODE) => {
                self.done = true;
                Ok(None)
            }
            Some(code) => Ok(Some(code)),
            None => {
                log::warn!(
                    "malformed code '{}' in text code stream, stopping",
                    String::from_utf8_lossy(&self.token)
                );
                self.done = true;
                Ok(None)
            }
        }
    }
}
