//! LZW compression and decompression.
//!
//! - [`lzw`] - the streaming dictionary engine
//! - [`dictionary`] - encode (trie) and decode (code table) dictionaries
//!
//! [`LzwCompressor`] wraps the engine behind the in-memory [`Compressor`]
//! and [`Decompressor`] traits.

pub mod dictionary;
pub mod lzw;

pub use dictionary::{DecodeDictionary, EncodeDictionary};
pub use lzw::{compress, decode, decompress, encode, CodingSummary};

use crate::config::LzwConfig;
use crate::error::Result;

/// Trait for compressing data.
pub trait Compressor {
    /// Compress a whole source buffer.
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for decompressing data.
pub trait Decompressor {
    /// Decompress a whole source buffer.
    fn decompress(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// In-memory LZW codec bound to one configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCompressor {
    config: LzwConfig,
}

impl LzwCompressor {
    /// Create a codec for `config`
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// The configuration both directions use
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}

impl Compressor for LzwCompressor {
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>> {
        self.config.validate()?;
        let mut dest = Vec::with_capacity(source.len() / 2 + 2);
        lzw::compress(source, &mut dest, self.config.strategy, self.config.max_code)?;
        Ok(dest)
    }
}

impl Decompressor for LzwCompressor {
    fn decompress(&self, source: &[u8]) -> Result<Vec<u8>> {
        self.config.validate()?;
        let mut dest = Vec::with_capacity(source.len() * 2);
        lzw::decompress(source, &mut dest, self.config.strategy, self.config.max_code)?;
        Ok(dest)
    }
}
