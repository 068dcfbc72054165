//! # lzwrs
//!
//! A pure Rust LZW compressor and decompressor with interchangeable code
//! stream encodings.
//!
//! ## Features
//!
//! - Streaming compression over any `Read`/`Write` pair
//! - Four code stream strategies: decimal text, fixed 16-bit, fixed
//!   computed width and adaptive width bit packing
//! - Configurable dictionary bound (`max_code`)
//! - Parallel round-trip verification of whole directories
//!
//! ## Quick Start
//!
//! ```rust
//! use lzwrs::{compress, decompress, CodeStreamKind};
//!
//! let input = b"TOBEORNOTTOBEORTOBEORNOT";
//! let mut packed = Vec::new();
//! compress(&input[..], &mut packed, CodeStreamKind::Adaptive, 32767)?;
//!
//! let mut restored = Vec::new();
//! decompress(&packed[..], &mut restored, CodeStreamKind::Adaptive, 32767)?;
//! assert_eq!(restored, input);
//! # Ok::<(), lzwrs::LzwError>(())
//! ```
//!
//! ## Architecture
//!
//! - `io::symbol` - verbatim byte streams
//! - `io::code` - code streams (`CodeWriter` / `CodeReader`)
//! - `compression` - dictionaries and the encode/decode engine
//! - `report` - file and directory round-trip verification
//!
//! The compressed stream carries no header. Strategy and `max_code` must
//! match between producer and consumer.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod compression;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
pub mod types;

pub use compression::{
    compress, decompress, CodingSummary, Compressor, Decompressor, LzwCompressor,
};
pub use config::LzwConfig;
pub use error::{LzwError, Result};
pub use io::{CodeReader, CodeStreamReader, CodeStreamWriter, CodeWriter};
pub use types::{
    Code, CodeStreamKind, CodeWidth, DEFAULT_MAX_CODE, EOF_CODE, FIRST_DYNAMIC_CODE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
