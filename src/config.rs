//! Compression settings shared by both ends of a stream

use crate::error::{LzwError, Result};
use crate::types::{Code, CodeStreamKind, CodeWidth, DEFAULT_MAX_CODE, FIRST_DYNAMIC_CODE};

/// Configuration for an LZW compress/decompress pair.
///
/// Nothing here is written into the compressed stream. The consumer must
/// use the same `max_code` and `strategy` as the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Highest code the dictionary may assign.
    ///
    /// Default: 32767. Values below 257 disable learning entirely.
    pub max_code: Code,

    /// Code stream framing.
    ///
    /// Default: [`CodeStreamKind::Adaptive`].
    pub strategy: CodeStreamKind,
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self {
            max_code: DEFAULT_MAX_CODE,
            strategy: CodeStreamKind::default(),
        }
    }
}

impl LzwConfig {
    /// Create a configuration
    pub fn new(strategy: CodeStreamKind, max_code: Code) -> Self {
        Self { max_code, strategy }
    }

    /// Replace the dictionary bound
    pub fn with_max_code(mut self, max_code: Code) -> Self {
        self.max_code = max_code;
        self
    }

    /// Replace the code stream strategy
    pub fn with_strategy(mut self, strategy: CodeStreamKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether the dictionary can never learn a sequence
    pub fn is_degenerate(&self) -> bool {
        self.max_code < FIRST_DYNAMIC_CODE
    }

    /// Width of the widest code this configuration can put on the wire,
    /// or `None` for the unbounded text strategy.
    pub fn max_code_width(&self) -> Option<CodeWidth> {
        match self.strategy {
            CodeStreamKind::Text => None,
            CodeStreamKind::Fixed16 => Some(CodeWidth::new(16)),
            CodeStreamKind::FixedWidth | CodeStreamKind::Adaptive => {
                Some(CodeWidth::for_max_code(self.max_code))
            }
        }
    }

    /// Reject settings that cannot produce a decodable stream
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.max_code_width() {
            if !width.fits(self.max_code) {
                return Err(LzwError::InvalidConfig(format!(
                    "max code {} does not fit the {} code stream ({})",
                    self.max_code, self.strategy, width
                )));
            }
        }
        if self.is_degenerate() {
            log::warn!(
                "max code {} leaves no room for learned sequences; output will not shrink",
                self.max_code
            );
        }
        Ok(())
    }
}
