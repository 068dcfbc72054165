//! Code stream strategy selector

use crate::error::{LzwError, Result};
use std::fmt;
use std::str::FromStr;

/// Framing used to put codes on the wire
///
/// The choice is not recorded in the stream; producer and consumer must
/// agree on it out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeStreamKind {
    /// Decimal ASCII, one code per line
    Text,
    /// Two little-endian bytes per code
    Fixed16,
    /// Bit-packed at a width derived once from `max_code`
    FixedWidth,
    /// Bit-packed, starting at 9 bits and growing with the dictionary
    #[default]
    Adaptive,
}

impl CodeStreamKind {
    /// All strategies, in the order they are usually reported
    pub const ALL: [CodeStreamKind; 4] = [
        CodeStreamKind::Text,
        CodeStreamKind::Fixed16,
        CodeStreamKind::FixedWidth,
        CodeStreamKind::Adaptive,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeStreamKind::Text => "text",
            CodeStreamKind::Fixed16 => "fixed16",
            CodeStreamKind::FixedWidth => "fixed",
            CodeStreamKind::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for CodeStreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeStreamKind {
    type Err = LzwError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "a" => Ok(CodeStreamKind::Text),
            "fixed16" | "b" => Ok(CodeStreamKind::Fixed16),
            "fixed" | "fixed-width" | "c" => Ok(CodeStreamKind::FixedWidth),
            "adaptive" | "d" => Ok(CodeStreamKind::Adaptive),
            other => Err(LzwError::UnknownStrategy(other.to_string())),
        }
    }
}
