//! Code values and code widths
//!
//! A code is an unsigned integer naming a dictionary entry. Codes `0..=255`
//! are the single-byte literals, `256` is the end-of-stream sentinel and
//! everything above is assigned by the dictionary as it grows.

use std::fmt;

/// A dictionary code
pub type Code = u32;

/// Number of single-byte literal codes seeded into every dictionary
pub const LITERAL_CODES: u32 = 256;

/// Reserved end-of-stream sentinel, never a dictionary entry
pub const EOF_CODE: Code = 256;

/// First code handed out to a learned multi-byte sequence
pub const FIRST_DYNAMIC_CODE: Code = 257;

/// Default upper bound on dictionary codes
pub const DEFAULT_MAX_CODE: Code = 32767;

/// Number of significant bits in `value` (0 for 0).
#[inline]
pub const fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Width in bits of a packed code
///
/// Widths are always at least wide enough for the EOF sentinel (9 bits)
/// and never wider than a `u32` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeWidth(u32);

impl CodeWidth {
    /// Narrowest width, enough for every literal and the EOF sentinel
    pub const MIN: CodeWidth = CodeWidth(9);

    /// Widest width
    pub const MAX: CodeWidth = CodeWidth(u32::BITS);

    /// Create a width, clamped to `MIN..=MAX`
    #[inline]
    pub const fn new(bits: u32) -> Self {
        if bits < Self::MIN.0 {
            Self::MIN
        } else if bits > Self::MAX.0 {
            Self::MAX
        } else {
            CodeWidth(bits)
        }
    }

    /// Width needed to hold every code in `0..=max_code`
    #[inline]
    pub const fn for_max_code(max_code: Code) -> Self {
        Self::new(bit_length(max_code))
    }

    /// Number of bits
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Mask selecting the low `bits` bits
    #[inline]
    pub const fn mask(&self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Check whether `code` is representable at this width
    #[inline]
    pub const fn fits(&self, code: Code) -> bool {
        code as u64 <= self.mask()
    }

    /// One bit wider, saturating at `MAX`
    #[inline]
    pub const fn widened(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl Default for CodeWidth {
    fn default() -> Self {
        CodeWidth::MIN
    }
}

impl fmt::Display for CodeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}
