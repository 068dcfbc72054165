//! Code width schedules for the bit-packed code streams
//!
//! A schedule answers "how wide is the next code" and is told once per code
//! transferred. Writer and reader each own one; they stay in lock-step only
//! if both advance exactly once per code, the EOF sentinel included.

use crate::types::{Code, CodeWidth, EOF_CODE};

/// Width policy for a bit-packed code stream
pub trait WidthSchedule {
    /// Width of the next code
    fn width(&self) -> CodeWidth;

    /// Record that one code was transferred at the current width
    fn advance(&mut self);
}

/// Constant width derived once from `max_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth {
    width: CodeWidth,
}

impl FixedWidth {
    /// Width large enough for every code up to `max_code`
    pub fn new(max_code: Code) -> Self {
        Self {
            width: CodeWidth::for_max_code(max_code),
        }
    }
}

impl WidthSchedule for FixedWidth {
    #[inline]
    fn width(&self) -> CodeWidth {
        self.width
    }

    #[inline]
    fn advance(&mut self) {}
}

/// Width that grows by one bit each time the code counter reaches the
/// next power of two, until the counter reaches `max_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveWidth {
    width: CodeWidth,
    current_code: Code,
    next_bump: u64,
    max_code: Code,
}

impl AdaptiveWidth {
    /// First growth threshold
    const FIRST_BUMP: u64 = 512;

    /// Start a fresh schedule at 9 bits
    pub fn new(max_code: Code) -> Self {
        Self {
            width: CodeWidth::MIN,
            current_code: EOF_CODE,
            next_bump: Self::FIRST_BUMP,
            max_code,
        }
    }

    /// Highest code the peer may have assigned so far
    pub fn current_code(&self) -> Code {
        self.current_code
    }
}

impl WidthSchedule for AdaptiveWidth {
    #[inline]
    fn width(&self) -> CodeWidth {
        self.width
    }

    fn advance(&mut self) {
        if self.current_code < self.max_code {
            self.current_code += 1;
            if u64::from(self.current_code) == self.next_bump {
                self.next_bump *= 2;
                self.width = self.width.widened();
                log::trace!(
                    "code width grows to {} at code {}",
                    self.width,
                    self.current_code
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_never_changes() {
        let mut schedule = FixedWidth::new(4095);
        for _ in 0..10_000 {
            assert_eq!(schedule.width().bits(), 12);
            schedule.advance();
        }
    }

    #[test]
    fn test_adaptive_starts_at_nine_bits() {
        let schedule = AdaptiveWidth::new(32767);
        assert_eq!(schedule.width().bits(), 9);
        assert_eq!(schedule.current_code(), 256);
    }

    #[test]
    fn test_adaptive_grows_at_powers_of_two() {
        let mut schedule = AdaptiveWidth::new(32767);
        // 256 advances take the counter from 256 to 512
        for _ in 0..255 {
            schedule.advance();
        }
        assert_eq!(schedule.current_code(), 511);
        assert_eq!(schedule.width().bits(), 9);
        schedule.advance();
        assert_eq!(schedule.current_code(), 512);
        assert_eq!(schedule.width().bits(), 10);

        for _ in 0..512 {
            schedule.advance();
        }
        assert_eq!(schedule.current_code(), 1024);
        assert_eq!(schedule.width().bits(), 11);
    }

    #[test]
    fn test_adaptive_caps_at_max_code() {
        let mut schedule = AdaptiveWidth::new(1000);
        for _ in 0..100_000 {
            schedule.advance();
        }
        assert_eq!(schedule.current_code(), 1000);
        assert_eq!(schedule.width().bits(), 10);
    }

    #[test]
    fn test_adaptive_degenerate_bound() {
        let mut schedule = AdaptiveWidth::new(256);
        for _ in 0..1000 {
            schedule.advance();
        }
        assert_eq!(schedule.width().bits(), 9);
        assert_eq!(schedule.current_code(), 256);
    }

    #[test]
    fn test_adaptive_width_matches_bit_length_of_counter() {
        let mut schedule = AdaptiveWidth::new(u32::MAX);
        for _ in 0..70_000 {
            assert_eq!(
                schedule.width().bits(),
                crate::types::bit_length(schedule.current_code())
            );
            schedule.advance();
        }
    }
}
