//! Encode and decode dictionaries
//!
//! Both sides start from the same 256 literal entries and learn at most one
//! entry per code transferred, handing out codes from 257 upward while the
//! next code is still within `max_code`. The decoder learns one step behind
//! the encoder.

use crate::error::{LzwError, Result};
use crate::types::{Code, FIRST_DYNAMIC_CODE, LITERAL_CODES};
use ahash::AHashMap;

/// Upper bound on entries reserved up front, whatever `max_code` says
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 16;

fn preallocation(max_code: Code) -> usize {
    let learned = max_code.saturating_sub(LITERAL_CODES) as usize;
    // Headroom so the table is not rehashed just before it fills
    (learned + learned / 10).min(MAX_PREALLOCATED_ENTRIES)
}

/// Sequence-to-code dictionary used while compressing
///
/// Every learned sequence is a known sequence extended by one byte, so the
/// table is stored as a trie: `(code of prefix, next byte) -> code`. Literal
/// sequences are implicit, the code of a single byte is the byte itself.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    entries: AHashMap<(Code, u8), Code>,
    next_code: Code,
    max_code: Code,
}

impl EncodeDictionary {
    /// Create a dictionary holding only the 256 literals
    pub fn new(max_code: Code) -> Self {
        Self {
            entries: AHashMap::with_capacity(preallocation(max_code)),
            next_code: FIRST_DYNAMIC_CODE,
            max_code,
        }
    }

    /// Code of the single-byte sequence `symbol`
    #[inline]
    pub fn literal(symbol: u8) -> Code {
        Code::from(symbol)
    }

    /// Code of the sequence `prefix` followed by `symbol`, if known
    #[inline]
    pub fn extend(&self, prefix: Code, symbol: u8) -> Option<Code> {
        self.entries.get(&(prefix, symbol)).copied()
    }

    /// Learn `prefix` followed by `symbol` under the next free code.
    ///
    /// Returns the assigned code, or `None` once the dictionary is full.
    pub fn insert(&mut self, prefix: Code, symbol: u8) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.entries.insert((prefix, symbol), code);
        self.next_code += 1;
        Some(code)
    }

    /// Look up the code of a whole sequence
    pub fn code_for(&self, sequence: &[u8]) -> Option<Code> {
        let (&first, rest) = sequence.split_first()?;
        rest.iter()
            .try_fold(Self::literal(first), |prefix, &symbol| {
                self.extend(prefix, symbol)
            })
    }

    /// Next code that would be assigned
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// Whether no further entries will be learned
    pub fn is_full(&self) -> bool {
        self.next_code > self.max_code
    }

    /// Number of entries, literals included
    pub fn len(&self) -> usize {
        LITERAL_CODES as usize + self.entries.len()
    }

    /// Always false: the literals are always present
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Code-to-sequence dictionary used while decompressing
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    strings: AHashMap<Code, Vec<u8>>,
    next_code: Code,
    max_code: Code,
}

impl DecodeDictionary {
    /// Create a dictionary holding only the 256 literals
    pub fn new(max_code: Code) -> Self {
        let mut strings =
            AHashMap::with_capacity(LITERAL_CODES as usize + preallocation(max_code));
        for symbol in 0..=u8::MAX {
            strings.insert(Code::from(symbol), vec![symbol]);
        }
        Self {
            strings,
            next_code: FIRST_DYNAMIC_CODE,
            max_code,
        }
    }

    /// Sequence stored under `code`, if any
    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.strings.get(&code).map(Vec::as_slice)
    }

    /// Resolve `code` to its sequence.
    ///
    /// A code the decoder has not learned yet can only be the entry the
    /// encoder created from the previous sequence plus its own first byte;
    /// that entry is recorded and returned. Fails only when there is no
    /// previous sequence to extend.
    pub fn resolve(&mut self, code: Code, previous: &[u8]) -> Result<Vec<u8>> {
        if let Some(sequence) = self.strings.get(&code) {
            return Ok(sequence.clone());
        }
        let &first = previous.first().ok_or(LzwError::InvalidCode(code))?;
        let mut sequence = Vec::with_capacity(previous.len() + 1);
        sequence.extend_from_slice(previous);
        sequence.push(first);
        self.strings.insert(code, sequence.clone());
        Ok(sequence)
    }

    /// Learn `sequence` under the next free code.
    ///
    /// Returns the assigned code, or `None` once the dictionary is full.
    pub fn insert(&mut self, sequence: Vec<u8>) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.strings.insert(code, sequence);
        self.next_code += 1;
        Some(code)
    }

    /// Next code that would be assigned
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// Whether no further entries will be learned
    pub fn is_full(&self) -> bool {
        self.next_code > self.max_code
    }

    /// Number of entries, literals included
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the literals are always present
    pub fn is_empty(&self) -> bool {
        false
    }
}
