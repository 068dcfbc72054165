//! Shared test utilities for lzwrs integration tests.
//!
//! Test crates import these via `mod common;`.

#![allow(dead_code)]

use lzwrs::{compress, decompress, CodeStreamKind, LzwConfig};
use std::path::PathBuf;

// ===========================================================================
// Input generators
// ===========================================================================

/// Deterministic pseudo-random bytes (64-bit LCG, high byte of the state).
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

/// Every byte value once, in ascending order.
pub fn all_byte_values() -> Vec<u8> {
    (0..=255u8).collect()
}

/// English-like text with plenty of repetition.
pub fn sample_text(repeats: usize) -> Vec<u8> {
    "the quick brown fox jumps over the lazy dog; "
        .repeat(repeats)
        .into_bytes()
}

// ===========================================================================
// Round trip helpers
// ===========================================================================

/// Compress `data` under `config`, panicking on failure.
pub fn compress_bytes(data: &[u8], config: &LzwConfig) -> Vec<u8> {
    let mut out = Vec::new();
    compress(data, &mut out, config.strategy, config.max_code)
        .unwrap_or_else(|e| panic!("compress failed for {config:?}: {e}"));
    out
}

/// Decompress `data` under `config`, panicking on failure.
pub fn decompress_bytes(data: &[u8], config: &LzwConfig) -> Vec<u8> {
    let mut out = Vec::new();
    decompress(data, &mut out, config.strategy, config.max_code)
        .unwrap_or_else(|e| panic!("decompress failed for {config:?}: {e}"));
    out
}

/// Compress then decompress, asserting the input comes back unchanged.
///
/// Returns the compressed bytes.
pub fn assert_round_trip(data: &[u8], config: &LzwConfig) -> Vec<u8> {
    let packed = compress_bytes(data, config);
    let restored = decompress_bytes(&packed, config);
    assert_eq!(
        restored.len(),
        data.len(),
        "length mismatch for {:?}",
        config
    );
    assert!(restored == data, "content mismatch for {:?}", config);
    packed
}

/// Configurations covering every strategy at the default bound.
pub fn all_strategies(max_code: u32) -> Vec<LzwConfig> {
    CodeStreamKind::ALL
        .iter()
        .map(|&s| LzwConfig::new(s, max_code))
        .collect()
}

/// Codes emitted for `data`, EOF included, read from the text code stream.
pub fn text_codes(data: &[u8], max_code: u32) -> Vec<u32> {
    let packed = compress_bytes(data, &LzwConfig::new(CodeStreamKind::Text, max_code));
    String::from_utf8(packed)
        .expect("text code stream is ASCII")
        .split_whitespace()
        .map(|t| t.parse().expect("decimal code"))
        .collect()
}

// ===========================================================================
// Filesystem
// ===========================================================================

/// Fresh scratch directory under the system temp dir, unique per test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lzwrs_{}_{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("clear scratch dir");
    }
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
