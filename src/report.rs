//! Round-trip verification of files and directories
//!
//! Each file is compressed, decompressed and compared against the original,
//! once per requested configuration. Files are processed in parallel; every
//! run owns its own streams and dictionaries.

use crate::compression::{Compressor, Decompressor, LzwCompressor};
use crate::config::LzwConfig;
use crate::error::Result;
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Placeholder for figures that are undefined on empty input
const UNDEFINED: &str = "???";

/// Column names of [`SuiteReport::to_tsv`]
pub const TSV_HEADER: &str = concat!(
    "Full Name\tBase Name\tUncompressed Size\tCompressed Size\t",
    "Ratio\tBits per Byte\tPass/Fail\tStrategy\tMax Code"
);

/// How a round trip ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTripOutcome {
    /// Output identical to input
    Passed,
    /// Output length differs from input length
    SizeMismatch { expected: u64, actual: u64 },
    /// Same length, first differing byte at `offset`
    CompareFail { offset: u64 },
    /// Compression, decompression or file access failed
    Failed(String),
}

impl RoundTripOutcome {
    /// Whether the round trip reproduced the input
    pub fn is_pass(&self) -> bool {
        matches!(self, RoundTripOutcome::Passed)
    }
}

impl fmt::Display for RoundTripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundTripOutcome::Passed => write!(f, "passed"),
            RoundTripOutcome::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch ({} != {})", actual, expected)
            }
            RoundTripOutcome::CompareFail { offset } => {
                write!(f, "Compare fail at byte {}", offset)
            }
            RoundTripOutcome::Failed(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Sizes and outcome of one round trip
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    pub original_size: u64,
    pub compressed_size: u64,
    pub outcome: RoundTripOutcome,
}

impl RoundTrip {
    /// Compressed size as an integer percentage of the original
    pub fn ratio_percent(&self) -> Option<u64> {
        if self.original_size == 0 {
            return None;
        }
        Some(self.compressed_size * 100 / self.original_size)
    }

    /// Compressed bits spent per original byte
    pub fn bits_per_byte(&self) -> Option<f64> {
        if self.original_size == 0 {
            return None;
        }
        Some(self.compressed_size as f64 * 8.0 / self.original_size as f64)
    }

    fn ratio_text(&self) -> String {
        self.ratio_percent()
            .map(|r| format!("{}%", r))
            .unwrap_or_else(|| UNDEFINED.to_string())
    }

    fn bits_per_byte_text(&self) -> String {
        self.bits_per_byte()
            .map(|b| format!("{:5.2}", b))
            .unwrap_or_else(|| UNDEFINED.to_string())
    }
}

/// Compress, decompress and compare `data` under `config`.
pub fn verify_bytes(data: &[u8], config: &LzwConfig) -> RoundTrip {
    let original_size = data.len() as u64;
    let codec = LzwCompressor::new(*config);

    let compressed = match codec.compress(data) {
        Ok(c) => c,
        Err(e) => {
            return RoundTrip {
                original_size,
                compressed_size: 0,
                outcome: RoundTripOutcome::Failed(e.to_string()),
            }
        }
    };
    let compressed_size = compressed.len() as u64;

    let outcome = match codec.decompress(&compressed) {
        Ok(restored) => compare(data, &restored),
        Err(e) => RoundTripOutcome::Failed(e.to_string()),
    };

    RoundTrip {
        original_size,
        compressed_size,
        outcome,
    }
}

fn compare(expected: &[u8], actual: &[u8]) -> RoundTripOutcome {
    if expected.len() != actual.len() {
        return RoundTripOutcome::SizeMismatch {
            expected: expected.len() as u64,
            actual: actual.len() as u64,
        };
    }
    match expected.iter().zip(actual).position(|(a, b)| a != b) {
        Some(offset) => RoundTripOutcome::CompareFail {
            offset: offset as u64,
        },
        None => RoundTripOutcome::Passed,
    }
}

/// Round-trip result for one file under one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub config: LzwConfig,
    pub result: RoundTrip,
}

impl FileReport {
    /// File name without its directory
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Read `path` and round-trip its contents under `config`.
pub fn verify_file(path: &Path, config: &LzwConfig) -> FileReport {
    log::debug!("verifying {} with {} / {}", path.display(), config.strategy, config.max_code);
    let result = match fs::read(path) {
        Ok(data) => verify_bytes(&data, config),
        Err(e) => RoundTrip {
            original_size: 0,
            compressed_size: 0,
            outcome: RoundTripOutcome::Failed(e.to_string()),
        },
    };
    if !result.outcome.is_pass() {
        log::warn!("{}: {}", path.display(), result.outcome);
    }
    FileReport {
        path: path.to_path_buf(),
        config: *config,
        result,
    }
}

/// List regular files under `dir`, descending into subdirectories when
/// `recursive` is set. Symlinks and special files are skipped. The result
/// is sorted.
pub fn collect_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_file() {
            files.push(entry.path());
        } else if file_type.is_dir() && recursive {
            collect_into(&entry.path(), recursive, files)?;
        }
    }
    Ok(())
}

/// Results for a whole directory run
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub root: PathBuf,
    pub reports: Vec<FileReport>,
    pub elapsed: Duration,
}

impl SuiteReport {
    /// Number of passing round trips
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.result.outcome.is_pass()).count()
    }

    /// Number of failing round trips
    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    /// Whether every round trip passed
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Elapsed wall time as `HH:MM:SS`
    pub fn elapsed_hms(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }

    /// Render an aligned text table, one row per round trip
    pub fn to_table(&self) -> String {
        let header = [
            "File",
            "Strategy",
            "Max Code",
            "Size",
            "Comp. Size",
            "Ratio",
            "Bits/Byte",
            "Pass/Fail",
        ];
        let rows: Vec<[String; 8]> = self
            .reports
            .iter()
            .map(|r| {
                [
                    r.base_name(),
                    r.config.strategy.to_string(),
                    r.config.max_code.to_string(),
                    r.result.original_size.to_string(),
                    r.result.compressed_size.to_string(),
                    r.result.ratio_text(),
                    r.result.bits_per_byte_text(),
                    r.result.outcome.to_string(),
                ]
            })
            .collect();

        let mut widths = header.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        let mut push_row = |cells: &[&str]| {
            let line: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .enumerate()
                .map(|(i, (cell, &w))| {
                    // Text columns left aligned, figures right aligned
                    if i <= 1 || i == 7 {
                        format!("{:<w$}", cell, w = w)
                    } else {
                        format!("{:>w$}", cell, w = w)
                    }
                })
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        push_row(&header);
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            push_row(&cells);
        }
        out.push_str(&format!(
            "Elapsed time: {}  ({} passed, {} failed)\n",
            self.elapsed_hms(),
            self.passed(),
            self.failed()
        ));
        out
    }

    /// Render tab-separated values with a header line
    pub fn to_tsv(&self) -> String {
        let mut out = String::from(TSV_HEADER);
        out.push_str("\r\n");
        for r in &self.reports {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\r\n",
                r.path.display(),
                r.base_name(),
                r.result.original_size,
                r.result.compressed_size,
                r.result.ratio_text(),
                r.result.bits_per_byte_text().trim(),
                r.result.outcome,
                r.config.strategy,
                r.config.max_code
            ));
        }
        out
    }
}

/// Round-trip every file under `dir` once per configuration in `configs`.
pub fn verify_directory(dir: &Path, recursive: bool, configs: &[LzwConfig]) -> Result<SuiteReport> {
    let files = collect_files(dir, recursive)?;
    log::info!(
        "verifying {} files under {} with {} configurations",
        files.len(),
        dir.display(),
        configs.len()
    );

    let start = Instant::now();
    let reports: Vec<FileReport> = files
        .par_iter()
        .flat_map_iter(|path| configs.iter().map(move |config| verify_file(path, config)))
        .collect();

    Ok(SuiteReport {
        root: dir.to_path_buf(),
        reports,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CodeStreamKind;

    #[test]
    fn test_verify_bytes_passes() {
        let data = b"abracadabra abracadabra abracadabra".to_vec();
        for strategy in CodeStreamKind::ALL {
            let result = verify_bytes(&data, &LzwConfig::default().with_strategy(strategy));
            assert!(result.outcome.is_pass(), "{strategy}: {}", result.outcome);
            assert_eq!(result.original_size, data.len() as u64);
            assert!(result.compressed_size > 0);
        }
    }

    #[test]
    fn test_empty_input_has_no_ratio() {
        let result = verify_bytes(&[], &LzwConfig::default());
        assert!(result.outcome.is_pass());
        assert_eq!(result.ratio_percent(), None);
        assert_eq!(result.bits_per_byte(), None);
        assert_eq!(result.ratio_text(), "???");
    }

    #[test]
    fn test_ratio_and_bits_per_byte() {
        let result = RoundTrip {
            original_size: 200,
            compressed_size: 50,
            outcome: RoundTripOutcome::Passed,
        };
        assert_eq!(result.ratio_percent(), Some(25));
        assert_eq!(result.bits_per_byte(), Some(2.0));
        assert_eq!(result.bits_per_byte_text(), " 2.00");
    }

    #[test]
    fn test_compare_outcomes() {
        assert_eq!(compare(b"abc", b"abc"), RoundTripOutcome::Passed);
        assert_eq!(
            compare(b"abc", b"ab"),
            RoundTripOutcome::SizeMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(compare(b"abc", b"abd"), RoundTripOutcome::CompareFail { offset: 2 });
    }

    #[test]
    fn test_invalid_config_is_reported_not_raised() {
        let config = LzwConfig::new(CodeStreamKind::Fixed16, 1 << 20);
        let result = verify_bytes(b"data", &config);
        assert!(matches!(result.outcome, RoundTripOutcome::Failed(_)));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let report = verify_file(Path::new("/definitely/not/here.bin"), &LzwConfig::default());
        assert!(matches!(report.result.outcome, RoundTripOutcome::Failed(_)));
        assert_eq!(report.base_name(), "here.bin");
    }

    #[test]
    fn test_elapsed_formatting() {
        let suite = SuiteReport {
            root: PathBuf::from("."),
            reports: Vec::new(),
            elapsed: Duration::from_secs(3 * 3600 + 25 * 60 + 7),
        };
        assert_eq!(suite.elapsed_hms(), "03:25:07");
        assert!(suite.all_passed());
        assert!(suite.to_table().contains("Elapsed time: 03:25:07"));
        assert!(suite.to_tsv().starts_with("Full Name\tBase Name\t"));
    }
}
