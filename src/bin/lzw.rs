/// Compress or decompress a single stream.
///
/// Usage:
///   lzw [-max max_code] [-s strategy] -c [input|-] [output]
///   lzw [-max max_code] [-s strategy] -d [input|-] [output]
///
/// A missing input (or `-`) reads stdin, a missing output writes stdout.
/// Strategies: text, fixed16, fixed, adaptive (default).

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use lzwrs::{compress, decompress, CodeStreamKind, LzwConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compress,
    Decompress,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    config: LzwConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  lzw [-max max_code] [-s strategy] -c [input|-] [output]");
    eprintln!("  lzw [-max max_code] [-s strategy] -d [input|-] [output]");
    eprintln!();
    eprintln!("Strategies: text, fixed16, fixed, adaptive (default)");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> std::result::Result<Args, String> {
    let mut mode = None;
    let mut config = LzwConfig::default();
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-max" => {
                let value = iter.next().ok_or("-max needs a value")?;
                config.max_code = value
                    .parse()
                    .map_err(|_| format!("invalid max code: {value}"))?;
            }
            "-s" => {
                let value = iter.next().ok_or("-s needs a value")?;
                config.strategy = value.parse::<CodeStreamKind>().map_err(|e| e.to_string())?;
            }
            "-c" => mode = Some(Mode::Compress),
            "-d" => mode = Some(Mode::Decompress),
            "-" => positional.push(arg.clone()),
            other if other.starts_with('-') => return Err(format!("unknown option: {other}")),
            _ => positional.push(arg.clone()),
        }
    }

    let mode = mode.ok_or("one of -c or -d is required")?;
    if positional.len() > 2 {
        return Err("too many arguments".to_string());
    }
    let mut positional = positional.into_iter();
    let input = positional.next().filter(|p| p != "-").map(PathBuf::from);
    let output = positional.next().map(PathBuf::from);

    Ok(Args {
        mode,
        config,
        input,
        output,
    })
}

fn run(args: Args) -> Result<()> {
    args.config.validate()?;

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let LzwConfig { strategy, max_code } = args.config;
    let summary = match args.mode {
        Mode::Compress => {
            compress(input, output, strategy, max_code).context("compression failed")?
        }
        Mode::Decompress => {
            decompress(input, output, strategy, max_code).context("decompression failed")?
        }
    };

    log::info!(
        "{} bytes, {} codes, {} dictionary entries",
        summary.symbols,
        summary.codes,
        summary.dictionary_size
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("lzw: {msg}");
            usage();
        }
    };

    if let Err(e) = run(args) {
        eprintln!("lzw: {e:#}");
        std::process::exit(1);
    }
}
