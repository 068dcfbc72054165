/// Round-trip every file in a directory and report the results.
///
/// Usage:
///   lzw_verify [-max max_code] [-s strategy|all] [-r] [--tsv] <directory>
///
/// Each file is compressed, decompressed and compared with the original.
/// Exits with status 1 if any file fails.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lzwrs::report::verify_directory;
use lzwrs::{CodeStreamKind, LzwConfig, DEFAULT_MAX_CODE};

#[derive(Debug)]
struct Args {
    configs: Vec<LzwConfig>,
    recursive: bool,
    tsv: bool,
    dir: PathBuf,
}

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  lzw_verify [-max max_code] [-s strategy|all] [-r] [--tsv] <directory>");
    eprintln!();
    eprintln!("Strategies: text, fixed16, fixed, adaptive (default), all");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> std::result::Result<Args, String> {
    let mut max_code = DEFAULT_MAX_CODE;
    let mut strategies = vec![CodeStreamKind::default()];
    let mut recursive = false;
    let mut tsv = false;
    let mut dir = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-max" => {
                let value = iter.next().ok_or("-max needs a value")?;
                max_code = value
                    .parse()
                    .map_err(|_| format!("invalid max code: {value}"))?;
            }
            "-s" => {
                let value = iter.next().ok_or("-s needs a value")?;
                strategies = if value == "all" {
                    CodeStreamKind::ALL.to_vec()
                } else {
                    vec![value.parse::<CodeStreamKind>().map_err(|e| e.to_string())?]
                };
            }
            "-r" => recursive = true,
            "--tsv" => tsv = true,
            other if other.starts_with('-') => return Err(format!("unknown option: {other}")),
            other => {
                if dir.replace(PathBuf::from(other)).is_some() {
                    return Err("only one directory may be given".to_string());
                }
            }
        }
    }

    let dir = dir.ok_or("a directory is required")?;
    let configs = strategies
        .into_iter()
        .map(|s| LzwConfig::new(s, max_code))
        .collect();

    Ok(Args {
        configs,
        recursive,
        tsv,
        dir,
    })
}

fn run(args: &Args) -> Result<bool> {
    for config in &args.configs {
        config.validate()?;
    }

    let suite = verify_directory(&args.dir, args.recursive, &args.configs)
        .with_context(|| format!("cannot scan {}", args.dir.display()))?;

    if args.tsv {
        print!("{}", suite.to_tsv());
    } else {
        print!("{}", suite.to_table());
    }
    Ok(suite.all_passed())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("lzw_verify: {msg}");
            usage();
        }
    };

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("lzw_verify: {e:#}");
            std::process::exit(1);
        }
    }
}
