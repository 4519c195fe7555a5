//! Parallel keyspace search CLI
//!
//! Usage: keyspace_search <target-md5-hex> [options]
//!
//! Every candidate of the configured length is suffixed, hashed with MD5 and
//! compared against the target. Matches are printed to stdout as
//! `<shard> <candidate>`; progress goes to stderr.
//!
//! Example:
//!   keyspace_search 71b8148bf74bf8e40a00bd5385a47472
//!   keyspace_search <digest> --length 3 --lower 97 --upper 122 --suffix "@x" --workers 4

use keyspace_search::constants::{
    DEFAULT_LENGTH, DEFAULT_LOWER, DEFAULT_SUFFIX, DEFAULT_UPPER, DEFAULT_WORKERS,
};
use keyspace_search::{
    Alphabet, Digest, MatchSink, SearchConfig, SearchError, SearchSummary, ShardReport,
    search_with_progress,
};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, PartialEq)]
struct Args {
    target: String,
    length: usize,
    workers: usize,
    lower: u8,
    upper: u8,
    suffix: Vec<u8>,
    output: Option<PathBuf>,
    verbose: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <target> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <target>          Target MD5 digest (32 hex digits)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --length <N>      Candidate length (default: {})", DEFAULT_LENGTH);
    eprintln!("  --workers <N>     Number of parallel workers (default: {})", DEFAULT_WORKERS);
    eprintln!("  --lower <BYTE>    Lowest alphabet byte, 0-255 (default: {})", DEFAULT_LOWER);
    eprintln!("  --upper <BYTE>    Highest alphabet byte, 0-255 (default: {})", DEFAULT_UPPER);
    eprintln!(
        "  --suffix <TEXT>   Appended to each candidate before hashing (default: {})",
        String::from_utf8_lossy(DEFAULT_SUFFIX)
    );
    eprintln!("  --output <PATH>   Write matches to a file instead of stdout");
    eprintln!("  --verbose, -v     Print shard boundaries before searching");
    eprintln!("  --help, -h        Show this help message");
}

/// Parse command line arguments (without the program name)
///
/// Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut target: Option<String> = None;
    let mut parsed = Args {
        target: String::new(),
        length: DEFAULT_LENGTH,
        workers: DEFAULT_WORKERS,
        lower: DEFAULT_LOWER,
        upper: DEFAULT_UPPER,
        suffix: DEFAULT_SUFFIX.to_vec(),
        output: None,
        verbose: false,
    };

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--help" | "-h" => return Ok(None),
            "--verbose" | "-v" => parsed.verbose = true,
            "--length" | "--workers" | "--lower" | "--upper" | "--suffix" | "--output" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                match arg {
                    "--length" => parsed.length = parse_number(arg, value)?,
                    "--workers" => parsed.workers = parse_number(arg, value)?,
                    "--lower" => parsed.lower = parse_number(arg, value)?,
                    "--upper" => parsed.upper = parse_number(arg, value)?,
                    "--suffix" => parsed.suffix = value.as_bytes().to_vec(),
                    _ => parsed.output = Some(PathBuf::from(value)),
                }
            }
            value if !value.starts_with('-') => {
                if target.is_some() {
                    return Err(format!("Unexpected argument: {}", value));
                }
                target = Some(value.to_string());
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    parsed.target = target.ok_or("Missing target digest")?;
    Ok(Some(parsed))
}

fn parse_number<T: std::str::FromStr>(option: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", option, value))
}

fn build_config(args: &Args) -> Result<SearchConfig, String> {
    let target = Digest::from_hex(&args.target).map_err(|e| e.to_string())?;
    let alphabet = Alphabet::new(args.lower, args.upper).map_err(|e| e.to_string())?;

    let config = SearchConfig::new(target, args.length)
        .with_workers(args.workers)
        .with_alphabet(alphabet)
        .with_suffix(args.suffix.clone());
    config.validate().map_err(|e| e.to_string())?;

    Ok(config)
}

fn run<W: Write + Send>(
    config: &SearchConfig,
    sink: &MatchSink<W>,
) -> Result<SearchSummary, SearchError> {
    search_with_progress(config, sink, |report: &ShardReport| {
        eprintln!(
            "[Search] shard {} finished: {} candidates, {} match(es)",
            report.index, report.tested, report.matches
        );
    })
}

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().cloned().unwrap_or_default();

    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(Some(a)) => a,
        Ok(None) => {
            print_usage(&program);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program);
            std::process::exit(1);
        }
    };

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Target: {}", config.target);
    eprintln!(
        "Alphabet: [{}, {}], length {}, suffix '{}'",
        config.alphabet.lower(),
        config.alphabet.upper(),
        config.length,
        String::from_utf8_lossy(&config.suffix)
    );
    match config.keyspace_size() {
        Some(size) => eprintln!("Keyspace: {} candidates over {} workers", size, config.workers),
        None => eprintln!("Keyspace: too large to count, {} workers", config.workers),
    }

    if args.verbose {
        match config.shards() {
            Ok(shards) => {
                for shard in &shards {
                    eprintln!("{}", shard.describe());
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let start = Instant::now();

    let result = match &args.output {
        Some(path) => match MatchSink::create(path) {
            Ok(sink) => {
                eprintln!("Writing matches to {}", path.display());
                run(&config, &sink)
            }
            Err(e) => {
                eprintln!("Error: cannot create {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => run(&config, &MatchSink::stdout()),
    };

    let summary = match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let elapsed = start.elapsed();
    eprintln!();
    eprintln!(
        "Done! {} match(es), {} candidates in {:.2} seconds",
        summary.total_matches(),
        summary.total_tested(),
        elapsed.as_secs_f64()
    );
}
