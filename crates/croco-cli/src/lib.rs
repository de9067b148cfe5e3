// croco-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use croco_trie::CrocoHandle;
use tracing::Level;

/// Dictionary file name inside the data directory.
const DICTIONARY_FILE: &str = "dictionary.txt";

/// Connection cost file name inside the data directory.
const CONNECTION_FILE: &str = "connection.txt";

/// Install the stderr log subscriber.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Locate the data directory.
///
/// Search order:
/// 1. `data_dir` argument (if provided)
/// 2. `CROCO_DATA_PATH` environment variable
/// 3. `./data`
pub fn resolve_data_dir(data_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = data_dir {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("CROCO_DATA_PATH") {
        return PathBuf::from(dir);
    }
    PathBuf::from("data")
}

/// Load the dictionary and connection cost table from `data_dir`.
///
/// Progress and elapsed time for each phase are written to stderr. A missing
/// dictionary is fatal; a missing cost table leaves all costs at 0.
pub fn load_handle(data_dir: Option<&str>) -> Result<CrocoHandle, String> {
    let dir = resolve_data_dir(data_dir);
    let mut handle = CrocoHandle::new();

    let dict_path = dir.join(DICTIONARY_FILE);
    eprintln!("loading dictionary {}", dict_path.display());
    let start = Instant::now();
    let summary = handle
        .load_dictionary(&dict_path)
        .map_err(|e| e.to_string())?;
    eprintln!(
        "loaded {} entries ({} skipped) in {:.3} sec",
        summary.loaded,
        summary.skipped,
        start.elapsed().as_secs_f64()
    );

    let cost_path = dir.join(CONNECTION_FILE);
    eprintln!("loading connection costs {}", cost_path.display());
    let start = Instant::now();
    match handle.load_cost_table(&cost_path) {
        Ok(summary) => eprintln!(
            "loaded {} costs ({} skipped) in {:.3} sec",
            summary.loaded,
            summary.skipped,
            start.elapsed().as_secs_f64()
        ),
        Err(e) => tracing::warn!(error = %e, "continuing without connection costs"),
    }

    Ok(handle)
}

/// Command-line options shared by all tools.
#[derive(Debug, Default)]
pub struct CommonArgs {
    pub data_dir: Option<String>,
    pub verbose: bool,
    pub help: bool,
}

/// Extract `-d/--data-dir`, `-v/--verbose` and `-h/--help` from `args`.
///
/// Returns the common options and the remaining arguments.
pub fn parse_common(args: &[String]) -> (CommonArgs, Vec<String>) {
    let mut common = CommonArgs::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--data-dir=") {
            common.data_dir = Some(val.to_string());
        } else if arg == "--data-dir" || arg == "-d" {
            match iter.next() {
                Some(val) => common.data_dir = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else if arg == "-v" || arg == "--verbose" {
            common.verbose = true;
        } else if arg == "-h" || arg == "--help" {
            common.help = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    (common, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
