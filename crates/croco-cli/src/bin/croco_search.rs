// croco-search: fuzzy dictionary lookup.
//
// Loads dictionary.txt and connection.txt from the data directory, then
// prints the ranked matches for each query word.
//
// Usage:
//   croco-search [-d DATA_DIR] [OPTIONS] [QUERY...]
//
// Options:
//   -d, --data-dir DIR        Directory containing dictionary.txt and connection.txt
//   -k, --max-distance N      Maximum edit distance (default: 2)
//   -n, --limit N             Print at most N matches per query
//   -v, --verbose             Debug logging on stderr
//   -h, --help                Print help

use std::io::{self, BufRead, Write};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) = croco_cli::parse_common(&args);

    if common.help {
        println!("croco-search: Fuzzy dictionary lookup.");
        println!();
        println!("Usage: croco-search [-d DATA_DIR] [OPTIONS] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, searches for each of them.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-dir DIR      Directory with dictionary.txt and connection.txt");
        println!("  -k, --max-distance N    Maximum edit distance (default: 2)");
        println!("  -n, --limit N           Print at most N matches per query");
        println!("  -v, --verbose           Debug logging on stderr");
        println!("  -h, --help              Print this help");
        return;
    }

    croco_cli::init_logging(common.verbose);

    let mut max_distance: u32 = 2;
    let mut limit: Option<usize> = None;
    let mut queries: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-k" | "--max-distance" => {
                max_distance = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| croco_cli::fatal("--max-distance requires a number"));
            }
            "-n" | "--limit" => {
                limit = Some(
                    iter.next()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or_else(|| croco_cli::fatal("--limit requires a number")),
                );
            }
            _ if !arg.starts_with('-') => queries.push(arg.clone()),
            _ => croco_cli::fatal(&format!("unknown option {arg}")),
        }
    }

    let handle = croco_cli::load_handle(common.data_dir.as_deref())
        .unwrap_or_else(|e| croco_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let run = |query: &str, out: &mut dyn Write| {
        let start = Instant::now();
        let matches = handle.search(query, max_distance);
        let shown = limit.unwrap_or(matches.len());
        for m in matches.iter().take(shown) {
            let _ = writeln!(out, "{}\t::{}", m.score, m.word);
        }
        eprintln!(
            "{query}: {} matches in {:.3} sec",
            matches.len(),
            start.elapsed().as_secs_f64()
        );
    };

    if queries.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            run(query, &mut out);
        }
    } else {
        for query in &queries {
            run(query.as_str(), &mut out);
        }
    }
}
