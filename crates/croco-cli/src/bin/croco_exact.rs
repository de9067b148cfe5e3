// croco-exact: exact dictionary lookup.
//
// Prints each query followed by the stored word it resolves to, or
// "(no match)".
//
// Usage:
//   croco-exact [-d DATA_DIR] [-v] [WORD...]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, words) = croco_cli::parse_common(&args);

    if common.help {
        println!("croco-exact: Exact dictionary lookup.");
        println!();
        println!("Usage: croco-exact [-d DATA_DIR] [-v] [WORD...]");
        println!();
        println!("If WORD arguments are given, looks up each word.");
        println!("Otherwise reads words from stdin (one per line).");
        return;
    }

    croco_cli::init_logging(common.verbose);

    let handle = croco_cli::load_handle(common.data_dir.as_deref())
        .unwrap_or_else(|e| croco_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut lookup = |word: &str| {
        let matches = handle.exact_match(word);
        match matches.first() {
            Some(m) => {
                let _ = writeln!(out, "{word}\t{}", m.word);
            }
            None => {
                let _ = writeln!(out, "{word}\t(no match)");
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if !word.is_empty() {
                lookup(word);
            }
        }
    } else {
        for word in &words {
            lookup(word.as_str());
        }
    }
}
