// msgfilter-normalize: Print the canonical form of each line from stdin.
//
// Usage:
//   msgfilter-normalize [-p POLICY]
//
// Options:
//   -p, --policy PATH    Normalization policy (TOML)
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use msgfilter::Normalizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (policy_path, args) = msgfilter_cli::parse_option(&args, "-p", "--policy")
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));

    if msgfilter_cli::wants_help(&args) {
        println!("msgfilter-normalize: Print the canonical form of each line from stdin.");
        println!();
        println!("Usage: msgfilter-normalize [-p POLICY]");
        println!();
        println!("Options:");
        println!("  -p, --policy PATH   Normalization policy TOML (default: $MSGFILTER_POLICY)");
        println!("  -h, --help          Print this help");
        return;
    }

    msgfilter_cli::init_logging(false);
    let policy = msgfilter_cli::load_policy(policy_path.as_deref())
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));
    let normalizer = Normalizer::new(policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let _ = writeln!(out, "{}", normalizer.normalize(&line));
    }
}
