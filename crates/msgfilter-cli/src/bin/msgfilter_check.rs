// msgfilter-check: Check messages from stdin against a banned-word list.
//
// Reads messages from stdin (one per line) and reports whether each one
// contains a banned word:
//   B: message    (blocked)
//   C: message    (clean)
//
// Usage:
//   msgfilter-check [-w WORDS] [-p POLICY] [OPTIONS]
//
// Options:
//   -w, --words PATH     Banned-word list, one word per line
//   -p, --policy PATH    Normalization policy (TOML)
//   -m, --matches        Also print the banned words each message contains
//   -v, --verbose        Log debug output to stderr
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = msgfilter_cli::parse_option(&args, "-w", "--words")
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));
    let (policy_path, args) = msgfilter_cli::parse_option(&args, "-p", "--policy")
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));

    if msgfilter_cli::wants_help(&args) {
        println!("msgfilter-check: Check messages from stdin against a banned-word list.");
        println!();
        println!("Usage: msgfilter-check [-w WORDS] [-p POLICY] [OPTIONS]");
        println!();
        println!("Reads messages from stdin (one per line). Prints:");
        println!("  B: message    (contains a banned word)");
        println!("  C: message    (clean)");
        println!();
        println!("Options:");
        println!("  -w, --words PATH    Banned-word list (default: $MSGFILTER_WORDS,");
        println!("                      ~/.msgfilter/banned.txt, ./banned.txt)");
        println!("  -p, --policy PATH   Normalization policy TOML (default: $MSGFILTER_POLICY)");
        println!("  -m, --matches       Also print M: word for each banned word found");
        println!("  -v, --verbose       Log debug output to stderr");
        println!("  -h, --help          Print this help");
        return;
    }

    let show_matches = msgfilter_cli::has_flag(&args, &["-m", "--matches"]);
    let verbose = msgfilter_cli::has_flag(&args, &["-v", "--verbose"]);
    msgfilter_cli::init_logging(verbose);

    let policy = msgfilter_cli::load_policy(policy_path.as_deref())
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));
    let filter = msgfilter_cli::load_filter(words_path.as_deref(), policy)
        .unwrap_or_else(|e| msgfilter_cli::fatal(&e));

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
        if line.trim().is_empty() {
            continue;
        }

        if show_matches {
            let matched = filter.matched_words(&line);
            let tag = if matched.is_empty() { 'C' } else { 'B' };
            let _ = writeln!(out, "{tag}: {line}");
            for word in matched {
                let _ = writeln!(out, "M: {word}");
            }
        } else if filter.check_message(&line) {
            let _ = writeln!(out, "B: {line}");
        } else {
            let _ = writeln!(out, "C: {line}");
        }
    }
}
