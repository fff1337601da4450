// msgfilter-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use msgfilter::{FilterError, MessageFilter, NormalizationPolicy};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Word list file name looked up in the default locations.
const WORDS_FILE: &str = "banned.txt";

/// Per-user configuration directory under `$HOME`.
const CONFIG_DIR: &str = ".msgfilter";

/// Load a banned-word list and build a filter from it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `MSGFILTER_WORDS` environment variable
/// 3. `~/.msgfilter/banned.txt`
/// 4. `banned.txt` in the current working directory
pub fn load_filter(
    words_path: Option<&str>,
    policy: NormalizationPolicy,
) -> Result<MessageFilter, String> {
    let search_paths = build_search_paths(words_path);

    for path in &search_paths {
        if path.is_file() {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            let mut filter = MessageFilter::with_policy(policy);
            let added = ban_word_list(&mut filter, &text, path)
                .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
            debug!(path = %path.display(), added, "loaded word list");
            return Ok(filter);
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Ban every entry of a word list (one word per line).
///
/// Blank lines and lines starting with `#` are skipped. Entries with no
/// letters or digits are skipped with a warning. The remaining entries are
/// banned in one call, so the match index is built once. Returns the number
/// of words that were newly banned.
pub fn ban_word_list(
    filter: &mut MessageFilter,
    text: &str,
    source: &Path,
) -> Result<usize, FilterError> {
    let mut words = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        if filter.normalize(word).is_empty() {
            warn!(
                file = %source.display(),
                line = lineno + 1,
                "skipping entry {word:?}: no letters or digits"
            );
            continue;
        }
        words.push(word);
    }
    filter.ban_words(words)
}

/// Load a normalization policy from a TOML file.
///
/// Uses `policy_path` if given, else `MSGFILTER_POLICY`. With neither set
/// the default policy is returned.
pub fn load_policy(policy_path: Option<&str>) -> Result<NormalizationPolicy, String> {
    let path = match policy_path {
        Some(p) => PathBuf::from(p),
        None => match std::env::var("MSGFILTER_POLICY") {
            Ok(p) => PathBuf::from(p),
            Err(_) => return Ok(NormalizationPolicy::default()),
        },
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_policy(&text).map_err(|e| format!("invalid policy in {}: {}", path.display(), e))
}

/// Parse a TOML policy document.
pub fn parse_policy(text: &str) -> Result<NormalizationPolicy, toml::de::Error> {
    toml::from_str(text)
}

/// Build the list of files to search for a word list.
fn build_search_paths(words_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = words_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("MSGFILTER_WORDS") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(CONFIG_DIR).join(WORDS_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--long=VALUE`, `--long VALUE` or `-s VALUE` option.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn parse_option(
    args: &[String],
    short: &str,
    long: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Check if any of `names` is in the args.
pub fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|a| names.contains(&a.as_str()))
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` when verbose.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    has_flag(args, &["--help", "-h"])
}
