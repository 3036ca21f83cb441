// syllabe-cli: shared utilities for the syllabe binary.

use std::path::{Path, PathBuf};
use std::process;

use syllabe_core::{AlphabetConfig, french};

/// Default alphabet file name searched in the standard locations.
const ALPHABET_FILE: &str = "alphabet.toml";

/// Load the alphabet configuration.
///
/// Search order:
/// 1. `config_path` argument (if provided; an unreadable or invalid
///    explicit path is an error, not a fallthrough)
/// 2. `SYLLABE_CONFIG_PATH` environment variable
/// 3. `~/.config/syllabe/alphabet.toml`
/// 4. `/etc/syllabe/alphabet.toml`
/// 5. `./alphabet.toml`
/// 6. the built-in French alphabet
pub fn load_config(config_path: Option<&str>) -> Result<AlphabetConfig, String> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    for path in search_paths() {
        if path.is_file() {
            return read_config(&path);
        }
    }

    Ok(french::alphabet())
}

/// Read and validate one alphabet file.
fn read_config(path: &Path) -> Result<AlphabetConfig, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    AlphabetConfig::from_toml_str(&contents)
        .map_err(|e| format!("invalid alphabet file {}: {}", path.display(), e))
}

/// Build the list of candidate alphabet file locations.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("SYLLABE_CONFIG_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".config").join("syllabe").join(ALPHABET_FILE));
    }

    paths.push(PathBuf::from("/etc/syllabe").join(ALPHABET_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(ALPHABET_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--config=PATH`, `--config PATH` or `-c PATH` argument from
/// command line args.
///
/// Returns `(config_path, remaining_args)`.
pub fn parse_config_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut config_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--config=") {
            config_path = Some(val.to_string());
        } else if arg == "--config" || arg == "-c" {
            if i + 1 < args.len() {
                config_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (config_path, remaining)
}

/// Split one positional argument into whitespace-separated words.
///
/// Shell quoting can hand us `"deux mots"` as a single argument; each
/// embedded word is syllabified on its own.
pub fn argument_words(arg: &str) -> impl Iterator<Item = &str> {
    arg.split_whitespace()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
