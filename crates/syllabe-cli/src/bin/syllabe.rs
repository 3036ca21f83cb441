// syllabe: split words into syllables.
//
// Each WORD argument is syllabified against the active alphabet; an
// argument containing whitespace is split into separate words first.
// Invoking with no words prints usage.
//
// Usage:
//   syllabe [-c CONFIG_PATH] [OPTIONS] WORD [WORD...]
//
// Options:
//   -c, --config PATH      Alphabet configuration file (TOML)
//   --separator SEP        Print syllables joined by SEP instead of a list
//   --json                 Print one JSON object per word
//   --strict               Fail words with graphemes outside the alphabet
//                          instead of passing them through
//   --keep-case            Do not lowercase words before classification
//   --init-config PATH     Write the built-in French alphabet to PATH and exit
//   -h, --help             Print help

use std::io::{self, Write};

use syllabe_core::{Syllabifier, SyllabifierOptions, UncoveredPolicy, french};

fn print_usage() {
    println!("syllabe: split words into syllables.");
    println!();
    println!("Usage: syllabe [-c CONFIG_PATH] [OPTIONS] WORD [WORD...]");
    println!();
    println!("Words are matched against an alphabet configuration: a vowel set,");
    println!("a consonant set and an exception table of multi-letter graphemes.");
    println!("Without -c, the standard locations are searched and the built-in");
    println!("French alphabet is the fallback.");
    println!();
    println!("Options:");
    println!("  -c, --config PATH      Alphabet configuration file (TOML)");
    println!("  --separator SEP        Print syllables joined by SEP instead of a list");
    println!("  --json                 Print one JSON object per word");
    println!("  --strict               Fail words with graphemes outside the alphabet");
    println!("  --keep-case            Do not lowercase words before classification");
    println!("  --init-config PATH     Write the built-in French alphabet to PATH and exit");
    println!("  -h, --help             Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = syllabe_cli::parse_config_path(&args);

    if syllabe_cli::wants_help(&args) {
        print_usage();
        return;
    }

    let mut separator: Option<String> = None;
    let mut json = false;
    let mut strict = false;
    let mut keep_case = false;
    let mut init_config: Option<String> = None;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => {
                if i + 1 < args.len() {
                    separator = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    syllabe_cli::fatal("--separator requires a value");
                }
            }
            "--json" => json = true,
            "--strict" => strict = true,
            "--keep-case" => keep_case = true,
            "--init-config" => {
                if i + 1 < args.len() {
                    init_config = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    syllabe_cli::fatal("--init-config requires a value");
                }
            }
            s if !s.starts_with('-') => {
                // An argument may carry several whitespace-separated words.
                for word in syllabe_cli::argument_words(s) {
                    words.push(word.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(path) = init_config {
        write_default_config(&path);
        return;
    }

    if words.is_empty() {
        print_usage();
        return;
    }

    let config =
        syllabe_cli::load_config(config_path.as_deref()).unwrap_or_else(|e| syllabe_cli::fatal(&e));

    let options = SyllabifierOptions {
        fold_case: !keep_case,
        uncovered: if strict {
            UncoveredPolicy::Reject
        } else {
            UncoveredPolicy::Isolate
        },
    };
    let syllabifier = Syllabifier::with_options(config, options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for word in &words {
        match syllabifier.syllabify(word) {
            Ok(syllables) => print_word(&mut out, word, &syllables, separator.as_deref(), json),
            Err(e) => {
                // One word's failure never aborts the rest of the batch.
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}

fn print_word(
    out: &mut impl Write,
    word: &str,
    syllables: &[String],
    separator: Option<&str>,
    json: bool,
) {
    if json {
        let value = serde_json::json!({ "word": word, "syllables": syllables });
        let _ = writeln!(out, "{value}");
    } else if let Some(sep) = separator {
        let _ = writeln!(out, "{}", syllables.join(sep));
    } else {
        let _ = writeln!(out, "{} => [{}]", word, syllables.join(", "));
    }
}

/// Write the built-in French alphabet as a TOML template.
fn write_default_config(path: &str) {
    let toml = french::alphabet()
        .to_toml_string()
        .unwrap_or_else(|e| syllabe_cli::fatal(&format!("failed to serialize alphabet: {e}")));
    std::fs::write(path, toml)
        .unwrap_or_else(|e| syllabe_cli::fatal(&format!("failed to write {path}: {e}")));
    println!("wrote default French alphabet to {path}");
}
