// Syllabifier: the engine facade running tokenize -> classify -> group ->
// reassemble over one immutable configuration.
//
// The whole pipeline is pure: a `Syllabifier` is read-only after
// construction and safe to share across threads for batch work.

use crate::character;
use crate::classifier::classify;
use crate::config::AlphabetConfig;
use crate::skeleton::{Skeleton, group};
use crate::tokenizer::tokenize;

/// What to do with graphemes no skeleton covers (a consonant run with no
/// adjacent vowel, or input outside the configured alphabet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UncoveredPolicy {
    /// Return an error naming every dropped grapheme.
    #[default]
    Reject,
    /// Emit each maximal uncovered run as a syllable of its own, in
    /// positional order.
    Isolate,
}

/// Configuration options for the syllabifier.
#[derive(Debug, Clone, Copy)]
pub struct SyllabifierOptions {
    /// When true, exception matching and classification run against a
    /// simple-lowercased copy of the word while the emitted syllables keep
    /// the original characters. Configured graphemes are expected in
    /// lowercase when this is on.
    pub fold_case: bool,

    /// Handling of graphemes no skeleton covers.
    pub uncovered: UncoveredPolicy,
}

impl Default for SyllabifierOptions {
    fn default() -> Self {
        Self {
            fold_case: true,
            uncovered: UncoveredPolicy::Reject,
        }
    }
}

/// Error type for syllabification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllabifyError {
    /// Some graphemes were covered by no syllable skeleton. Raised only
    /// under [`UncoveredPolicy::Reject`]; the output is never silently
    /// truncated.
    #[error("no syllable covers graphemes {dropped:?} of word {word:?}")]
    UncoveredGraphemes {
        word: String,
        dropped: Vec<String>,
    },
}

/// Splits words into syllables using one immutable alphabet configuration.
pub struct Syllabifier {
    config: AlphabetConfig,
    options: SyllabifierOptions,
}

impl Syllabifier {
    /// Create a syllabifier with default options.
    pub fn new(config: AlphabetConfig) -> Self {
        Self::with_options(config, SyllabifierOptions::default())
    }

    /// Create a syllabifier with explicit options.
    pub fn with_options(config: AlphabetConfig, options: SyllabifierOptions) -> Self {
        Self { config, options }
    }

    /// The configuration this syllabifier reads.
    pub fn config(&self) -> &AlphabetConfig {
        &self.config
    }

    /// The current options.
    pub fn options(&self) -> &SyllabifierOptions {
        &self.options
    }

    /// Split one word into its ordered syllables.
    ///
    /// When every grapheme is classified, concatenating the result
    /// reproduces `word` exactly. An empty word yields no syllables.
    pub fn syllabify(&self, word: &str) -> Result<Vec<String>, SyllabifyError> {
        let (graphemes, tags) = if self.options.fold_case {
            let folded = character::lower_word(word);
            let folded_graphemes = tokenize(&folded, &self.config);
            let tags = classify(&folded_graphemes, &self.config);
            (original_graphemes(word, &folded_graphemes), tags)
        } else {
            let graphemes = tokenize(word, &self.config);
            let tags = classify(&graphemes, &self.config);
            (graphemes, tags)
        };

        let skeletons = group(&tags);
        reassemble(&graphemes, &skeletons, self.options.uncovered)
    }
}

/// Re-slice the original word along the folded grapheme boundaries.
///
/// `simple_lower` maps one char to one char, so the folded word and the
/// original always have the same character count and the token lengths
/// carry over directly.
fn original_graphemes(word: &str, folded_graphemes: &[String]) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut graphemes = Vec::with_capacity(folded_graphemes.len());
    let mut cursor = 0;
    for folded in folded_graphemes {
        let n = folded.chars().count();
        graphemes.push(chars[cursor..cursor + n].iter().collect());
        cursor += n;
    }
    graphemes
}

/// Rebuild concrete syllable strings from graphemes and skeletons.
///
/// Walks both sequences in lockstep; graphemes whose positions fall outside
/// every skeleton are uncovered and handled per `policy`. The skeletons
/// must come from [`group`] over the tags of these graphemes.
pub fn reassemble(
    graphemes: &[String],
    skeletons: &[Skeleton],
    policy: UncoveredPolicy,
) -> Result<Vec<String>, SyllabifyError> {
    let mut syllables = Vec::with_capacity(skeletons.len());
    let mut dropped: Vec<String> = Vec::new();

    let mut cursor = 0;
    for skeleton in skeletons {
        if cursor < skeleton.start() {
            uncovered_run(
                &graphemes[cursor..skeleton.start()],
                policy,
                &mut syllables,
                &mut dropped,
            );
        }
        syllables.push(graphemes[skeleton.start()..skeleton.end()].concat());
        cursor = skeleton.end();
    }
    if cursor < graphemes.len() {
        uncovered_run(&graphemes[cursor..], policy, &mut syllables, &mut dropped);
    }

    if dropped.is_empty() {
        Ok(syllables)
    } else {
        Err(SyllabifyError::UncoveredGraphemes {
            word: graphemes.concat(),
            dropped,
        })
    }
}

fn uncovered_run(
    run: &[String],
    policy: UncoveredPolicy,
    syllables: &mut Vec<String>,
    dropped: &mut Vec<String>,
) {
    match policy {
        UncoveredPolicy::Reject => dropped.extend(run.iter().cloned()),
        UncoveredPolicy::Isolate => syllables.push(run.concat()),
    }
}
