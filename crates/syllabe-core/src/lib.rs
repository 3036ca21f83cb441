//! Configurable grapheme-based syllabification.
//!
//! The engine splits a word written in a configured alphabet into
//! linguistically plausible syllables. It is driven entirely by three
//! pieces of configuration: a vowel set, a consonant set, and an exception
//! table mapping multi-character graphemes (digraphs and the like) to an
//! explicit phonetic class.
//!
//! # Pipeline
//!
//! - [`tokenizer`] -- longest-match exception lookup with single-character
//!   fallback, partitioning the word into graphemes
//! - [`classifier`] -- one [`Tag`] per grapheme: exception table first,
//!   then the vowel and consonant sets
//! - [`skeleton`] -- greedy `C*VC*` grouping plus the onset-maximization
//!   shift
//! - [`syllabifier`] -- the [`Syllabifier`] facade and the reassembly step
//!   that turns skeletons back into substrings
//!
//! Everything is pure and allocation-local; a [`Syllabifier`] is immutable
//! after construction and can be shared across threads.
//!
//! ```
//! use syllabe_core::{Syllabifier, french};
//!
//! let syllabifier = Syllabifier::new(french::alphabet());
//! let syllables = syllabifier.syllabify("chateau").unwrap();
//! assert_eq!(syllables, vec!["cha", "teau"]);
//! ```

pub mod character;
pub mod classifier;
pub mod config;
pub mod french;
pub mod skeleton;
pub mod syllabifier;
pub mod tag;
pub mod tokenizer;

pub use classifier::{classify, classify_grapheme};
pub use config::{AlphabetConfig, AlphabetDoc, ConfigError};
pub use skeleton::{Skeleton, group};
pub use syllabifier::{
    Syllabifier, SyllabifierOptions, SyllabifyError, UncoveredPolicy, reassemble,
};
pub use tag::Tag;
pub use tokenizer::tokenize;
