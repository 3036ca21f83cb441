// Alphabet configuration: vowel set, consonant set, exception table.
//
// Configuration is loaded once, validated, and then read-only for the
// lifetime of the engine. The raw document form (`AlphabetDoc`) is a plain
// serde struct so callers may parse it from any serde format; the TOML
// helpers cover the format the `syllabe` binary ships with.

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Error type for alphabet configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document could not be parsed. Missing required keys
    /// (`vowels`, `consonants`, `exceptions`) surface here as well;
    /// they are never silently defaulted.
    #[error("failed to parse alphabet configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// An exception maps to something other than `"V"` or `"C"`.
    #[error("exception {key:?} maps to unsupported class marker {value:?} (expected \"V\" or \"C\")")]
    BadClassMarker { key: String, value: String },

    /// The exception table contains an empty key.
    #[error("exception table contains an empty key")]
    EmptyExceptionKey,
}

/// Raw document form of an alphabet configuration.
///
/// All three keys are required. Exception values are single-letter class
/// markers: `"V"` marks the grapheme as a vowel, `"C"` as a consonant.
/// A `BTreeMap` keeps the serialized exception table in a stable order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlphabetDoc {
    pub vowels: Vec<String>,
    pub consonants: Vec<String>,
    pub exceptions: BTreeMap<String, String>,
}

/// Validated alphabet configuration used by the engine.
///
/// Exception keys may be any length >= 1 and may overlap with the vowel and
/// consonant sets; the exception tag wins during classification. The
/// invariant that the vowel and consonant sets are disjoint is the caller's
/// responsibility and is not checked here.
#[derive(Debug, Clone)]
pub struct AlphabetConfig {
    vowels: HashSet<String>,
    consonants: HashSet<String>,
    exceptions: HashMap<String, Tag>,
}

impl AlphabetConfig {
    /// Validate a raw document into a usable configuration.
    pub fn from_doc(doc: AlphabetDoc) -> Result<Self, ConfigError> {
        let mut exceptions = HashMap::with_capacity(doc.exceptions.len());
        for (key, value) in doc.exceptions {
            if key.is_empty() {
                return Err(ConfigError::EmptyExceptionKey);
            }
            let tag = Tag::from_class_marker(&value)
                .ok_or(ConfigError::BadClassMarker { key: key.clone(), value })?;
            exceptions.insert(key, tag);
        }
        Ok(Self {
            vowels: doc.vowels.into_iter().collect(),
            consonants: doc.consonants.into_iter().collect(),
            exceptions,
        })
    }

    /// Parse and validate a TOML alphabet document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let doc: AlphabetDoc = toml::from_str(input)?;
        Self::from_doc(doc)
    }

    /// Build a configuration directly from in-memory parts. Intended for
    /// built-in alphabets and tests; performs no marker validation since
    /// tags are already typed.
    pub fn from_parts<V, C, E, S, T>(vowels: V, consonants: C, exceptions: E) -> Self
    where
        V: IntoIterator<Item = S>,
        C: IntoIterator<Item = S>,
        E: IntoIterator<Item = (T, Tag)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            vowels: vowels.into_iter().map(Into::into).collect(),
            consonants: consonants.into_iter().map(Into::into).collect(),
            exceptions: exceptions
                .into_iter()
                .map(|(k, t)| (k.into(), t))
                .collect(),
        }
    }

    /// True if the grapheme is in the vowel set.
    pub fn is_vowel(&self, grapheme: &str) -> bool {
        self.vowels.contains(grapheme)
    }

    /// True if the grapheme is in the consonant set.
    pub fn is_consonant(&self, grapheme: &str) -> bool {
        self.consonants.contains(grapheme)
    }

    /// The exception tag for a grapheme, if one is configured.
    pub fn exception_tag(&self, grapheme: &str) -> Option<Tag> {
        self.exceptions.get(grapheme).copied()
    }

    /// True if the grapheme is a key of the exception table.
    pub fn is_exception(&self, grapheme: &str) -> bool {
        self.exceptions.contains_key(grapheme)
    }

    /// Number of configured exceptions.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Convert back into the raw document form, with entries sorted so the
    /// serialized output is stable.
    pub fn to_doc(&self) -> AlphabetDoc {
        let mut vowels: Vec<String> = self.vowels.iter().cloned().collect();
        vowels.sort();
        let mut consonants: Vec<String> = self.consonants.iter().cloned().collect();
        consonants.sort();
        let exceptions = self
            .exceptions
            .iter()
            .filter_map(|(k, t)| t.class_marker().map(|m| (k.clone(), m.to_string())))
            .collect();
        AlphabetDoc {
            vowels,
            consonants,
            exceptions,
        }
    }

    /// Serialize as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.to_doc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
vowels = ["a", "e", "i"]
consonants = ["b", "c", "d"]

[exceptions]
ch = "C"
au = "V"
"#;

    #[test]
    fn parse_sample() {
        let config = AlphabetConfig::from_toml_str(SAMPLE).unwrap();
        assert!(config.is_vowel("a"));
        assert!(!config.is_vowel("b"));
        assert!(config.is_consonant("b"));
        assert_eq!(config.exception_tag("ch"), Some(Tag::Consonant));
        assert_eq!(config.exception_tag("au"), Some(Tag::Vowel));
        assert_eq!(config.exception_tag("zz"), None);
        assert_eq!(config.exception_count(), 2);
    }

    #[test]
    fn missing_key_is_an_error() {
        // No `exceptions` table: must be rejected, not defaulted to empty.
        let input = "vowels = [\"a\"]\nconsonants = [\"b\"]\n";
        assert!(matches!(
            AlphabetConfig::from_toml_str(input),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_vowels_is_an_error() {
        let input = "consonants = [\"b\"]\n[exceptions]\n";
        assert!(matches!(
            AlphabetConfig::from_toml_str(input),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn bad_class_marker_is_rejected() {
        let input = "vowels = [\"a\"]\nconsonants = [\"b\"]\n[exceptions]\nch = \"X\"\n";
        match AlphabetConfig::from_toml_str(input) {
            Err(ConfigError::BadClassMarker { key, value }) => {
                assert_eq!(key, "ch");
                assert_eq!(value, "X");
            }
            other => panic!("expected BadClassMarker, got {other:?}"),
        }
    }

    #[test]
    fn lowercase_marker_is_rejected() {
        let input = "vowels = [\"a\"]\nconsonants = [\"b\"]\n[exceptions]\nch = \"c\"\n";
        assert!(matches!(
            AlphabetConfig::from_toml_str(input),
            Err(ConfigError::BadClassMarker { .. })
        ));
    }

    #[test]
    fn empty_exception_key_is_rejected() {
        let input = "vowels = [\"a\"]\nconsonants = [\"b\"]\n[exceptions]\n\"\" = \"V\"\n";
        assert!(matches!(
            AlphabetConfig::from_toml_str(input),
            Err(ConfigError::EmptyExceptionKey)
        ));
    }

    #[test]
    fn exception_keys_may_overlap_letter_sets() {
        // "u" is both a vowel and an exception key; the exception tag wins
        // at classification time, so both lookups must report it.
        let config = AlphabetConfig::from_parts(
            ["a", "u"],
            ["b"],
            [("u", Tag::Consonant)],
        );
        assert!(config.is_vowel("u"));
        assert_eq!(config.exception_tag("u"), Some(Tag::Consonant));
    }

    #[test]
    fn toml_round_trip() {
        let config = AlphabetConfig::from_toml_str(SAMPLE).unwrap();
        let serialized = config.to_toml_string().unwrap();
        let reparsed = AlphabetConfig::from_toml_str(&serialized).unwrap();
        assert!(reparsed.is_vowel("a"));
        assert!(reparsed.is_consonant("d"));
        assert_eq!(reparsed.exception_tag("ch"), Some(Tag::Consonant));
        assert_eq!(reparsed.exception_count(), 2);
    }
}
