// Class classifier: one phonetic tag per grapheme.

use crate::config::AlphabetConfig;
use crate::tag::Tag;

/// Classify a single grapheme.
///
/// Resolution order: the exception table first (its tag wins even when the
/// grapheme is also in a letter set), then the vowel set, then the
/// consonant set. A grapheme matching none of the three is `Unclassified`.
pub fn classify_grapheme(grapheme: &str, config: &AlphabetConfig) -> Tag {
    if let Some(tag) = config.exception_tag(grapheme) {
        return tag;
    }
    if config.is_vowel(grapheme) {
        return Tag::Vowel;
    }
    if config.is_consonant(grapheme) {
        return Tag::Consonant;
    }
    Tag::Unclassified
}

/// Classify a grapheme sequence, order-preserving, one tag per grapheme.
pub fn classify(graphemes: &[String], config: &AlphabetConfig) -> Vec<Tag> {
    graphemes
        .iter()
        .map(|g| classify_grapheme(g, config))
        .collect()
}
