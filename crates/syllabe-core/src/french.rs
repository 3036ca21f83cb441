// Built-in French alphabet.
//
// This is the default configuration the command-line tool falls back to
// when no alphabet file is found, and the alphabet the benchmarks run on.
// Graphemes are lowercase; pair it with case folding.

use crate::config::AlphabetConfig;
use crate::tag::Tag;

/// French vowels, accented forms and ligatures included.
const FRENCH_VOWELS: &[&str] = &[
    "a", "e", "i", "o", "u", "y",
    "\u{00E0}", // à
    "\u{00E2}", // â
    "\u{00E9}", // é
    "\u{00E8}", // è
    "\u{00EA}", // ê
    "\u{00EB}", // ë
    "\u{00EE}", // î
    "\u{00EF}", // ï
    "\u{00F4}", // ô
    "\u{00F9}", // ù
    "\u{00FB}", // û
    "\u{00FC}", // ü
    "\u{00FF}", // ÿ
    "\u{0153}", // œ
    "\u{00E6}", // æ
];

/// French consonants.
const FRENCH_CONSONANTS: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "w", "x",
    "z", "\u{00E7}", // ç
];

/// Multi-character graphemes that read as a single phonetic unit.
///
/// Only combinations that are one unit in (nearly) every context are
/// listed. Nasal digraphs such as "an" or "on" are deliberately absent:
/// tagging them as one vowel would steal the consonant that often belongs
/// to the following syllable's onset ("banane" would lose its middle
/// syllable boundary).
const FRENCH_EXCEPTIONS: &[(&str, Tag)] = &[
    // Consonant digraphs
    ("ch", Tag::Consonant),
    ("ph", Tag::Consonant),
    ("th", Tag::Consonant),
    ("gn", Tag::Consonant),
    ("qu", Tag::Consonant),
    // Vowel digraphs and trigraphs
    ("ou", Tag::Vowel),
    ("au", Tag::Vowel),
    ("eau", Tag::Vowel),
    ("ai", Tag::Vowel),
    ("ei", Tag::Vowel),
    ("eu", Tag::Vowel),
    ("oi", Tag::Vowel),
    ("\u{0153}u", Tag::Vowel), // œu
];

/// The built-in French alphabet configuration.
pub fn alphabet() -> AlphabetConfig {
    AlphabetConfig::from_parts(
        FRENCH_VOWELS.iter().copied(),
        FRENCH_CONSONANTS.iter().copied(),
        FRENCH_EXCEPTIONS.iter().map(|&(key, tag)| (key, tag)),
    )
}
