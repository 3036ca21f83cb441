// Grapheme tokenizer: longest-match exception lookup with single-character
// fallback.
//
// The scan holds the start position fixed and truncates the candidate from
// its right end, trying the full remaining tail first. This is NOT a
// trie-based longest-prefix matcher: the two differ when exception keys of
// different lengths can start at the same position but only some are true
// prefixes of the remaining tail, so the right-truncation loop is kept
// literal.

use crate::config::AlphabetConfig;

/// Split a word into graphemes.
///
/// At each cursor position the longest right-truncation of the remaining
/// tail that is an exception key is accepted as one grapheme, and the
/// cursor jumps past every character it covers. If no truncation matches,
/// the single character at the cursor is the grapheme. A single-character
/// exception still wins at its position since the membership test runs
/// before the length-1 fallback.
///
/// The returned graphemes concatenate to `word` exactly; an empty word
/// yields an empty sequence.
pub fn tokenize(word: &str, config: &AlphabetConfig) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut graphemes = Vec::with_capacity(len);

    let mut j = 0;
    while j < len {
        let mut candidate: String = chars[j..].iter().collect();
        let mut clen = len - j;
        while clen > 1 && !config.is_exception(&candidate) {
            candidate.pop();
            clen -= 1;
        }
        // Either an exception matched, or the candidate shrank to the
        // single character at the cursor (exception or not, it is the
        // grapheme either way).
        graphemes.push(candidate);
        j += clen;
    }

    graphemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    fn config(exceptions: &[&str]) -> AlphabetConfig {
        AlphabetConfig::from_parts(
            ["a", "e"],
            ["b", "c"],
            exceptions.iter().map(|&k| (k, Tag::Consonant)),
        )
    }

    #[test]
    fn empty_word() {
        assert!(tokenize("", &config(&[])).is_empty());
    }

    #[test]
    fn single_character_word() {
        assert_eq!(tokenize("a", &config(&[])), vec!["a"]);
    }

    #[test]
    fn no_exceptions_splits_per_character() {
        assert_eq!(tokenize("abc", &config(&[])), vec!["a", "b", "c"]);
    }

    #[test]
    fn exception_consumes_multiple_characters() {
        assert_eq!(tokenize("chat", &config(&["ch"])), vec!["ch", "a", "t"]);
    }

    #[test]
    fn longest_exception_wins_at_start_position() {
        // Both "ea" and "eau" are keys; the scan tries the longer
        // truncation first, so "eau" wins.
        assert_eq!(tokenize("eaux", &config(&["ea", "eau"])), vec!["eau", "x"]);
    }

    #[test]
    fn full_tail_is_tried_first() {
        // The whole remaining word is itself a key.
        assert_eq!(tokenize("eau", &config(&["eau"])), vec!["eau"]);
    }

    #[test]
    fn exception_matches_only_where_it_begins() {
        // "ab" is a key but the scan at position 0 sees "cab", "ca", "c";
        // only at position 1 does "ab" head the remaining tail.
        assert_eq!(tokenize("cab", &config(&["ab"])), vec!["c", "ab"]);
    }

    #[test]
    fn cursor_skips_past_accepted_match() {
        // After accepting "ch" the cursor lands on "a": the "ha" key never
        // gets a chance to match inside the consumed region.
        assert_eq!(tokenize("chat", &config(&["ch", "ha"])), vec!["ch", "a", "t"]);
    }

    #[test]
    fn single_character_exception_fires() {
        let cfg = config(&["e"]);
        assert_eq!(tokenize("e", &cfg), vec!["e"]);
        assert_eq!(tokenize("bec", &cfg), vec!["b", "e", "c"]);
    }

    #[test]
    fn graphemes_concatenate_to_input() {
        let cfg = config(&["ch", "eau", "ou"]);
        for word in ["chateau", "couchou", "xyzzy", "e", ""] {
            let graphemes = tokenize(word, &cfg);
            assert_eq!(graphemes.concat(), word);
        }
    }

    #[test]
    fn characters_outside_the_alphabet_become_graphemes() {
        // Tokenization never fails; unknown characters fall back to
        // single-character graphemes and are classified later.
        assert_eq!(tokenize("a3b", &config(&[])), vec!["a", "3", "b"]);
    }
}
