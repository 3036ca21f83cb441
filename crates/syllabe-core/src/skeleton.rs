// Skeleton grouper: greedy C*VC* scan over the tag sequence, then the
// onset-maximization shift.
//
// The scan is an explicit finite-state machine rather than a regex over a
// tag string: leading consonants accumulate until the first vowel (the
// nucleus), trailing consonants accumulate after it, and a second vowel
// emits the pending skeleton and opens the next one. An unclassified tag is
// a gap transition: it closes a pending skeleton that has a nucleus,
// discards a pending nucleus-less consonant run (those positions stay
// uncovered), and resets the machine. A skeleton therefore never spans a
// gap.

use crate::tag::Tag;

/// One candidate syllable's shape: a `Consonant* Vowel Consonant*` run of
/// tags plus the index of the first grapheme it covers. Lengths are in
/// graphemes, not characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    start: usize,
    pattern: Vec<Tag>,
}

impl Skeleton {
    /// Index of the first grapheme this skeleton covers.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last grapheme this skeleton covers.
    pub fn end(&self) -> usize {
        self.start + self.pattern.len()
    }

    /// Number of graphemes this skeleton covers.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The tag run, in grapheme order.
    pub fn pattern(&self) -> &[Tag] {
        &self.pattern
    }

    fn ends_in_consonant(&self) -> bool {
        self.pattern.last() == Some(&Tag::Consonant)
    }

    fn starts_with_vowel(&self) -> bool {
        self.pattern.first() == Some(&Tag::Vowel)
    }
}

/// Group a tag sequence into final syllable skeletons: the greedy scan
/// followed by the onset-maximization pass.
pub fn group(tags: &[Tag]) -> Vec<Skeleton> {
    let mut skeletons = scan(tags);
    maximize_onsets(&mut skeletons);
    skeletons
}

/// Greedy scan producing provisional skeletons in left-to-right order.
/// Matches are non-overlapping and contiguous over the matched positions.
fn scan(tags: &[Tag]) -> Vec<Skeleton> {
    let mut skeletons = Vec::new();
    let mut start = 0;
    let mut pattern: Vec<Tag> = Vec::new();
    let mut has_nucleus = false;

    for (i, &tag) in tags.iter().enumerate() {
        match tag {
            Tag::Consonant => {
                if pattern.is_empty() {
                    start = i;
                }
                pattern.push(Tag::Consonant);
            }
            Tag::Vowel if has_nucleus => {
                // Second vowel: the pending skeleton is complete and the
                // new vowel opens the next one.
                skeletons.push(Skeleton {
                    start,
                    pattern: std::mem::take(&mut pattern),
                });
                start = i;
                pattern.push(Tag::Vowel);
            }
            Tag::Vowel => {
                if pattern.is_empty() {
                    start = i;
                }
                pattern.push(Tag::Vowel);
                has_nucleus = true;
            }
            Tag::Unclassified => {
                if has_nucleus {
                    skeletons.push(Skeleton {
                        start,
                        pattern: std::mem::take(&mut pattern),
                    });
                } else {
                    // Consonant run with no nucleus: uncovered.
                    pattern.clear();
                }
                has_nucleus = false;
            }
        }
    }

    if has_nucleus {
        skeletons.push(Skeleton { start, pattern });
    }

    skeletons
}

/// Onset maximization: a consonant closing one skeleton opens the next
/// syllable instead when that skeleton begins with a bare vowel.
///
/// Exactly one trailing consonant moves per boundary, so a cluster keeps at
/// least one consonant in the earlier coda. No shift at the last skeleton,
/// none when the earlier pattern ends in its vowel, none when the next
/// pattern already has an onset, and none across a gap: the two skeletons
/// must be positionally adjacent.
fn maximize_onsets(skeletons: &mut [Skeleton]) {
    if skeletons.is_empty() {
        return;
    }
    for i in 0..skeletons.len() - 1 {
        let adjacent = skeletons[i].end() == skeletons[i + 1].start;
        if adjacent && skeletons[i].ends_in_consonant() && skeletons[i + 1].starts_with_vowel() {
            skeletons[i].pattern.pop();
            skeletons[i + 1].start -= 1;
            skeletons[i + 1].pattern.insert(0, Tag::Consonant);
        }
    }
}
