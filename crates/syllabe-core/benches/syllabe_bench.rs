// Criterion benchmarks for syllabe-core.
//
// Run:
//   cargo bench -p syllabe-core

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use syllabe_core::{Syllabifier, classify, french, tokenize};

/// A small French word list mixing digraph-heavy and plain words.
const WORDS: &[&str] = &[
    "bonjour",
    "chateau",
    "oiseau",
    "syllabe",
    "banane",
    "fromage",
    "arbre",
    "montagne",
    "papillon",
    "th\u{00E9}\u{00E2}tre",
    "\u{00E9}cole",
    "ch\u{00E8}vrefeuille",
    "photographie",
    "campagne",
    "ruisseau",
    "chaussure",
    "grenouille",
    "bibliotheque",
    "anticonstitutionnellement",
    "eau",
];

/// Tokenize every word in the list.
fn bench_tokenize_words(c: &mut Criterion) {
    let config = french::alphabet();
    c.bench_function("tokenize_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(tokenize(black_box(word), &config));
            }
        })
    });
}

/// Tokenize + classify every word in the list.
fn bench_classify_words(c: &mut Criterion) {
    let config = french::alphabet();
    let grapheme_lists: Vec<Vec<String>> = WORDS.iter().map(|w| tokenize(w, &config)).collect();
    c.bench_function("classify_words", |b| {
        b.iter(|| {
            for graphemes in &grapheme_lists {
                black_box(classify(black_box(graphemes), &config));
            }
        })
    });
}

/// The full pipeline over the word list.
fn bench_syllabify_words(c: &mut Criterion) {
    let syllabifier = Syllabifier::new(french::alphabet());
    c.bench_function("syllabify_words", |b| {
        b.iter(|| {
            for word in WORDS {
                let _ = black_box(syllabifier.syllabify(black_box(word)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tokenize_words,
    bench_classify_words,
    bench_syllabify_words
);
criterion_main!(benches);
