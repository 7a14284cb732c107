//! Phrase-prefix search over the suffix array.

use crate::common::{phrase_hits, two_field_corpus};
use sifter::{
    Corpus, Document, InMemoryCorpus, Normalizer, SimpleNormalizer, SuffixArray, Tokenizer,
    WordTokenizer,
};
use std::borrow::Cow;

const R: usize = 1000;

/// Upper-cases and maps 'Ø' to 'O', so "ø", "Ø", "o" and "O" all compare equal.
struct OFolding;

impl Normalizer for OFolding {
    fn canonicalize<'a>(&self, buffer: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(buffer)
    }

    fn normalize(&self, token: &str) -> String {
        token.to_uppercase().replace('Ø', "O")
    }
}

/// Lots of repeated short tokens, in two fields.
fn o_corpus() -> InMemoryCorpus {
    let long_a = "øO".repeat(R);
    let long_b = "ø o ".repeat(R);
    [
        ("ø  o\n\n\nø\n\no", "ø o\nø   \no"),
        ("ba", "b bab"),
        ("ø  o Ø o", "ø o"),
        (long_a.as_str(), "o"),
        ("cbab o øbab Ø ", long_b.as_str()),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, (a, b))| Document::new(id as u32).with_field("a", a).with_field("b", b))
    .collect()
}

fn top10(array: &SuffixArray<'_>, query: &str) -> Vec<(u32, usize)> {
    phrase_hits(array, query, Some(10))
}

#[test]
fn test_single_field() {
    let corpus = o_corpus();
    let array = SuffixArray::new(&corpus, &["b"], OFolding, WordTokenizer);

    assert_eq!(top10(&array, "bab"), vec![(1, 1)]);
    assert_eq!(top10(&array, "ø o"), vec![(4, 2 * R - 1), (0, 3), (2, 1)]);
    assert_eq!(top10(&array, "o O"), vec![(4, 2 * R - 1), (0, 3), (2, 1)]);
    assert!(top10(&array, "oooooo").is_empty());
    assert_eq!(top10(&array, "o o o o"), vec![(4, 2 * R - 3), (0, 1)]);
}

#[test]
fn test_two_fields() {
    let corpus = o_corpus();
    let array = SuffixArray::new(&corpus, &["a", "b"], OFolding, WordTokenizer);

    assert_eq!(top10(&array, "bab"), vec![(1, 1)]);
    // "O OBAB" in field a of document 4 counts too
    assert_eq!(top10(&array, "ø o"), vec![(4, 2 * R), (0, 6), (2, 4)]);
    assert_eq!(top10(&array, "o O"), vec![(4, 2 * R), (0, 6), (2, 4)]);
    assert_eq!(top10(&array, "oøØOøO"), vec![(3, 1)]);
    assert_eq!(top10(&array, "o o o o"), vec![(4, 2 * R - 3), (0, 2), (2, 1)]);
}

#[test]
fn test_suffixes_start_on_tokens_only() {
    let corpus = o_corpus();
    let array = SuffixArray::new(&corpus, &["a", "b"], OFolding, WordTokenizer);

    // One token per word; the separators contribute none
    let tokens: usize = corpus
        .documents()
        .map(|d| {
            WordTokenizer.ranges(d.field_or("a", "")).len()
                + WordTokenizer.ranges(d.field_or("b", "")).len()
        })
        .sum();
    assert_eq!(array.len(), tokens);
}

#[test]
fn test_multiple_fields() {
    let corpus = two_field_corpus();
    let both = SuffixArray::new(&corpus, &["field1", "field2"], SimpleNormalizer, WordTokenizer);
    let first = SuffixArray::new(&corpus, &["field1"], SimpleNormalizer, WordTokenizer);
    let second = SuffixArray::new(&corpus, &["field2"], SimpleNormalizer, WordTokenizer);

    assert_eq!(phrase_hits(&both, "b c", Some(5)), vec![(0, 2)]);
    assert_eq!(phrase_hits(&both, "y", Some(5)), vec![(1, 1), (2, 1)]);
    assert_eq!(phrase_hits(&first, "x", Some(5)), vec![(1, 1)]);
    assert_eq!(phrase_hits(&first, "y", Some(5)), vec![(2, 1)]);
    assert!(phrase_hits(&first, "z", Some(5)).is_empty());
    assert_eq!(phrase_hits(&second, "z", Some(5)), vec![(2, 1)]);
}

#[test]
fn test_phrase_does_not_cross_fields() {
    let corpus = two_field_corpus();
    let both = SuffixArray::new(&corpus, &["field1", "field2"], SimpleNormalizer, WordTokenizer);

    // "c" ends field1 and "b" starts field2 of document 0
    assert!(phrase_hits(&both, "c b", None).is_empty());
    assert!(phrase_hits(&both, "x y", None).is_empty());
}

#[test]
fn test_unbounded_hit_count_returns_everything() {
    let corpus = o_corpus();
    let array = SuffixArray::new(&corpus, &["a", "b"], OFolding, WordTokenizer);

    let hits = phrase_hits(&array, "o", None);
    let ids: Vec<u32> = hits.iter().map(|(id, _)| *id).collect();
    // Documents 0, 2, 3 and 4 all contain a token starting with O
    assert_eq!(hits.len(), 4);
    assert_eq!(ids[0], 4);
    assert!(hits.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(phrase_hits(&array, "o", Some(2)).len(), 2);
    assert!(phrase_hits(&array, "o", Some(0)).is_empty());
}
