//! Shingled indexing: misspelled queries still find their documents.

use crate::common::{assert_ranked, corpus_of};
use sifter::{
    InMemoryInvertedIndex, InvertedIndex, Ranker, SearchEngine, SearchOptions, ShingleGenerator,
    SimpleNormalizer,
};

fn shingle_corpus() -> sifter::InMemoryCorpus {
    corpus_of(&[
        "organic chemistry",
        "inorganic chemistry",
        "organ donation",
        "chemistry set",
    ])
}

#[test]
fn test_misspelled_query_matches_shingles() {
    let corpus = shingle_corpus();
    let index =
        InMemoryInvertedIndex::new(&corpus, &["body"], SimpleNormalizer, ShingleGenerator::new(3));
    let engine = SearchEngine::new(&corpus, &index);
    let mut ranker = Ranker::brain_dead();

    let hits: Vec<(f64, u32)> = engine
        .evaluate("orGAnik kEMmistry", &SearchOptions::new(0.1, 10), &mut ranker)
        .into_iter()
        .map(|hit| (hit.score, hit.document.id.get()))
        .collect();

    // Shared shingles: org rga gan ani mis ist str try
    assert_eq!(hits, vec![(8.0, 0), (8.0, 1), (4.0, 3), (3.0, 2)]);
    assert_ranked(&hits);
}

#[test]
fn test_query_shingles_span_spaces() {
    let corpus = shingle_corpus();
    let index =
        InMemoryInvertedIndex::new(&corpus, &["body"], SimpleNormalizer, ShingleGenerator::new(3));

    let terms = index.terms("Ab cD");
    assert_eq!(terms, vec!["ab ", "b c", " cd"]);
}

#[test]
fn test_short_query_is_one_shingle() {
    let corpus = shingle_corpus();
    let index =
        InMemoryInvertedIndex::new(&corpus, &["body"], SimpleNormalizer, ShingleGenerator::new(3));
    let engine = SearchEngine::new(&corpus, &index);
    let mut ranker = Ranker::brain_dead();

    // A two-character query is a single two-character shingle, and indexed
    // buffers only hold three-character ones
    assert!(engine
        .evaluate("se", &SearchOptions::default(), &mut ranker)
        .is_empty());
    assert_eq!(
        engine
            .evaluate("set", &SearchOptions::default(), &mut ranker)
            .into_iter()
            .map(|hit| hit.document.id.get())
            .collect::<Vec<_>>(),
        vec![3]
    );
}
