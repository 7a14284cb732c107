//! N-out-of-M retrieval over the 3654-document synthetic corpus.
//!
//! Every document is three words drawn from 27, so hit counts, top scores and
//! the set of top-scoring documents are all known in advance.

use crate::common::{assert_ranked, search_brain_dead, synthetic_corpus, top_group, word_index};
use sifter::{Corpus, SearchEngine};

const EPSILON: f64 = 0.0001;

/// (hits, top score, top-scoring ids); `None` skips the check.
fn verify(
    engine: &SearchEngine<'_>,
    query: &str,
    match_threshold: f64,
    hit_count: usize,
    expected: (usize, Option<f64>, Option<&[u32]>),
) {
    let (count, score, winners) = expected;
    let hits = search_brain_dead(engine, query, match_threshold, hit_count);

    assert_eq!(hits.len(), count, "hit count for '{}'", query);
    assert_ranked(&hits);
    if let Some(score) = score {
        assert_eq!(hits[0].0, score, "top score for '{}'", query);
    }
    if let Some(winners) = winners {
        assert_eq!(top_group(&hits), winners, "winners for '{}'", query);
    }
}

#[test]
fn test_synthetic_corpus_shape() {
    let corpus = synthetic_corpus();
    assert_eq!(corpus.size(), 3654);
    assert_eq!(corpus.documents().next().unwrap().field("a"), Some("baj baj baj"));
}

#[test]
fn test_repeated_query_term() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    // Multiplicity 3 times term frequency 3
    verify(&engine, "baj BAJ    baj", 1.0, 27, (27, Some(9.0), Some(&[0][..])));
}

#[test]
fn test_full_threshold() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    verify(&engine, "baj caj", 1.0, 100, (27, Some(3.0), Some(&[9, 207][..])));
    verify(&engine, "baj cek dil", 1.0, 10, (1, Some(3.0), Some(&[286][..])));
}

#[test]
fn test_partial_threshold() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    verify(
        &engine,
        "baj caj daj",
        2.0 / 3.0 + EPSILON,
        100,
        (79, Some(3.0), Some(&[9, 18, 207, 216, 333, 2523, 2640][..])),
    );
    verify(
        &engine,
        "baj cek dil",
        2.0 / 3.0 + EPSILON,
        80,
        (79, Some(3.0), Some(&[13, 26, 273, 286, 377, 3107, 3198][..])),
    );
}

#[test]
fn test_threshold_rounds_down_to_at_least_one() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    // floor(2/3 × 2) = 1: any document with either term
    verify(
        &engine,
        "baj caj",
        2.0 / 3.0 + EPSILON,
        100,
        (100, Some(3.0), Some(&[0, 9, 207, 2514][..])),
    );
}

#[test]
fn test_unknown_terms_count_towards_m() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    // N = 2 of 3, but only one term has postings
    verify(&engine, "baj xxx yyy", 2.0 / 3.0 + EPSILON, 100, (0, None, None));
    // N = 1 of 3
    verify(&engine, "baj xxx yyy", 2.0 / 3.0 - EPSILON, 100, (100, Some(3.0), Some(&[0][..])));
}

#[test]
fn test_ties_rank_by_document_order() {
    let corpus = synthetic_corpus();
    let index = word_index(&corpus, &["a"]);
    let engine = SearchEngine::new(&corpus, &index);

    let hits = search_brain_dead(&engine, "baj caj", 1.0, 100);
    let twos: Vec<u32> = hits
        .iter()
        .filter(|(score, _)| *score == 2.0)
        .map(|(_, id)| *id)
        .collect();
    let mut sorted = twos.clone();
    sorted.sort_unstable();
    assert_eq!(twos, sorted);
}
