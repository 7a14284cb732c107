//! Document-at-a-time traversal order, observed through an index wrapper
//! that records every posting handed out.

use crate::common::{corpus_of, word_index};
use sifter::{
    InMemoryInvertedIndex, InvertedIndex, Posting, PostingsIter, Ranker, SearchEngine,
    SearchOptions,
};
use std::sync::{Arc, Mutex};

type History = Arc<Mutex<Vec<(String, u32)>>>;

/// Logs (term, doc id) for each posting pulled from any iterator it opens.
struct AccessLoggedIndex<'a> {
    wrapped: &'a InMemoryInvertedIndex,
    history: History,
}

impl<'a> AccessLoggedIndex<'a> {
    fn new(wrapped: &'a InMemoryInvertedIndex) -> Self {
        Self {
            wrapped,
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn history(&self) -> Vec<(String, u32)> {
        self.history.lock().unwrap().clone()
    }
}

impl InvertedIndex for AccessLoggedIndex<'_> {
    fn terms(&self, buffer: &str) -> Vec<String> {
        self.wrapped.terms(buffer)
    }

    fn postings_iterator(&self, term: &str) -> PostingsIter<'_> {
        let history = Arc::clone(&self.history);
        let term = term.to_string();
        Box::new(
            self.wrapped
                .postings_iterator(&term)
                .inspect(move |posting: &Posting| {
                    history.lock().unwrap().push((term.clone(), posting.doc_id.get()))
                }),
        )
    }

    fn document_frequency(&self, term: &str) -> usize {
        self.wrapped.document_frequency(term)
    }
}

fn logged(term: &str, doc_id: u32) -> (String, u32) {
    (term.to_string(), doc_id)
}

#[test]
fn test_document_at_a_time_traversal() {
    // water: 1, 2, 3    pollution: 0, 2, 4
    let corpus = corpus_of(&[
        "pollution",
        "water",
        "water pollution",
        "water",
        "pollution",
    ]);
    let index = word_index(&corpus, &["body"]);
    let logged_index = AccessLoggedIndex::new(&index);
    let engine = SearchEngine::new(&corpus, &logged_index);
    let mut ranker = Ranker::brain_dead();

    engine.evaluate_with(
        "Water  polluTION",
        &SearchOptions::new(0.5, 1),
        &mut ranker,
        |_| {},
    );

    // Cursors open in query order, then only the cursors on the smallest
    // doc id move, in query order. Running off the end logs nothing.
    assert_eq!(
        logged_index.history(),
        vec![
            logged("water", 1),
            logged("pollution", 0),
            logged("pollution", 2),
            logged("water", 2),
            logged("water", 3),
            logged("pollution", 4),
        ]
    );
}

#[test]
fn test_traversal_follows_query_order() {
    let corpus = corpus_of(&[
        "pollution",
        "water",
        "water pollution",
        "water",
        "pollution",
    ]);
    let index = word_index(&corpus, &["body"]);
    let logged_index = AccessLoggedIndex::new(&index);
    let engine = SearchEngine::new(&corpus, &logged_index);
    let mut ranker = Ranker::brain_dead();

    engine.evaluate("pollution water", &SearchOptions::new(0.5, 1), &mut ranker);

    assert_eq!(
        logged_index.history(),
        vec![
            logged("pollution", 0),
            logged("water", 1),
            logged("pollution", 2),
            logged("water", 2),
            logged("pollution", 4),
            logged("water", 3),
        ]
    );
}

#[test]
fn test_each_posting_read_once() {
    let corpus = corpus_of(&["a b", "b c", "a c", "a b c", "c"]);
    let index = word_index(&corpus, &["body"]);
    let logged_index = AccessLoggedIndex::new(&index);
    let engine = SearchEngine::new(&corpus, &logged_index);
    let mut ranker = Ranker::brain_dead();

    let hits = engine.evaluate("a b c", &SearchOptions::new(0.0, 10), &mut ranker);
    assert_eq!(hits.len(), 5);

    let history = logged_index.history();
    let total_postings: usize = ["a", "b", "c"]
        .iter()
        .map(|t| index.document_frequency(t))
        .sum();
    assert_eq!(history.len(), total_postings);

    // Strictly forward within each term
    for term in ["a", "b", "c"] {
        let ids: Vec<u32> = history
            .iter()
            .filter(|(t, _)| t == term)
            .map(|(_, id)| *id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{}: {:?}", term, ids);
    }
}

#[test]
fn test_unreachable_threshold_stops_early() {
    let corpus = corpus_of(&["a", "a", "a b"]);
    let index = word_index(&corpus, &["body"]);
    let logged_index = AccessLoggedIndex::new(&index);
    let engine = SearchEngine::new(&corpus, &logged_index);
    let mut ranker = Ranker::brain_dead();

    // N = 3 but only two terms have postings: nothing past the first pulls
    let hits = engine.evaluate("a b zzz", &SearchOptions::new(1.0, 10), &mut ranker);
    assert!(hits.is_empty());
    assert_eq!(
        logged_index.history(),
        vec![logged("a", 0), logged("b", 2)]
    );
}
