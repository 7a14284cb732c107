// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document-at-a-time N-out-of-M ranked retrieval.
//!
//! A query with M distinct terms matches every document that contains at
//! least N of them, where N comes from [`SearchOptions::min_matches`].
//!
//! # Algorithm
//!
//! One cursor per query term, each parked on its current posting. Repeat:
//!
//! 1. Find the smallest doc id under any cursor.
//! 2. Group the cursors parked on it. If there are at least N, score the
//!    document (one ranker update per grouped term) and sift it.
//! 3. Advance the grouped cursors only, dropping the exhausted ones.
//!
//! until fewer than N cursors are left. Documents are visited in ascending
//! id order, each at most once, and every posting list is read strictly
//! forward, once.
//!
//! Terms are processed in order of first occurrence in the query, so the
//! pattern of posting accesses is deterministic.

use super::SearchOptions;
use crate::corpus::{Corpus, Document};
use crate::index::InvertedIndex;
use crate::scoring::{Ranker, Sieve};
use crate::types::{DocId, Posting, PostingsIter};
use tracing::{debug, trace};

/// A ranked search result.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub score: f64,
    pub document: &'a Document,
}

/// A distinct query term and how many times it occurs in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    pub term: String,
    pub multiplicity: u32,
}

/// A term's position in its posting list.
struct Cursor<'i> {
    /// Index into the query terms
    term: usize,
    current: Posting,
    postings: PostingsIter<'i>,
}

/// Ranked retrieval over an inverted index.
pub struct SearchEngine<'a> {
    corpus: &'a dyn Corpus,
    index: &'a dyn InvertedIndex,
}

impl<'a> SearchEngine<'a> {
    pub fn new(corpus: &'a dyn Corpus, index: &'a dyn InvertedIndex) -> Self {
        Self { corpus, index }
    }

    /// Distinct terms of `query` in first-occurrence order, with multiplicities.
    pub fn query_terms(&self, query: &str) -> Vec<QueryTerm> {
        let mut terms: Vec<QueryTerm> = Vec::new();
        for term in self.index.terms(query) {
            match terms.iter_mut().find(|t| t.term == term) {
                Some(existing) => existing.multiplicity += 1,
                None => terms.push(QueryTerm {
                    term,
                    multiplicity: 1,
                }),
            }
        }
        terms
    }

    /// Evaluate `query`, returning at most `options.hit_count` hits, best first.
    pub fn evaluate(
        &self,
        query: &str,
        options: &SearchOptions,
        ranker: &mut Ranker<'_>,
    ) -> Vec<SearchHit<'a>> {
        let mut hits = Vec::new();
        self.evaluate_with(query, options, ranker, |hit| hits.push(hit));
        hits
    }

    /// Like [`evaluate`](Self::evaluate), but hands each hit to `callback`
    /// in ranked order.
    pub fn evaluate_with<F>(
        &self,
        query: &str,
        options: &SearchOptions,
        ranker: &mut Ranker<'_>,
        mut callback: F,
    ) where
        F: FnMut(SearchHit<'a>),
    {
        if options.hit_count == 0 {
            trace!(query, "search with hit_count 0");
            return;
        }

        let terms = self.query_terms(query);
        let min_matches = options.min_matches(terms.len());

        // Open every cursor up front, in term order. Terms without postings
        // can never be part of a grouping.
        let mut live: Vec<Cursor<'_>> = Vec::with_capacity(terms.len());
        for (term, query_term) in terms.iter().enumerate() {
            let mut postings = self.index.postings_iterator(&query_term.term);
            if let Some(current) = postings.next() {
                live.push(Cursor {
                    term,
                    current,
                    postings,
                });
            }
        }

        if live.len() < min_matches {
            trace!(
                query,
                terms = terms.len(),
                with_postings = live.len(),
                min_matches,
                "threshold unreachable"
            );
            return;
        }

        let mut sieve: Sieve<DocId> = Sieve::new(options.hit_count);
        let mut candidates = 0usize;

        while live.len() >= min_matches {
            let Some(doc_id) = live.iter().map(|c| c.current.doc_id).min() else {
                break;
            };

            let grouped = live.iter().filter(|c| c.current.doc_id == doc_id).count();
            if grouped >= min_matches {
                ranker.reset(doc_id);
                for cursor in live.iter().filter(|c| c.current.doc_id == doc_id) {
                    let query_term = &terms[cursor.term];
                    ranker.update(&query_term.term, query_term.multiplicity, &cursor.current);
                }
                sieve.sift(ranker.evaluate(), doc_id);
                candidates += 1;
            }

            // Only the grouped cursors move; retain_mut visits in term order
            live.retain_mut(|cursor| {
                if cursor.current.doc_id != doc_id {
                    return true;
                }
                match cursor.postings.next() {
                    Some(next) => {
                        debug_assert!(
                            next.doc_id > doc_id,
                            "posting list for '{}' is not sorted",
                            terms[cursor.term].term
                        );
                        cursor.current = next;
                        true
                    }
                    None => false,
                }
            });
        }

        let winners = sieve.winners();
        debug!(
            query,
            terms = terms.len(),
            min_matches,
            candidates,
            hits = winners.len(),
            "evaluated search query"
        );

        let corpus = self.corpus;
        for (score, doc_id) in winners {
            if let Some(document) = corpus.get_document(doc_id) {
                callback(SearchHit { score, document });
            }
        }
    }
}
