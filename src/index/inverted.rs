// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: doc ids in every posting list are strictly increasing
//! 2. **DOC_FREQ_CORRECT**: document frequency equals posting-list length
//! 3. **NON_EMPTY**: every term in the dictionary has at least one posting
//!
//! (1) holds without sorting because documents are visited in ascending id
//! order and each contributes at most one posting per term. The builder
//! asserts the visiting order; it does not repair it.

use crate::contracts::check_posting_lists;
use crate::corpus::Corpus;
use crate::dictionary::TermDictionary;
use crate::text::{Normalizer, Tokenizer};
use crate::types::{DocId, Posting, PostingsIter};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Read access to an inverted index.
///
/// `terms` must map a buffer to terms exactly the way the index did at
/// build time; queries go through it for that reason.
pub trait InvertedIndex: Sync {
    /// Normalized terms of `buffer`, in buffer order, duplicates included.
    fn terms(&self, buffer: &str) -> Vec<String>;

    /// Postings for `term` in ascending doc id order. Empty for unknown terms.
    fn postings_iterator(&self, term: &str) -> PostingsIter<'_>;

    /// Number of documents containing `term`. 0 for unknown terms.
    fn document_frequency(&self, term: &str) -> usize;
}

/// An inverted index held in memory: one posting list per dictionary term.
pub struct InMemoryInvertedIndex {
    dictionary: TermDictionary,
    /// Posting lists keyed by term id
    postings: Vec<Vec<Posting>>,
    fields: Vec<String>,
    document_count: usize,
    normalizer: Box<dyn Normalizer + Send + Sync>,
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
}

impl InMemoryInvertedIndex {
    /// Index the named `fields` of every document in `corpus`.
    ///
    /// Fields are concatenated (missing ones count as empty) before
    /// tokenization.
    ///
    /// # Panics
    ///
    /// Panics if the corpus does not yield documents in strictly ascending
    /// doc id order.
    pub fn new<N, T>(corpus: &dyn Corpus, fields: &[&str], normalizer: N, tokenizer: T) -> Self
    where
        N: Normalizer + Send + Sync + 'static,
        T: Tokenizer + Send + Sync + 'static,
    {
        let mut index = Self {
            dictionary: TermDictionary::new(),
            postings: Vec::new(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            document_count: corpus.size(),
            normalizer: Box::new(normalizer),
            tokenizer: Box::new(tokenizer),
        };
        index.build(corpus);

        info!(
            documents = index.document_count,
            terms = index.dictionary.len(),
            postings = index.postings.iter().map(Vec::len).sum::<usize>(),
            fields = ?index.fields,
            "built inverted index"
        );
        index
    }

    fn build(&mut self, corpus: &dyn Corpus) {
        let mut previous: Option<DocId> = None;

        for document in corpus.documents() {
            assert!(
                previous.is_none_or(|p| p < document.id),
                "documents must be indexed in ascending doc id order: {} after {}",
                document.id,
                previous.map_or(0, DocId::get)
            );
            previous = Some(document.id);

            let text = self
                .fields
                .iter()
                .map(|name| document.field_or(name, ""))
                .collect::<Vec<_>>()
                .join(" ");

            // Count per term, keeping first-occurrence order so term ids are
            // assigned deterministically
            let mut counts: HashMap<String, u32> = HashMap::new();
            let mut order: Vec<String> = Vec::new();
            for term in self.terms(&text) {
                let count = counts.entry(term.clone()).or_insert(0);
                if *count == 0 {
                    order.push(term);
                }
                *count += 1;
            }

            for term in order {
                let id = self.dictionary.add_if_absent(&term) as usize;
                if id == self.postings.len() {
                    self.postings.push(Vec::new());
                }
                self.postings[id].push(Posting::new(document.id, counts[&term]));
            }
        }

        check_posting_lists(&self.postings);
    }

    /// Indexed terms in id order, with their document frequency.
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, usize)> {
        self.dictionary
            .iter()
            .map(|(term, id)| (term, self.postings[id as usize].len()))
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of documents in the indexed corpus.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    fn posting_list(&self, term: &str) -> &[Posting] {
        match self.dictionary.get_term_id(term) {
            Some(id) => &self.postings[id as usize],
            None => &[],
        }
    }
}

impl InvertedIndex for InMemoryInvertedIndex {
    fn terms(&self, buffer: &str) -> Vec<String> {
        let canonical = self.normalizer.canonicalize(buffer);
        self.tokenizer
            .strings(&canonical)
            .into_iter()
            .map(|token| self.normalizer.normalize(token))
            .collect()
    }

    fn postings_iterator(&self, term: &str) -> PostingsIter<'_> {
        Box::new(self.posting_list(term).iter().copied())
    }

    fn document_frequency(&self, term: &str) -> usize {
        self.posting_list(term).len()
    }
}

impl fmt::Debug for InMemoryInvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryInvertedIndex")
            .field("fields", &self.fields)
            .field("document_count", &self.document_count)
            .field("terms", &self.dictionary.len())
            .finish()
    }
}
