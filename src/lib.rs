// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small-scale information retrieval over a static, in-memory corpus.
//!
//! Two families of queries, plus a dictionary scanner:
//!
//! - **Ranked term retrieval**: an inverted index searched document at a
//!   time, N-out-of-M, with a pluggable ranker.
//! - **Phrase-prefix retrieval**: a suffix array over normalized document
//!   content, ranked by occurrence count.
//! - **Dictionary scanning**: a trie walked over a buffer to find every
//!   dictionary entry in it, in one pass.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   corpus    │────▶│    text      │────▶│ index         │
//! │ (Document,  │     │ (Tokenizer,  │     │ (inverted,    │
//! │  Corpus)    │     │  Normalizer) │     │  suffix_array,│
//! └─────────────┘     └──────────────┘     │  trie)        │
//!                                          └───────────────┘
//!                                                  │
//!        ┌─────────────────────────────────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │   search    │────▶│   scoring    │
//! │ (engine,    │     │ (Ranker,     │
//! │  options)   │     │  Sieve)      │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! Everything is built once and read-only afterwards. Queries never fail:
//! unknown terms, empty queries and zero matches are empty results.
//!
//! # Usage
//!
//! ```
//! use sifter::{
//!     InMemoryCorpus, InMemoryInvertedIndex, Ranker, SearchEngine, SearchOptions,
//!     SimpleNormalizer, WordTokenizer,
//! };
//!
//! let mut corpus = InMemoryCorpus::new();
//! corpus.add([("body", "water pollution")]);
//! corpus.add([("body", "air pollution")]);
//!
//! let index = InMemoryInvertedIndex::new(&corpus, &["body"], SimpleNormalizer, WordTokenizer);
//! let engine = SearchEngine::new(&corpus, &index);
//!
//! let mut ranker = Ranker::brain_dead();
//! let hits = engine.evaluate("Water POLLUTION", &SearchOptions::new(1.0, 10), &mut ranker);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].score, 2.0);
//! ```

pub mod contracts;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod text;
pub mod types;

// Re-exports for public API
pub use corpus::{corpus_from_json, corpus_from_lines, load_corpus, Corpus, Document, InMemoryCorpus};
pub use dictionary::TermDictionary;
pub use error::{Error, Result};
pub use index::{
    InMemoryInvertedIndex, InvertedIndex, PhraseHit, PostingsMerger, StringFinder, StringMatch,
    SuffixArray, Trie,
};
pub use scoring::{BrainDeadRanker, Ranker, Sieve, TfIdfConfig, TfIdfRanker};
pub use search::{PhraseOptions, QueryTerm, SearchEngine, SearchHit, SearchOptions};
#[cfg(feature = "unicode-normalization")]
pub use text::FoldingNormalizer;
pub use text::{Normalizer, ShingleGenerator, SimpleNormalizer, TokenRange, Tokenizer, WordTokenizer};
pub use types::{DocId, Posting, PostingsIter, TermId};
