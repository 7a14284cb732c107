// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document rankers.
//!
//! The protocol is the same for every variant:
//!
//! ```text
//! reset(doc) → update(term, multiplicity, posting)* → evaluate()
//! ```
//!
//! `update` is called once per matched query term. `evaluate` has no side
//! effects and can be called any number of times.
//!
//! | Variant     | Score                                                        |
//! |-------------|--------------------------------------------------------------|
//! | `BrainDead` | Σ multiplicity × tf                                          |
//! | `TfIdf`     | w_d × Σ multiplicity × log10(1 + tf) × log10(N / df) + w_s × static |

use crate::corpus::Corpus;
use crate::index::InvertedIndex;
use crate::types::{DocId, Posting};
use serde::{Deserialize, Serialize};

/// Field holding a document's query-independent quality score by default.
pub const DEFAULT_STATIC_SCORE_FIELD: &str = "static_quality_score";

/// A document scorer. Closed set of variants, dispatched by `match`.
pub enum Ranker<'a> {
    BrainDead(BrainDeadRanker),
    TfIdf(TfIdfRanker<'a>),
}

impl<'a> Ranker<'a> {
    /// Sum of `multiplicity × term_frequency`.
    pub fn brain_dead() -> Self {
        Ranker::BrainDead(BrainDeadRanker::new())
    }

    /// TF-IDF blended with a static quality score.
    pub fn tf_idf(corpus: &'a dyn Corpus, index: &'a dyn InvertedIndex, config: TfIdfConfig) -> Self {
        Ranker::TfIdf(TfIdfRanker::new(corpus, index, config))
    }

    /// Forget accumulated evidence and bind to `doc_id`.
    pub fn reset(&mut self, doc_id: DocId) {
        match self {
            Ranker::BrainDead(r) => r.reset(doc_id),
            Ranker::TfIdf(r) => r.reset(doc_id),
        }
    }

    /// Fold in one query term's evidence for the current document.
    pub fn update(&mut self, term: &str, multiplicity: u32, posting: &Posting) {
        match self {
            Ranker::BrainDead(r) => r.update(term, multiplicity, posting),
            Ranker::TfIdf(r) => r.update(term, multiplicity, posting),
        }
    }

    /// The current document's score.
    pub fn evaluate(&self) -> f64 {
        match self {
            Ranker::BrainDead(r) => r.evaluate(),
            Ranker::TfIdf(r) => r.evaluate(),
        }
    }
}

/// Unnormalized term-frequency sum.
#[derive(Debug, Clone, Default)]
pub struct BrainDeadRanker {
    score: f64,
}

impl BrainDeadRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, _doc_id: DocId) {
        self.score = 0.0;
    }

    pub fn update(&mut self, _term: &str, multiplicity: u32, posting: &Posting) {
        self.score += f64::from(multiplicity) * f64::from(posting.term_frequency);
    }

    pub fn evaluate(&self) -> f64 {
        self.score
    }
}

/// Weights for [`TfIdfRanker`]. Every key is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    pub dynamic_score_weight: f64,
    pub static_score_weight: f64,
    pub static_score_field_name: String,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            dynamic_score_weight: 1.0,
            static_score_weight: 1.0,
            static_score_field_name: DEFAULT_STATIC_SCORE_FIELD.to_string(),
        }
    }
}

/// Log-dampened TF-IDF, plus a static score read from a document field.
pub struct TfIdfRanker<'a> {
    corpus: &'a dyn Corpus,
    index: &'a dyn InvertedIndex,
    config: TfIdfConfig,
    document: Option<DocId>,
    dynamic_score: f64,
}

impl<'a> TfIdfRanker<'a> {
    pub fn new(corpus: &'a dyn Corpus, index: &'a dyn InvertedIndex, config: TfIdfConfig) -> Self {
        Self {
            corpus,
            index,
            config,
            document: None,
            dynamic_score: 0.0,
        }
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    pub fn reset(&mut self, doc_id: DocId) {
        self.document = Some(doc_id);
        self.dynamic_score = 0.0;
    }

    pub fn update(&mut self, term: &str, multiplicity: u32, posting: &Posting) {
        let document_frequency = self.index.document_frequency(term);
        debug_assert!(
            document_frequency > 0,
            "term '{}' reached the ranker without postings",
            term
        );

        let tf = (1.0 + f64::from(posting.term_frequency)).log10();
        let idf = (self.corpus.size() as f64 / document_frequency.max(1) as f64).log10();
        self.dynamic_score += f64::from(multiplicity) * tf * idf;
    }

    pub fn evaluate(&self) -> f64 {
        self.config.dynamic_score_weight * self.dynamic_score
            + self.config.static_score_weight * self.static_score()
    }

    /// Parsed static score of the current document, 0.0 when missing or unparsable.
    fn static_score(&self) -> f64 {
        self.document
            .and_then(|id| self.corpus.get_document(id))
            .and_then(|document| document.field(&self.config.static_score_field_name))
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|score| score.is_finite())
            .unwrap_or(0.0)
    }
}
