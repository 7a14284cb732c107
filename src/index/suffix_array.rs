// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array for phrase-prefix search.
//!
//! A phrase-prefix query matches wherever the normalized query starts on a
//! token boundary of a document's normalized content. It does not have to end
//! on one: "visc" finds "viscous" and "viscosity". Documents are ranked by how
//! many times the query occurs in them.
//!
//! # Layout
//!
//! Each document contributes one haystack buffer: its fields, each one
//! canonicalized, tokenized, re-joined with single spaces and normalized,
//! then glued together with [`FIELD_SEPARATOR`]. The separator contains a NUL,
//! which no token contains, so no normalized query can match across it.
//!
//! Suffixes are never materialized. A [`SuffixRef`] is a (haystack, byte
//! offset) pair pointing at a token start.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: suffixes are ordered by the bytes of the suffix they point at
//! 2. **TOKEN_ALIGNED**: every offset is the start of a token in its haystack
//! 3. **PREFIX_CONTIGUOUS**: suffixes sharing a prefix are adjacent (follows from 1)

use crate::contracts::check_suffix_array_sorted;
use crate::corpus::{Corpus, Document};
use crate::search::PhraseOptions;
use crate::scoring::Sieve;
use crate::text::{Normalizer, Tokenizer};
use crate::types::DocId;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Glue between the fields of one document.
pub const FIELD_SEPARATOR: &str = " \0 ";

/// A suffix, by reference: byte `offset` into haystack number `haystack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRef {
    pub haystack: usize,
    pub offset: usize,
}

/// A document matching a phrase-prefix query.
#[derive(Debug, Clone, Copy)]
pub struct PhraseHit<'a> {
    /// Number of occurrences of the query in the document.
    pub score: usize,
    pub document: &'a Document,
}

pub struct SuffixArray<'a> {
    corpus: &'a dyn Corpus,
    /// One normalized buffer per document, with the document's id
    haystack: Vec<(DocId, String)>,
    suffixes: Vec<SuffixRef>,
    normalizer: Box<dyn Normalizer + Send + Sync>,
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
}

impl<'a> SuffixArray<'a> {
    /// Build over the named `fields` of every document in `corpus`.
    pub fn new<N, T>(corpus: &'a dyn Corpus, fields: &[&str], normalizer: N, tokenizer: T) -> Self
    where
        N: Normalizer + Send + Sync + 'static,
        T: Tokenizer + Send + Sync + 'static,
    {
        let mut array = Self {
            corpus,
            haystack: Vec::with_capacity(corpus.size()),
            suffixes: Vec::new(),
            normalizer: Box::new(normalizer),
            tokenizer: Box::new(tokenizer),
        };
        array.build(fields);

        info!(
            documents = array.haystack.len(),
            suffixes = array.suffixes.len(),
            fields = ?fields,
            "built suffix array"
        );
        array
    }

    fn build(&mut self, fields: &[&str]) {
        for document in self.corpus.documents() {
            let content = fields
                .iter()
                .map(|name| self.normalize(document.field_or(name, "")))
                .collect::<Vec<_>>()
                .join(FIELD_SEPARATOR);
            self.haystack.push((document.id, content));
        }

        let mut suffixes = Vec::new();
        for (haystack, (_, content)) in self.haystack.iter().enumerate() {
            for (start, end) in self.tokenizer.ranges(content) {
                // Shingles can straddle the separator; such a suffix would
                // start a cross-field match
                if content[start..end].contains('\0') {
                    continue;
                }
                suffixes.push(SuffixRef {
                    haystack,
                    offset: start,
                });
            }
        }

        // INVARIANT: SUFFIX_ARRAY_SORTED
        // Byte order on UTF-8 equals code point order. Ties (identical
        // suffixes) are left in build order by the stable sort.
        let texts = &self.haystack;
        let compare = |a: &SuffixRef, b: &SuffixRef| {
            texts[a.haystack].1[a.offset..].cmp(&texts[b.haystack].1[b.offset..])
        };
        #[cfg(feature = "parallel")]
        suffixes.par_sort_by(compare);
        #[cfg(not(feature = "parallel"))]
        suffixes.sort_by(compare);

        self.suffixes = suffixes;
        check_suffix_array_sorted(&self.haystack, &self.suffixes);
    }

    /// Canonicalize, tokenize, re-join, normalize. Queries and documents
    /// must both go through here.
    fn normalize(&self, buffer: &str) -> String {
        let canonical = self.normalizer.canonicalize(buffer);
        self.normalizer.normalize(&self.tokenizer.join(&canonical))
    }

    fn suffix(&self, r: &SuffixRef) -> &str {
        &self.haystack[r.haystack].1[r.offset..]
    }

    /// Compare the suffix against `needle`, looking only at the first
    /// `needle.len()` bytes of the suffix. `Equal` means "starts with".
    fn prefix_compare(&self, r: &SuffixRef, needle: &[u8]) -> Ordering {
        let suffix = self.suffix(r).as_bytes();
        let head = &suffix[..suffix.len().min(needle.len())];
        head.cmp(needle)
    }

    /// The contiguous run of suffixes that start with `needle`.
    fn matching_range(&self, needle: &str) -> &[SuffixRef] {
        let needle = needle.as_bytes();
        let lower = self
            .suffixes
            .partition_point(|r| self.prefix_compare(r, needle) == Ordering::Less);
        let upper = lower
            + self.suffixes[lower..]
                .partition_point(|r| self.prefix_compare(r, needle) == Ordering::Equal);
        &self.suffixes[lower..upper]
    }

    /// Phrase-prefix search, ranked by occurrence count.
    ///
    /// An empty (or all-punctuation) query matches nothing.
    pub fn evaluate(&self, query: &str, options: &PhraseOptions) -> Vec<PhraseHit<'a>> {
        let mut hits = Vec::new();
        self.evaluate_with(query, options, |hit| hits.push(hit));
        hits
    }

    /// Like [`evaluate`](Self::evaluate), but hands each hit to `callback`
    /// in ranked order.
    pub fn evaluate_with<F>(&self, query: &str, options: &PhraseOptions, mut callback: F)
    where
        F: FnMut(PhraseHit<'a>),
    {
        let needle = self.normalize(query);
        if needle.is_empty() {
            trace!(query, "empty phrase query");
            return;
        }
        if options.hit_count == Some(0) {
            trace!(query, "phrase query with hit_count 0");
            return;
        }

        let matches = self.matching_range(&needle);

        // Ordered by haystack so ties in the sieve resolve by doc order
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for r in matches {
            *counts.entry(r.haystack).or_insert(0) += 1;
        }

        let mut sieve = Sieve::new(options.hit_count.unwrap_or(counts.len()));
        for (&haystack, &count) in &counts {
            sieve.sift(count as f64, haystack);
        }

        let winners = sieve.winners();
        debug!(
            needle = %needle,
            occurrences = matches.len(),
            documents = counts.len(),
            hits = winners.len(),
            "evaluated phrase query"
        );

        for (score, haystack) in winners {
            let id = self.haystack[haystack].0;
            if let Some(document) = self.corpus.get_document(id) {
                callback(PhraseHit {
                    score: score as usize,
                    document,
                });
            }
        }
    }

    /// Number of suffixes in the array.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl fmt::Debug for SuffixArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixArray")
            .field("documents", &self.haystack.len())
            .field("suffixes", &self.suffixes.len())
            .finish()
    }
}
