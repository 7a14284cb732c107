// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term dictionary: dense integer ids for normalized terms.
//!
//! Ids are handed out first-come-first-served, starting at 0, so the id of a
//! term is also its position in insertion order. The inverted index keys its
//! posting-list arena by these ids.

use crate::types::TermId;
use std::collections::HashMap;

/// Bidirectional term ↔ id mapping.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    /// Terms in id order
    terms: Vec<String>,
    /// Reverse lookup: term → id
    lookup: HashMap<String, TermId>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `term`, assigning the next free one if it's new.
    pub fn add_if_absent(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.lookup.get(term) {
            return id;
        }

        let id = self.terms.len() as TermId;
        assert!(
            id < TermId::MAX,
            "Dictionary overflow: cannot store more than {} terms",
            TermId::MAX
        );

        self.terms.push(term.to_string());
        self.lookup.insert(term.to_string(), id);
        id
    }

    pub fn get_term_id(&self, term: &str) -> Option<TermId> {
        self.lookup.get(term).copied()
    }

    pub fn get_term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(term, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermId)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.as_str(), id as TermId))
    }
}
