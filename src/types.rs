// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every index in the crate.
//!
//! # Invariants
//!
//! - **DocId**: dense, assigned by the corpus in iteration order.
//! - **Posting**: immutable once created; within a posting list, `doc_id` is
//!   strictly increasing. The inverted index builder asserts this.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a term frequency or a byte offset where a
/// document ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense term identifier handed out by the [`TermDictionary`](crate::TermDictionary).
pub type TermId = u32;

// =============================================================================
// POSTINGS
// =============================================================================

/// One entry in a non-positional posting list.
///
/// `Copy` on purpose: posting iterators hand these out by value, so a query
/// never holds a borrow into the index longer than one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// How many times the term occurs in the document's indexed fields.
    pub term_frequency: u32,
}

impl Posting {
    pub fn new(doc_id: impl Into<DocId>, term_frequency: u32) -> Self {
        Self {
            doc_id: doc_id.into(),
            term_frequency,
        }
    }
}

/// A lazily produced, single-pass sequence of postings in ascending `doc_id` order.
pub type PostingsIter<'a> = Box<dyn Iterator<Item = Posting> + 'a>;
