// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Debug-mode assertions that verify the structures right after they are
//! built. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Invariant                                      |
//! |--------------------------------|------------------------------------------------|
//! | `check_posting_list_sorted`    | doc ids strictly increasing within a list      |
//! | `check_posting_lists`          | the above, plus no empty lists                 |
//! | `check_suffix_entries_valid`   | offsets in bounds and on char boundaries       |
//! | `check_suffix_array_sorted`    | suffixes in byte-lexicographic order           |
//!
//! # Usage
//!
//! ```ignore
//! use sifter::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_posting_list_sorted(&postings);
//!
//! // In release builds, this is a no-op
//! ```

use crate::index::suffix_array::SuffixRef;
use crate::types::{DocId, Posting};

// ============================================================================
// POSTING LIST CONTRACTS
// ============================================================================

/// Check that doc ids in one posting list are strictly increasing.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair that is out of order or duplicated.
#[inline]
pub fn check_posting_list_sorted(postings: &[Posting]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, pair) in postings.windows(2).enumerate() {
        debug_assert!(
            pair[0].doc_id < pair[1].doc_id,
            "Contract violation: PostingList.Sorted - \
             postings[{}].doc_id {} >= postings[{}].doc_id {}",
            i,
            pair[0].doc_id,
            i + 1,
            pair[1].doc_id
        );
    }
}

/// Check every posting list of an index.
#[inline]
pub fn check_posting_lists(lists: &[Vec<Posting>]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (term_id, postings) in lists.iter().enumerate() {
        debug_assert!(
            !postings.is_empty(),
            "Contract violation: PostingList.NonEmpty - term {} has no postings",
            term_id
        );
        check_posting_list_sorted(postings);
    }
}

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that every suffix points inside its buffer, on a char boundary.
#[inline]
pub fn check_suffix_entries_valid(haystack: &[(DocId, String)], suffixes: &[SuffixRef]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, r) in suffixes.iter().enumerate() {
        let text = haystack.get(r.haystack).map(|(_, t)| t.as_str());
        debug_assert!(
            text.is_some_and(|t| r.offset < t.len() && t.is_char_boundary(r.offset)),
            "Contract violation: SuffixRef.WellFormed - \
             suffixes[{}] = ({}, {}) is out of bounds or splits a character",
            i,
            r.haystack,
            r.offset
        );
    }
}

/// Check that a suffix array is sorted lexicographically.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(haystack: &[(DocId, String)], suffixes: &[SuffixRef]) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_suffix_entries_valid(haystack, suffixes);

    let suffix = |r: &SuffixRef| {
        haystack
            .get(r.haystack)
            .and_then(|(_, t)| t.get(r.offset..))
            .unwrap_or("")
    };

    for i in 1..suffixes.len() {
        let prev_suffix = suffix(&suffixes[i - 1]);
        let curr_suffix = suffix(&suffixes[i]);

        debug_assert!(
            prev_suffix <= curr_suffix,
            "Contract violation: SuffixArray.Sorted - \
             suffixes[{}] ('{}') > suffixes[{}] ('{}')",
            i - 1,
            prev_suffix.chars().take(20).collect::<String>(),
            i,
            curr_suffix.chars().take(20).collect::<String>()
        );
    }
}
