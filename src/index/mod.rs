// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searchable structures built over a corpus snapshot.
//!
//! - [`inverted`]: term → posting list, for ranked set-based retrieval
//! - [`merger`]: AND/OR merges over sorted posting streams
//! - [`suffix_array`]: phrase-prefix search with occurrence counting
//! - [`trie`]: dictionary scanning over a buffer in one pass
//!
//! All of them are built once and are read-only afterwards, so a built
//! structure can be shared between any number of concurrent queries.

pub mod inverted;
pub mod merger;
pub mod suffix_array;
pub mod trie;

pub use inverted::{InMemoryInvertedIndex, InvertedIndex};
pub use merger::{Intersection, PostingsMerger, Union};
pub use suffix_array::{PhraseHit, SuffixArray};
pub use trie::{StringFinder, StringMatch, Trie};
