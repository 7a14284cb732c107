// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over an inverted index.
//!
//! [`SearchEngine`] does N-out-of-M ranked retrieval, document at a time.
//! The options types here also drive phrase-prefix search on the
//! [`SuffixArray`](crate::index::SuffixArray).

mod engine;
mod options;

pub use engine::*;
pub use options::*;
