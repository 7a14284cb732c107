// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A [`Ranker`] scores one document at a time from the query terms that
//! matched it. A [`Sieve`] keeps the best K of those scores. The search
//! engine and the suffix array both rank through a sieve.

mod ranker;
mod sieve;

pub use ranker::*;
pub use sieve::*;
