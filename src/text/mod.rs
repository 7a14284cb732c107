// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text processing: turning buffers into comparable terms.
//!
//! Every index in the crate routes both documents and queries through the same
//! [`Tokenizer`] and [`Normalizer`] pair. Nothing checks this at runtime. If
//! you build with one pair and query with another, lookups silently miss.

mod normalizer;
mod tokenizer;

pub use normalizer::*;
pub use tokenizer::*;
