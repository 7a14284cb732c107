// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges of the crate: loading corpora and parsing options.
//!
//! Query evaluation itself never fails. Unknown terms, empty queries and zero
//! matches are empty results, and broken preconditions (unsorted input to the
//! index builder) are panics, not values of this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid corpus: {reason}")]
    InvalidCorpus { reason: String },

    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
