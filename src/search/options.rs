// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query options.
//!
//! Both types deserialize from JSON objects. Unknown keys are ignored so a
//! caller can pass one options object to several evaluators.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum number of results.
pub const DEFAULT_HIT_COUNT: usize = 10;

/// Options for [`SearchEngine::evaluate`](crate::search::SearchEngine::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Fraction of the distinct query terms a document must contain.
    /// Absent means "any one of them".
    pub match_threshold: Option<f64>,
    /// Maximum number of results. 0 returns nothing.
    pub hit_count: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            match_threshold: None,
            hit_count: DEFAULT_HIT_COUNT,
        }
    }
}

impl SearchOptions {
    pub fn new(match_threshold: f64, hit_count: usize) -> Self {
        Self {
            match_threshold: Some(match_threshold),
            hit_count,
        }
    }

    /// Parse and validate a JSON options object.
    pub fn from_json(raw: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        match self.match_threshold {
            Some(threshold) if !threshold.is_finite() => Err(Error::InvalidOption {
                name: "match_threshold",
                reason: format!("must be a finite number, got {}", threshold),
            }),
            _ => Ok(()),
        }
    }

    /// N for a query with `term_count` distinct terms: `max(1, floor(threshold × M))`.
    ///
    /// The threshold is clamped to `[0, 1]`, so N never exceeds M (except
    /// for an empty query, where N is 1 and nothing can match).
    pub fn min_matches(&self, term_count: usize) -> usize {
        let threshold = self
            .match_threshold
            .filter(|t| t.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        ((threshold * term_count as f64).floor() as usize).max(1)
    }
}

/// Options for [`SuffixArray::evaluate`](crate::index::SuffixArray::evaluate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseOptions {
    /// Maximum number of results. Absent returns every matching document.
    pub hit_count: Option<usize>,
}

impl PhraseOptions {
    pub fn with_hit_count(hit_count: usize) -> Self {
        Self {
            hit_count: Some(hit_count),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
