// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizers: where tokens begin and end.
//!
//! A tokenizer only reports byte ranges. The string and (string, range) views
//! are derived from those, so an implementation has exactly one thing to get
//! right: left-to-right, non-overlapping (for words) ranges that fall on UTF-8
//! character boundaries.

use regex::Regex;
use std::sync::LazyLock;

/// A half-open byte range `[start, end)` into the tokenized buffer.
pub type TokenRange = (usize, usize);

/// Splits a buffer into token ranges. Must be deterministic and pure.
pub trait Tokenizer {
    /// Byte ranges of the tokens in `buffer`, in ascending order.
    fn ranges(&self, buffer: &str) -> Vec<TokenRange>;

    /// The token substrings of `buffer`.
    fn strings<'a>(&self, buffer: &'a str) -> Vec<&'a str> {
        self.ranges(buffer)
            .into_iter()
            .map(|(start, end)| &buffer[start..end])
            .collect()
    }

    /// The (substring, range) pairs of `buffer`.
    fn tokens<'a>(&self, buffer: &'a str) -> Vec<(&'a str, TokenRange)> {
        self.ranges(buffer)
            .into_iter()
            .map(|(start, end)| (&buffer[start..end], (start, end)))
            .collect()
    }

    /// Tokenize and re-join with single spaces.
    ///
    /// Makes callers robust to nuances in whitespace and punctuation.
    fn join(&self, buffer: &str) -> String {
        self.strings(buffer).join(" ")
    }
}

/// Unicode word characters (letters, marks, digits, connector punctuation).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Splits on runs of Unicode word characters (`\w+`). Everything else is a separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn ranges(&self, buffer: &str) -> Vec<TokenRange> {
        WORD.find_iter(buffer).map(|m| (m.start(), m.end())).collect()
    }
}

/// Overlapping fixed-width character shingles ("banan" → "ban", "ana", "nan").
///
/// Not whitespace- or punctuation-aware. A buffer no longer than the width
/// yields a single shorter-than-usual shingle; an empty buffer yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct ShingleGenerator {
    width: usize,
}

impl ShingleGenerator {
    pub fn new(width: usize) -> Self {
        assert!(width > 0, "shingle width must be positive");
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Tokenizer for ShingleGenerator {
    fn ranges(&self, buffer: &str) -> Vec<TokenRange> {
        if buffer.is_empty() {
            return Vec::new();
        }

        // char_starts[i] = byte index of character i, plus a trailing sentinel
        let mut char_starts: Vec<usize> = buffer.char_indices().map(|(i, _)| i).collect();
        let char_count = char_starts.len();
        char_starts.push(buffer.len());

        if char_count <= self.width {
            return vec![(0, buffer.len())];
        }

        (0..=char_count - self.width)
            .map(|i| (char_starts[i], char_starts[i + self.width]))
            .collect()
    }
}
