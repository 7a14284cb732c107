// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary scanning with a character trie.
//!
//! [`StringFinder::scan`] reports every dictionary entry that occurs in a
//! buffer, in one left-to-right pass over its tokens. It keeps a frontier of
//! live partial matches (trie node + where the match started); each token
//! advances every live entry, dead ones are pruned, and entries sitting on a
//! final node are reported. Matches begin and end on token boundaries only.
//!
//! Running time is linear in the buffer and practically independent of the
//! dictionary size. Overlapping matches are all reported: with both "norsk"
//! and "norsk ørret" in the dictionary, "norsk ørret" yields both.

use crate::text::{TokenRange, Tokenizer};
use std::collections::HashMap;
use tracing::info;

/// A trie node. Every node is also the root of its own sub-trie.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    children: HashMap<char, Trie>,
    is_final: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `string`, tokenized and re-joined with single spaces so that
    /// whitespace and punctuation don't matter. Empty entries are ignored.
    pub fn add(&mut self, string: &str, tokenizer: &dyn Tokenizer) {
        let joined = tokenizer.join(string);
        if joined.is_empty() {
            return;
        }

        let mut node = self;
        for c in joined.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_final = true;
    }

    /// Walk `prefix` verbatim from this node.
    pub fn consume(&self, prefix: &str) -> Option<&Trie> {
        let mut node = self;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Whether some added string ends exactly here.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Number of strings in this (sub-)trie.
    pub fn len(&self) -> usize {
        usize::from(self.is_final) + self.children.values().map(Trie::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_final && self.children.is_empty()
    }
}

/// A dictionary entry found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMatch {
    /// The matched text, tokenized and re-joined.
    pub matched: String,
    /// Byte range in the scanned buffer.
    pub range: TokenRange,
}

/// Finds the dictionary entries of a trie that occur in a buffer.
///
/// The tokenizer must be the one the trie was filled with.
pub struct StringFinder<T> {
    trie: Trie,
    tokenizer: T,
}

impl<T: Tokenizer> StringFinder<T> {
    pub fn new(trie: Trie, tokenizer: T) -> Self {
        Self { trie, tokenizer }
    }

    /// Build a trie over `entries` and wrap it.
    pub fn from_dictionary<I, S>(entries: I, tokenizer: T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for entry in entries {
            trie.add(entry.as_ref(), &tokenizer);
        }
        info!(entries = trie.len(), "built trie");
        Self::new(trie, tokenizer)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// All matches in `buffer`, ordered by end position, then by start.
    pub fn scan(&self, buffer: &str) -> Vec<StringMatch> {
        let mut matches = Vec::new();
        self.scan_with(buffer, |m| matches.push(m));
        matches
    }

    /// Like [`scan`](Self::scan), but hands each match to `callback`.
    pub fn scan_with<F>(&self, buffer: &str, mut callback: F)
    where
        F: FnMut(StringMatch),
    {
        // Live partial matches, oldest first
        let mut frontier: Vec<(&Trie, usize)> = Vec::new();
        let mut previous_end: Option<usize> = None;

        for (token, (begin, end)) in self.tokenizer.tokens(buffer) {
            // Entries were stored with a space between tokens. Tokens with
            // nothing between them (scripts without spacing) get no space.
            let juxtaposed = matches!(previous_end, Some(p) if p > 0 && p == begin);
            if !juxtaposed {
                frontier = frontier
                    .into_iter()
                    .filter_map(|(node, start)| Some((node.consume(" ")?, start)))
                    .collect();
            }

            frontier.push((&self.trie, begin));
            frontier = frontier
                .into_iter()
                .filter_map(|(node, start)| Some((node.consume(token)?, start)))
                .collect();

            for &(_, start) in frontier.iter().filter(|(node, _)| node.is_final()) {
                callback(StringMatch {
                    matched: self.tokenizer.join(&buffer[start..end]),
                    range: (start, end),
                });
            }

            previous_end = Some(end);
        }
    }
}
