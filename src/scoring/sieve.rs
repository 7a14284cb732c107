// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-K retention.
//!
//! A [`Sieve`] keeps the K best-scoring items it has seen in a min-heap of
//! size K: the weakest retained item sits at the top and is the one evicted
//! when something better arrives. O(log K) per sift, O(K) memory, no matter
//! how many items pass through.
//!
//! Ties are broken by arrival order: among equal scores the item sifted
//! first is kept and ranked first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that the max-heap's top is the weakest item.
struct Weakest<T> {
    score: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Weakest<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Weakest<T> {}

impl<T> Ord for Weakest<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed score for min-heap behavior; later arrivals lose ties
        match other.score.total_cmp(&self.score) {
            Ordering::Equal => self.sequence.cmp(&other.sequence),
            ord => ord,
        }
    }
}

impl<T> PartialOrd for Weakest<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the `capacity` highest-scoring items sifted into it.
pub struct Sieve<T> {
    capacity: usize,
    heap: BinaryHeap<Weakest<T>>,
    sifted: u64,
}

impl<T> Sieve<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
            sifted: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer an item. It is retained if it beats the weakest retained item
    /// or if the sieve isn't full yet.
    pub fn sift(&mut self, score: f64, item: T) {
        if self.capacity == 0 {
            return;
        }

        let entry = Weakest {
            score,
            sequence: self.sifted,
            item,
        };
        self.sifted += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(entry);
        } else if let Some(mut weakest) = self.heap.peek_mut() {
            // The new entry only displaces the weakest if it ranks above it
            if entry < *weakest {
                *weakest = entry;
            }
        }
    }

    /// Drain the retained items, best first.
    ///
    /// Destructive: the sieve is empty afterwards, and a second call
    /// returns nothing.
    pub fn winners(&mut self) -> Vec<(f64, T)> {
        // into_sorted_vec is ascending by Ord, i.e. strongest first here
        std::mem::take(&mut self.heap)
            .into_sorted_vec()
            .into_iter()
            .map(|entry| (entry.score, entry.item))
            .collect()
    }
}
