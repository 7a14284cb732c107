// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! AND/OR merges over posting streams sorted by doc id.
//!
//! Both merges are two-pointer walks that pull lazily from their inputs.
//! Inputs are never re-sorted: feeding an unsorted stream gives a wrong
//! answer, not an error.
//!
//! When both sides carry the same doc id, the LEFT posting is emitted, for
//! intersections and unions alike. The resulting doc id sequence does not
//! depend on argument order; the term frequencies that come along with it do.

use crate::types::Posting;
use std::cmp::Ordering;
use std::iter::Peekable;

/// Namespace for the two merge operations.
pub struct PostingsMerger;

impl PostingsMerger {
    /// Postings whose doc id appears in both inputs.
    pub fn intersection<A, B>(left: A, right: B) -> Intersection<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Intersection {
            left: left.into_iter(),
            right: right.into_iter(),
        }
    }

    /// One posting per doc id appearing in either input.
    pub fn union<A, B>(left: A, right: B) -> Union<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Union {
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
        }
    }
}

/// Lazy AND merge. See [`PostingsMerger::intersection`].
#[derive(Debug)]
pub struct Intersection<L, R> {
    left: L,
    right: R,
}

impl<L, R> Iterator for Intersection<L, R>
where
    L: Iterator<Item = Posting>,
    R: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let mut left = self.left.next()?;
        let mut right = self.right.next()?;

        loop {
            match left.doc_id.cmp(&right.doc_id) {
                Ordering::Equal => return Some(left),
                Ordering::Less => left = self.left.next()?,
                Ordering::Greater => right = self.right.next()?,
            }
        }
    }
}

/// Lazy OR merge. See [`PostingsMerger::union`].
pub struct Union<L: Iterator, R: Iterator> {
    left: Peekable<L>,
    right: Peekable<R>,
}

impl<L, R> Iterator for Union<L, R>
where
    L: Iterator<Item = Posting>,
    R: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => l.doc_id.cmp(&r.doc_id),
        };

        match order {
            Ordering::Less => self.left.next(),
            Ordering::Greater => self.right.next(),
            Ordering::Equal => {
                self.right.next();
                self.left.next()
            }
        }
    }
}
