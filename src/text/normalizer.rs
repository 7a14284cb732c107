// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalizers: buffer-level cleanup plus per-token canonical forms.
//!
//! `canonicalize` runs once on the whole buffer, before tokenization, so token
//! ranges always refer to the canonical buffer. `normalize` runs on each token
//! (or on an already tokenized and re-joined phrase) and produces the form that
//! gets compared.

use std::borrow::Cow;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

pub trait Normalizer {
    /// Buffer-level cleanup. Must be idempotent.
    fn canonicalize<'a>(&self, buffer: &'a str) -> Cow<'a, str>;

    /// Canonical comparison form of a single token.
    fn normalize(&self, token: &str) -> String;
}

/// Case folding only. The buffer passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNormalizer;

impl SimpleNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for SimpleNormalizer {
    fn canonicalize<'a>(&self, buffer: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(buffer)
    }

    fn normalize(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// Strips diacritics at the buffer level, then case folds tokens.
///
/// This enables matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// Letters without a decomposition (such as "ø") are kept as they are.
#[cfg(feature = "unicode-normalization")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingNormalizer;

#[cfg(feature = "unicode-normalization")]
impl FoldingNormalizer {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "unicode-normalization")]
impl Normalizer for FoldingNormalizer {
    fn canonicalize<'a>(&self, buffer: &'a str) -> Cow<'a, str> {
        if buffer.is_ascii() {
            return Cow::Borrowed(buffer);
        }
        Cow::Owned(
            buffer
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .collect::<String>(),
        )
    }

    fn normalize(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
