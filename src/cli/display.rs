// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the sifter CLI.
//!
//! Results go to stdout, one per line, so they can be piped. Colors are only
//! used on a TTY and never when `NO_COLOR` is set. `SIFTER_THEME=light` (or a
//! light `COLORFGBG` background) switches to darker shades.

use sifter::{Document, StringMatch};
use std::sync::OnceLock;

/// Longest field value printed in full; longer ones are cut at a char boundary.
pub const PREVIEW_CHARS: usize = 72;

const RESET: &str = "\x1b[0m";

/// What a piece of output is. Each role has one color per background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DocId,
    FieldName,
    Term,
    Matched,
    Range,
    StrongScore,
    Score,
    WeakScore,
}

impl Role {
    fn code(self, light: bool) -> &'static str {
        match (self, light) {
            (Role::DocId | Role::Term, false) => "\x1b[38;2;86;182;194m",
            (Role::DocId | Role::Term, true) => "\x1b[38;2;1;132;188m",
            (Role::FieldName | Role::Range, false) => "\x1b[2m\x1b[38;2;92;99;112m",
            (Role::FieldName | Role::Range, true) => "\x1b[2m\x1b[38;2;160;161;167m",
            (Role::Matched | Role::Score, false) => "\x1b[38;2;152;195;121m",
            (Role::Matched | Role::Score, true) => "\x1b[38;2;80;161;79m",
            (Role::StrongScore, false) => "\x1b[1m\x1b[38;2;166;226;46m",
            (Role::StrongScore, true) => "\x1b[1m\x1b[38;2;68;140;39m",
            (Role::WeakScore, false) => "\x1b[38;2;229;192;123m",
            (Role::WeakScore, true) => "\x1b[38;2;193;132;1m",
        }
    }
}

fn light_background() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| {
        if let Ok(theme) = std::env::var("SIFTER_THEME") {
            return theme.eq_ignore_ascii_case("light");
        }
        // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8)
    })
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn styled(role: Role, text: &str, colors: bool, light: bool) -> String {
    if colors {
        format!("{}{}{}", role.code(light), text, RESET)
    } else {
        text.to_string()
    }
}

/// Wrap `text` in the color for `role`, when colors are on.
pub fn paint(role: Role, text: &str) -> String {
    styled(role, text, use_colors(), light_background())
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "...".
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Score, right-aligned. Integral scores print without decimals.
pub fn score_value(score: f64) -> String {
    let text = if score.fract() == 0.0 {
        format!("{:>8.0}", score)
    } else {
        format!("{:>8.3}", score)
    };
    let role = if score >= 10.0 {
        Role::StrongScore
    } else if score >= 1.0 {
        Role::Score
    } else {
        Role::WeakScore
    };
    paint(role, &text)
}

/// `field=value` pairs of `document`, values previewed.
pub fn document_summary(document: &Document) -> String {
    document
        .fields()
        .map(|(name, value)| format!("{}={}", paint(Role::FieldName, name), preview(value, PREVIEW_CHARS)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One ranked hit: rank, score, document id and fields.
pub fn hit_line(rank: usize, score: f64, document: &Document) -> String {
    format!(
        "{:>3}. {} {}  {}",
        rank,
        score_value(score),
        paint(Role::DocId, &format!("{:>6}", format!("#{}", document.id))),
        document_summary(document)
    )
}

/// One dictionary match: byte range, then the matched entry.
pub fn match_line(m: &StringMatch) -> String {
    let (begin, end) = m.range;
    format!(
        "{} {}",
        paint(Role::Range, &format!("[{:>4}, {:>4})", begin, end)),
        paint(Role::Matched, &m.matched)
    )
}

/// Header line for a term's posting list.
pub fn term_header(term: &str, document_frequency: usize) -> String {
    format!(
        "{} {}",
        paint(Role::Term, term),
        paint(Role::Range, &format!("(df={})", document_frequency))
    )
}
