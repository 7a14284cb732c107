// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sifter command-line interface.
//!
//! Four subcommands. `postings`, `search` and `phrase` load a corpus and
//! query it; `scan` looks for dictionary entries in a piece of text and needs
//! no corpus at all.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sifter",
    about = "In-memory ranked search, phrase-prefix search and dictionary scanning",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the documents come from, and which of their fields to index.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus file: a JSON array of flat objects, or plain text with one
    /// document per line
    #[arg(short, long)]
    pub corpus: String,

    /// Field to index (repeat for several)
    #[arg(short, long = "field", default_value = "body")]
    pub fields: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the posting list of every term in the given text
    Postings {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Text to tokenize into terms
        terms: String,
    },

    /// Ranked N-out-of-M search over the inverted index
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Fraction of the distinct query terms a document must contain
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Ranking function
        #[arg(short, long, value_enum, default_value_t = RankerKind::BrainDead)]
        ranker: RankerKind,
    },

    /// Phrase-prefix search over the suffix array
    Phrase {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Phrase, or the beginning of one
        query: String,

        /// Maximum number of results to return (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find every dictionary entry that occurs in a piece of text
    Scan {
        /// Dictionary file, one entry per line
        #[arg(short, long)]
        dictionary: String,

        /// Text to scan
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankerKind {
    /// Sum of query multiplicity times term frequency
    #[value(name = "braindead")]
    BrainDead,
    /// Log-dampened TF-IDF plus the document's static quality score
    #[value(name = "tfidf")]
    TfIdf,
}
