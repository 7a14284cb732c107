// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use sifter::{
    load_corpus, InMemoryCorpus, InMemoryInvertedIndex, InvertedIndex, PhraseOptions, Ranker,
    SearchEngine, SearchOptions, SimpleNormalizer, StringFinder, SuffixArray, TfIdfConfig,
    WordTokenizer,
};
use std::fs;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands, CorpusArgs, RankerKind};

fn main() {
    // Logs go to stderr; stdout is for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Postings { corpus, terms } => run_postings(&corpus, &terms),
        Commands::Search {
            corpus,
            query,
            threshold,
            limit,
            ranker,
        } => run_search(&corpus, &query, threshold, limit, ranker),
        Commands::Phrase {
            corpus,
            query,
            limit,
        } => run_phrase(&corpus, &query, limit),
        Commands::Scan { dictionary, text } => run_scan(&dictionary, &text),
    }
}

fn open_corpus(args: &CorpusArgs) -> Result<InMemoryCorpus> {
    let corpus = load_corpus(&args.corpus)
        .with_context(|| format!("Failed to load corpus from {}", args.corpus))?;
    if corpus.is_empty() {
        bail!("Corpus {} has no documents", args.corpus);
    }
    Ok(corpus)
}

fn field_names(args: &CorpusArgs) -> Vec<&str> {
    args.fields.iter().map(String::as_str).collect()
}

fn run_postings(args: &CorpusArgs, text: &str) -> Result<()> {
    let corpus = open_corpus(args)?;
    let index =
        InMemoryInvertedIndex::new(&corpus, &field_names(args), SimpleNormalizer, WordTokenizer);

    let mut seen = Vec::new();
    for term in index.terms(text) {
        if seen.contains(&term) {
            continue;
        }
        println!(
            "{}",
            display::term_header(&term, index.document_frequency(&term))
        );
        for posting in index.postings_iterator(&term) {
            println!("    {:>6}  tf={}", posting.doc_id, posting.term_frequency);
        }
        seen.push(term);
    }
    Ok(())
}

fn run_search(
    args: &CorpusArgs,
    query: &str,
    threshold: Option<f64>,
    limit: usize,
    ranker: RankerKind,
) -> Result<()> {
    let options = SearchOptions {
        match_threshold: threshold,
        hit_count: limit,
    };
    options.validate().context("Invalid --threshold")?;

    let corpus = open_corpus(args)?;
    let index =
        InMemoryInvertedIndex::new(&corpus, &field_names(args), SimpleNormalizer, WordTokenizer);
    let engine = SearchEngine::new(&corpus, &index);
    let mut ranker = match ranker {
        RankerKind::BrainDead => Ranker::brain_dead(),
        RankerKind::TfIdf => Ranker::tf_idf(&corpus, &index, TfIdfConfig::default()),
    };

    let mut rank = 0;
    engine.evaluate_with(query, &options, &mut ranker, |hit| {
        rank += 1;
        println!("{}", display::hit_line(rank, hit.score, hit.document));
    });
    if rank == 0 {
        eprintln!("No matches for '{}'", query);
    }
    Ok(())
}

fn run_phrase(args: &CorpusArgs, query: &str, limit: Option<usize>) -> Result<()> {
    let corpus = open_corpus(args)?;
    let array = SuffixArray::new(&corpus, &field_names(args), SimpleNormalizer, WordTokenizer);
    let options = PhraseOptions { hit_count: limit };

    let mut rank = 0;
    array.evaluate_with(query, &options, |hit| {
        rank += 1;
        println!("{}", display::hit_line(rank, hit.score as f64, hit.document));
    });
    if rank == 0 {
        eprintln!("No matches for '{}'", query);
    }
    Ok(())
}

fn run_scan(dictionary: &str, text: &str) -> Result<()> {
    let raw = fs::read_to_string(dictionary)
        .with_context(|| format!("Failed to read dictionary {}", dictionary))?;
    let entries = raw.lines().map(str::trim).filter(|line| !line.is_empty());
    let finder = StringFinder::from_dictionary(entries, WordTokenizer);

    finder.scan_with(text, |m| println!("{}", display::match_line(&m)));
    Ok(())
}
