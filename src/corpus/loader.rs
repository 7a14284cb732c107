// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpora from disk.
//!
//! Two formats:
//! - **JSON**: an array of flat objects. Strings are kept verbatim, numbers and
//!   booleans become their JSON text, `null` means "field absent".
//! - **Lines**: one document per non-empty line, stored in the `body` field.
//!
//! Ids are assigned densely in file order.

use super::{Document, InMemoryCorpus};
use crate::error::{Error, Result};
use crate::types::DocId;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Field name used by the line-oriented format.
pub const LINE_FIELD: &str = "body";

/// Load a corpus, picking the format from the file extension (`.json` or anything else).
pub fn load_corpus(path: impl AsRef<Path>) -> Result<InMemoryCorpus> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let corpus = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => corpus_from_json(&raw)?,
        _ => corpus_from_lines(&raw),
    };

    tracing::info!(
        path = %path.display(),
        documents = corpus.len(),
        "loaded corpus"
    );
    Ok(corpus)
}

/// Parse a JSON array of flat objects into a corpus.
pub fn corpus_from_json(raw: &str) -> Result<InMemoryCorpus> {
    let records: Vec<Map<String, Value>> = serde_json::from_str(raw)?;
    let mut corpus = InMemoryCorpus::new();

    for (position, record) in records.into_iter().enumerate() {
        let mut document = Document::new(DocId(position as u32));
        for (name, value) in record {
            match value {
                Value::Null => {}
                Value::String(s) => document.set_field(name, s),
                Value::Number(n) => document.set_field(name, n.to_string()),
                Value::Bool(b) => document.set_field(name, b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::InvalidCorpus {
                        reason: format!(
                            "document {} field '{}' is not a scalar",
                            position, name
                        ),
                    });
                }
            }
        }
        corpus.add_document(document);
    }

    Ok(corpus)
}

/// One document per non-empty line.
pub fn corpus_from_lines(raw: &str) -> InMemoryCorpus {
    let mut corpus = InMemoryCorpus::new();
    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        corpus.add([(LINE_FIELD, line)]);
    }
    corpus
}
