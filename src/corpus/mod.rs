// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Documents and the collections that hold them.
//!
//! Every index is built from a [`Corpus`] snapshot. The contract is small:
//! iterate in ascending, stable `DocId` order, look up by id, report a size.
//! [`InMemoryCorpus`] is the only backend shipped here, but the indexes take
//! `&dyn Corpus` so others can be plugged in.

mod loader;

pub use loader::*;

use crate::types::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A document: an id plus named string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

impl Document {
    pub fn new(id: impl Into<DocId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// The named field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The named field, or `default` when the document doesn't have it.
    pub fn field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.field(name).unwrap_or(default)
    }

    /// All fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {{", self.id)?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {:?}", name, value)?;
        }
        write!(f, " }}")
    }
}

/// A static document collection.
///
/// Built structures hold a `&dyn Corpus` and are queried from many threads.
pub trait Corpus: Sync {
    /// Number of documents.
    fn size(&self) -> usize;

    /// Random access by id. `None` for ids the corpus doesn't contain.
    fn get_document(&self, id: DocId) -> Option<&Document>;

    /// All documents, in ascending and stable `DocId` order.
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_>;
}

/// A corpus held entirely in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    documents: Vec<Document>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document as-is. Callers are responsible for id order; the
    /// index builders assert it.
    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Append a document built from `fields`, assigning the next dense id.
    pub fn add<I, K, V>(&mut self, fields: I) -> DocId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let id = DocId(self.documents.len() as u32);
        let mut document = Document::new(id);
        for (name, value) in fields {
            document.set_field(name, value);
        }
        self.documents.push(document);
        id
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Corpus for InMemoryCorpus {
    fn size(&self) -> usize {
        self.documents.len()
    }

    fn get_document(&self, id: DocId) -> Option<&Document> {
        // Fast path: dense ids line up with positions
        match self.documents.get(id.as_usize()) {
            Some(document) if document.id == id => Some(document),
            _ => self.documents.iter().find(|d| d.id == id),
        }
    }

    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.documents.iter())
    }
}

impl FromIterator<Document> for InMemoryCorpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}
