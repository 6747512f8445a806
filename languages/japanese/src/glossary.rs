use std::collections::HashMap;

use serde::Deserialize;
use yomi_core::dictionary::{LoadError, LookupResult, WordLookup};

/// One headword with the fields attached to clicked words
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    pub term: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub pitch: String,
}

impl GlossaryEntry {
    fn to_lookup_result(&self) -> LookupResult {
        LookupResult {
            reading: self.reading.clone(),
            meaning: self.meaning.clone(),
            part_of_speech: self.part_of_speech.clone(),
            pitch: self.pitch.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GlossaryJson {
    List(Vec<GlossaryEntry>),
    Wrapped { entries: Vec<GlossaryEntry> },
}

impl GlossaryJson {
    fn into_entries(self) -> Vec<GlossaryEntry> {
        match self {
            GlossaryJson::List(entries) | GlossaryJson::Wrapped { entries } => entries,
        }
    }
}

/// In-memory word list indexed by term and by reading
#[derive(Debug, Default)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
    term_index: HashMap<String, usize>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `[ { "term": .., "reading": .., ... } ]`, or the same list
    /// wrapped as `{ "entries": [..] }`
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: GlossaryJson =
            serde_json::from_str(json).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

        let mut glossary = Self::new();
        for entry in data.into_entries() {
            glossary.insert(entry);
        }
        Ok(glossary)
    }

    /// Add an entry, replacing any existing entry with the same term
    pub fn insert(&mut self, entry: GlossaryEntry) {
        if entry.term.is_empty() {
            return;
        }

        match self.term_index.get(&entry.term) {
            Some(&idx) => {
                let old_reading = std::mem::take(&mut self.entries[idx].reading);
                self.unindex_reading(&old_reading, idx);
                self.index_reading(&entry.reading, idx);
                self.entries[idx] = entry;
            }
            None => {
                let idx = self.entries.len();
                self.term_index.insert(entry.term.clone(), idx);
                self.index_reading(&entry.reading, idx);
                self.entries.push(entry);
            }
        }
    }

    fn index_reading(&mut self, reading: &str, idx: usize) {
        if !reading.is_empty() {
            self.reading_index
                .entry(reading.to_string())
                .or_default()
                .push(idx);
        }
    }

    fn unindex_reading(&mut self, reading: &str, idx: usize) {
        if let Some(indices) = self.reading_index.get_mut(reading) {
            indices.retain(|&i| i != idx);
            if indices.is_empty() {
                self.reading_index.remove(reading);
            }
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Exact term first, then the entry that has held `query` as its
    /// reading the longest
    pub fn get(&self, query: &str) -> Option<&GlossaryEntry> {
        self.term_index
            .get(query)
            .or_else(|| self.reading_index.get(query).and_then(|indices| indices.first()))
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Merge `other` into this glossary, its entries win on equal terms
    pub fn merge(mut self, other: Glossary) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        self
    }
}

impl WordLookup for Glossary {
    fn lookup(&self, term: &str) -> Option<LookupResult> {
        self.get(term).map(GlossaryEntry::to_lookup_result)
    }
}
