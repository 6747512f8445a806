use std::collections::HashMap;

use yomi_types::Word;

/// Dictionary fields attached to a word at lookup time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub reading: String,
    pub meaning: String,
    pub part_of_speech: String,
    pub pitch: String,
}

/// Word lookup keyed by the word's surface text
pub trait WordLookup: Send + Sync {
    fn lookup(&self, term: &str) -> Option<LookupResult>;
}

impl WordLookup for HashMap<String, LookupResult> {
    fn lookup(&self, term: &str) -> Option<LookupResult> {
        self.get(term).cloned()
    }
}

/// Copy of `word` with dictionary fields filled in, or an unchanged copy on a miss
pub fn enrich_word(word: &Word, lookup: &dyn WordLookup) -> Word {
    match lookup.lookup(&word.text) {
        Some(found) => Word {
            id: word.id.clone(),
            text: word.text.clone(),
            reading: found.reading,
            meaning: found.meaning,
            part_of_speech: found.part_of_speech,
            pitch: found.pitch,
        },
        None => word.clone(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
