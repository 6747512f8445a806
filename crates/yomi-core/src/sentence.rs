use yomi_types::{Sentence, TimedSegment, Word};

use crate::dictionary::{WordLookup, enrich_word};
use crate::error::ImportError;
use crate::language::LanguageProcessor;

/// Tokenize one segment. Falls back to a single word holding the whole text
/// so no sentence is rendered without a click target.
pub fn build_sentence(processor: &dyn LanguageProcessor, segment: TimedSegment) -> Sentence {
    let segment_id = segment.id();
    let mut words = processor.tokenize(&segment.text, &segment_id);

    if words.is_empty() {
        tracing::trace!("No words in {}, using whole-text fallback", segment_id);
        words.push(Word::new(&segment_id, 0, segment.text.clone()));
    }

    Sentence::new(segment, words)
}

pub fn build_sentences(
    processor: &dyn LanguageProcessor,
    segments: Vec<TimedSegment>,
) -> Vec<Sentence> {
    let sentences: Vec<Sentence> = segments
        .into_iter()
        .map(|segment| build_sentence(processor, segment))
        .collect();

    tracing::debug!(
        "Built {} {} sentences ({} words)",
        sentences.len(),
        processor.language_code(),
        sentences.iter().map(|s| s.words.len()).sum::<usize>()
    );

    sentences
}

/// Enriched copy of `sentence`, the input is left untouched
pub fn enrich_sentence(sentence: &Sentence, lookup: &dyn WordLookup) -> Sentence {
    Sentence {
        segment: sentence.segment.clone(),
        words: sentence
            .words
            .iter()
            .map(|word| enrich_word(word, lookup))
            .collect(),
    }
}

/// Turn an empty parse into a reportable error
pub fn require_cues(
    segments: Vec<TimedSegment>,
    file_name: &str,
) -> Result<Vec<TimedSegment>, ImportError> {
    if segments.is_empty() {
        tracing::warn!("No parseable cues in {}", file_name);
        return Err(ImportError::NoCues {
            file_name: file_name.to_string(),
        });
    }
    Ok(segments)
}
