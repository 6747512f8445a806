use yomi_types::Sentence;

/// Sentence whose `[start, end)` range holds `time`
pub fn sentence_at(sentences: &[Sentence], time: f64) -> Option<&Sentence> {
    position_at(sentences, time).map(|i| &sentences[i])
}

pub fn position_at(sentences: &[Sentence], time: f64) -> Option<usize> {
    sentences.iter().position(|s| s.contains(time))
}

/// Seek target for "next line": earliest start strictly after `time`
pub fn next_start_after(sentences: &[Sentence], time: f64) -> Option<f64> {
    sentences
        .iter()
        .map(|s| s.segment.start_time)
        .filter(|start| *start > time)
        .min_by(|a, b| a.total_cmp(b))
}
