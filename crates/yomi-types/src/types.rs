use serde::{Deserialize, Serialize};

/// One timed subtitle cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedSegment {
    /// 1-based cue position (from the file for SRT, sequential otherwise)
    pub index: usize,
    /// Seconds from media start
    pub start_time: f64,
    pub end_time: f64,
    /// Cue text, markup stripped, lines joined with a single space
    pub text: String,
}

impl TimedSegment {
    pub fn new(index: usize, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Identifier that word ids are derived from
    pub fn id(&self) -> String {
        format!("seg-{}", self.index)
    }

    /// Half-open range check: `[start_time, end_time)`
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// One clickable lexical unit inside a segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// `<segmentId>-w<index>`
    pub id: String,
    pub text: String,
    // Dictionary fields, empty until enriched
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub pitch: String,
}

impl Word {
    pub fn new(segment_id: &str, index: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("{segment_id}-w{index}"),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn is_enriched(&self) -> bool {
        !(self.reading.is_empty()
            && self.meaning.is_empty()
            && self.part_of_speech.is_empty()
            && self.pitch.is_empty())
    }
}

/// A cue plus its words, the unit shown to the learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(flatten)]
    pub segment: TimedSegment,
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new(segment: TimedSegment, words: Vec<Word>) -> Self {
        Self { segment, words }
    }

    pub fn text(&self) -> &str {
        &self.segment.text
    }

    pub fn contains(&self, time: f64) -> bool {
        self.segment.contains(time)
    }
}
