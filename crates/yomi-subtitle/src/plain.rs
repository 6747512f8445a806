use yomi_core::preprocess::clean_subtitle_content;
use yomi_types::TimedSegment;

use crate::markup::join_cue_lines;

#[derive(Debug, Clone, Copy)]
pub struct PlainTextOptions {
    /// Seconds each line occupies
    pub line_duration: f64,
}

impl Default for PlainTextOptions {
    fn default() -> Self {
        Self { line_duration: 3.0 }
    }
}

/// Untimed transcript: one cue per non-blank line, laid out back to back from 0
pub fn parse_plain_text(content: &str, options: &PlainTextOptions) -> Vec<TimedSegment> {
    let content = clean_subtitle_content(content);
    let duration = options.line_duration.max(0.0);

    let segments: Vec<TimedSegment> = content
        .lines()
        .map(|line| join_cue_lines([line]))
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(i, text)| {
            let start_time = i as f64 * duration;
            TimedSegment {
                index: i + 1,
                start_time,
                end_time: start_time + duration,
                text,
            }
        })
        .collect();

    tracing::debug!("Parsed {} plain text lines", segments.len());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_become_sequential_cues() {
        let segments = parse_plain_text(
            "猫は可愛い\n\n  <i>コーヒー</i>  \n\n",
            &PlainTextOptions { line_duration: 2.0 },
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], TimedSegment::new(1, 0.0, 2.0, "猫は可愛い"));
        assert_eq!(segments[1], TimedSegment::new(2, 2.0, 4.0, "コーヒー"));
    }

    #[test]
    fn test_empty() {
        assert!(parse_plain_text("\n \n", &PlainTextOptions::default()).is_empty());
    }
}
