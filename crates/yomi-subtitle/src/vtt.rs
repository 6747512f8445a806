use yomi_core::preprocess::clean_subtitle_content;
use yomi_types::TimedSegment;

use crate::markup::join_cue_lines;
use crate::timestamp::parse_time_range;

const ARROW: &str = "-->";

struct PendingCue<'a> {
    start_time: f64,
    end_time: f64,
    lines: Vec<&'a str>,
}

/// Parse WebVTT content.
///
/// Everything before the first timing line (the `WEBVTT` header and any
/// leading metadata) is skipped. Lines that do not follow a timing line,
/// such as cue identifiers and `NOTE` blocks, are ignored. Cues are numbered
/// from 1 in emission order and empty cues are dropped.
pub fn parse_vtt(content: &str) -> Vec<TimedSegment> {
    let content = clean_subtitle_content(content);
    let mut segments = Vec::new();
    let mut pending: Option<PendingCue> = None;

    for line in content.lines().skip_while(|line| !line.contains(ARROW)) {
        if line.contains(ARROW) {
            flush(&mut segments, pending.take());
            pending = match parse_time_range(line) {
                Some((start_time, end_time)) => Some(PendingCue {
                    start_time,
                    end_time,
                    lines: Vec::new(),
                }),
                None => {
                    tracing::trace!("Skipping malformed VTT timing line: {:?}", line);
                    None
                }
            };
        } else if line.trim().is_empty() {
            flush(&mut segments, pending.take());
        } else if let Some(cue) = pending.as_mut() {
            cue.lines.push(line);
        }
    }
    flush(&mut segments, pending);

    tracing::debug!("Parsed {} VTT cues", segments.len());
    segments
}

fn flush(segments: &mut Vec<TimedSegment>, cue: Option<PendingCue>) {
    let Some(cue) = cue else {
        return;
    };

    let text = join_cue_lines(cue.lines);
    if text.is_empty() {
        return;
    }

    segments.push(TimedSegment {
        index: segments.len() + 1,
        start_time: cue.start_time,
        end_time: cue.end_time,
        text,
    });
}
