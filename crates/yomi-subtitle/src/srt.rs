use std::sync::LazyLock;

use regex::Regex;
use yomi_core::preprocess::clean_subtitle_content;
use yomi_types::TimedSegment;

use crate::markup::join_cue_lines;
use crate::timestamp::parse_time_range;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid block separator regex"));

/// Parse SubRip content. Malformed blocks are dropped, never fatal.
pub fn parse_srt(content: &str) -> Vec<TimedSegment> {
    let content = clean_subtitle_content(content);

    let segments: Vec<TimedSegment> = BLOCK_SEPARATOR
        .split(&content)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter_map(parse_block)
        .collect();

    tracing::debug!("Parsed {} SRT cues", segments.len());
    segments
}

fn parse_block(block: &str) -> Option<TimedSegment> {
    let mut lines = block.lines();

    let Some(index) = lines.next().and_then(|l| l.trim().parse::<usize>().ok()) else {
        tracing::trace!("Skipping SRT block without index: {:?}", block);
        return None;
    };

    let Some((start_time, end_time)) = lines.next().and_then(parse_time_range) else {
        tracing::trace!("Skipping SRT block {} without timing", index);
        return None;
    };

    let text = join_cue_lines(lines);
    if text.is_empty() {
        tracing::trace!("Skipping SRT block {} without text", index);
        return None;
    }

    Some(TimedSegment {
        index,
        start_time,
        end_time,
        text,
    })
}
