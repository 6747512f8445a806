//! Subtitle parsing: SubRip, WebVTT and untimed plain text into [`TimedSegment`]s.
//!
//! Parsers never fail. Malformed cues are dropped and an empty result means
//! nothing parseable was found.

use std::path::Path;

use yomi_types::TimedSegment;

pub mod markup;
pub mod plain;
pub mod srt;
pub mod timestamp;
pub mod vtt;

pub use plain::{PlainTextOptions, parse_plain_text};
pub use srt::parse_srt;
pub use timestamp::{parse_time_range, parse_timestamp};
pub use vtt::parse_vtt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
    Plain,
}

impl SubtitleFormat {
    /// `.vtt` selects WebVTT, everything else falls back to SubRip
    pub fn from_file_name(file_name: &str) -> Self {
        let is_vtt = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("vtt"));

        if is_vtt {
            SubtitleFormat::Vtt
        } else {
            SubtitleFormat::Srt
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
            SubtitleFormat::Plain => "plain",
        }
    }
}

/// Parse subtitle content, picking the parser from the file extension
pub fn parse_subtitle_file(content: &str, file_name: &str) -> Vec<TimedSegment> {
    let format = SubtitleFormat::from_file_name(file_name);
    tracing::debug!("Parsing {} as {}", file_name, format.as_str());
    parse_with_format(content, format, &PlainTextOptions::default())
}

pub fn parse_with_format(
    content: &str,
    format: SubtitleFormat,
    plain: &PlainTextOptions,
) -> Vec<TimedSegment> {
    match format {
        SubtitleFormat::Srt => parse_srt(content),
        SubtitleFormat::Vtt => parse_vtt(content),
        SubtitleFormat::Plain => parse_plain_text(content, plain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VTT: &str = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nこんにちは\n";
    const SRT: &str = "1\n00:00:00,000 --> 00:00:01,000\nこんにちは\n";

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(SubtitleFormat::from_file_name("ep01.vtt"), SubtitleFormat::Vtt);
        assert_eq!(SubtitleFormat::from_file_name("EP01.VTT"), SubtitleFormat::Vtt);
        assert_eq!(SubtitleFormat::from_file_name("ep01.srt"), SubtitleFormat::Srt);
        assert_eq!(SubtitleFormat::from_file_name("ep01.txt"), SubtitleFormat::Srt);
        assert_eq!(SubtitleFormat::from_file_name("ep01"), SubtitleFormat::Srt);
        assert_eq!(SubtitleFormat::from_file_name("vtt"), SubtitleFormat::Srt);
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(parse_subtitle_file(VTT, "a.vtt").len(), 1);
        assert_eq!(parse_subtitle_file(SRT, "a.srt").len(), 1);
        assert_eq!(parse_subtitle_file(SRT, "a.txt").len(), 1);
        // VTT content under a non-vtt name goes through the SRT parser
        assert!(parse_subtitle_file(VTT, "a.txt").is_empty());
    }
}
