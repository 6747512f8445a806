use std::sync::LazyLock;

use regex::Regex;

/// `H:MM:SS,mmm`, `HH:MM:SS.mmm` or the short `MM:SS,mmm`
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{1,2}):)?(\d{1,2}):(\d{2})[,.](\d{3})$").expect("Invalid timestamp regex")
});

/// `<start> --> <end>` at the start of a line, trailing cue settings allowed
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*((?:\d{1,2}:)?\d{1,2}:\d{2}[,.]\d{3})\s*-->\s*((?:\d{1,2}:)?\d{1,2}:\d{2}[,.]\d{3})",
    )
    .expect("Invalid time range regex")
});

/// Timestamp to seconds from media start
pub fn parse_timestamp(timestamp: &str) -> Option<f64> {
    let caps = TIMESTAMP.captures(timestamp.trim())?;

    let hours: f64 = match caps.get(1) {
        Some(h) => h.as_str().parse().ok()?,
        None => 0.0,
    };
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    let millis: f64 = caps[4].parse().ok()?;

    Some(hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0)
}

/// Parse a cue timing line into `(start, end)` seconds
pub fn parse_time_range(line: &str) -> Option<(f64, f64)> {
    let caps = TIME_RANGE.captures(line)?;
    let start = parse_timestamp(&caps[1])?;
    let end = parse_timestamp(&caps[2])?;
    Some((start, end))
}
