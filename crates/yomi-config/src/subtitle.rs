use serde::{Deserialize, Serialize};

fn default_plain_line_duration() -> f64 {
    3.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SubtitleConfig {
    /// Seconds given to each line of an untimed plain-text transcript
    #[serde(default = "default_plain_line_duration")]
    pub plain_line_duration: f64,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            plain_line_duration: default_plain_line_duration(),
        }
    }
}

impl SubtitleConfig {
    /// Replace a non-positive or non-finite line duration with the default
    pub fn sanitize(&mut self) {
        if !is_valid_duration(self.plain_line_duration) {
            tracing::warn!(
                "Ignoring plain_line_duration {}, using {}",
                self.plain_line_duration,
                default_plain_line_duration()
            );
            self.plain_line_duration = default_plain_line_duration();
        }
    }
}

pub(crate) fn is_valid_duration(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}
