use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::subtitle::SubtitleConfig;
use self::tokenizer::TokenizerConfig;

pub mod dictionary;
pub mod log;
pub mod subtitle;
pub mod tokenizer;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub subtitle: SubtitleConfig,
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load a JSON profile, missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.subtitle.sanitize();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(filter) = var("YOMI_LOG") {
            self.log.filter = filter;
        }

        if let Some(json) = var("YOMI_LOG_JSON").and_then(|v| parse_bool(&v)) {
            self.log.json = json;
        }

        if let Some(duration) = var("YOMI_PLAIN_LINE_DURATION")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|d| subtitle::is_valid_duration(*d))
        {
            self.subtitle.plain_line_duration = duration;
        }

        if let Some(normalize) = var("YOMI_NORMALIZE_WIDTH").and_then(|v| parse_bool(&v)) {
            self.tokenizer.normalize_width = normalize;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);
        assert_eq!(config.subtitle.plain_line_duration, 3.0);
        assert!(config.dictionary.enabled);
        assert!(config.tokenizer.particles.is_none());
        assert!(!config.tokenizer.normalize_width);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("YOMI_LOG", "debug"),
            ("YOMI_LOG_JSON", "true"),
            ("YOMI_PLAIN_LINE_DURATION", "4.5"),
            ("YOMI_NORMALIZE_WIDTH", "yes"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log.filter, "debug");
        assert!(config.log.json);
        assert_eq!(config.subtitle.plain_line_duration, 4.5);
        assert!(config.tokenizer.normalize_width);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        for duration in ["-1", "0", "inf", "NaN"] {
            let mut config = Config::default();
            config.apply_overrides(|key| match key {
                "YOMI_PLAIN_LINE_DURATION" => Some(duration.to_string()),
                "YOMI_LOG_JSON" => Some("maybe".to_string()),
                _ => None,
            });

            assert_eq!(config.subtitle.plain_line_duration, 3.0, "{duration}");
            assert!(!config.log.json);
        }
    }

    #[test]
    fn test_load_partial_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "tokenizer": {{ "particles": ["は", "から"] }}, "dictionary": {{ "paths": ["a.json"] }} }}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.tokenizer.particles,
            Some(vec!["は".to_string(), "から".to_string()])
        );
        assert_eq!(config.dictionary.paths, vec!["a.json".to_string()]);
        assert!(config.dictionary.enabled);
        assert_eq!(config.subtitle.plain_line_duration, 3.0);
    }

    #[test]
    fn test_load_rejects_non_positive_line_duration() {
        for duration in ["0", "-2", "0.0"] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(
                file,
                r#"{{ "subtitle": {{ "plain_line_duration": {duration} }} }}"#
            )
            .unwrap();

            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.subtitle.plain_line_duration, 3.0, "{duration}");
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "subtitle": {{ "plain_line_duration": 1.5 }} }}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.subtitle.plain_line_duration, 1.5);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/yomi.json"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = Config::load(file.path());
        assert!(matches!(invalid, Err(ConfigError::Parse { .. })));
    }
}
