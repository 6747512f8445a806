use serde::{Deserialize, Serialize};

fn default_normalize_width() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Replaces the built-in particle set when present
    pub particles: Option<Vec<String>>,
    /// Replaces the built-in punctuation set when present
    pub punctuation: Option<Vec<char>>,
    /// Fold full-width forms with NFKC before tokenizing
    #[serde(default = "default_normalize_width")]
    pub normalize_width: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            particles: None,
            punctuation: None,
            normalize_width: default_normalize_width(),
        }
    }
}
