use yomi_config::tokenizer::TokenizerConfig;
use yomi_core::language::LanguageProcessor;
use yomi_types::Word;

use crate::tokenizer::{JapaneseTokenizer, ScriptRules};

/// Japanese language processor
#[derive(Debug, Clone, Default)]
pub struct JapaneseProcessor {
    tokenizer: JapaneseTokenizer,
    normalize_width: bool,
}

impl JapaneseProcessor {
    /// Built-in rules, no width folding
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TokenizerConfig) -> Self {
        let rules = ScriptRules::from_config(config);
        tracing::debug!(
            "Japanese processor: {} particles, {} punctuation marks, width folding {}",
            rules.particles.len(),
            rules.punctuation.len(),
            config.normalize_width
        );

        Self {
            tokenizer: JapaneseTokenizer::with_rules(rules),
            normalize_width: config.normalize_width,
        }
    }
}

impl LanguageProcessor for JapaneseProcessor {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn tokenize(&self, text: &str, segment_id: &str) -> Vec<Word> {
        if self.normalize_width {
            self.tokenizer.tokenize_folded(text, segment_id)
        } else {
            self.tokenizer.tokenize(text, segment_id)
        }
    }
}
