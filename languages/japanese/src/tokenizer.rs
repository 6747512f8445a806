use std::sync::LazyLock;

use yomi_config::tokenizer::TokenizerConfig;
use yomi_core::preprocess::fold_char;
use yomi_types::Word;

use crate::charset::{CharClass, DEFAULT_PARTICLES, DEFAULT_PUNCTUATION, classify};

const VOICED_MARK: char = '\u{3099}';
const SEMI_VOICED_MARK: char = '\u{309A}';

static DEFAULT_TOKENIZER: LazyLock<JapaneseTokenizer> = LazyLock::new(JapaneseTokenizer::new);

/// Split `text` into words using the built-in particle and punctuation sets
pub fn tokenize(text: &str, segment_id: &str) -> Vec<Word> {
    DEFAULT_TOKENIZER.tokenize(text, segment_id)
}

/// Particle and punctuation sets driving the scan
#[derive(Debug, Clone)]
pub struct ScriptRules {
    pub particles: Vec<String>,
    pub punctuation: Vec<char>,
}

impl Default for ScriptRules {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES.iter().map(|p| p.to_string()).collect(),
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
        }
    }
}

impl ScriptRules {
    pub fn from_config(config: &TokenizerConfig) -> Self {
        let mut rules = Self::default();
        if let Some(particles) = &config.particles {
            rules.particles = particles.iter().filter(|p| !p.is_empty()).cloned().collect();
        }
        if let Some(punctuation) = &config.punctuation {
            rules.punctuation = punctuation.clone();
        }
        rules
    }

    pub fn is_particle(&self, s: &str) -> bool {
        self.particles.iter().any(|p| p == s)
    }
}

/// Script-aware word splitter.
///
/// A single greedy left-to-right pass. Whitespace and punctuation are
/// dropped. Kanji runs take trailing okurigana, katakana runs are taken
/// whole, and hiragana runs are cut at particles. Anything else (romaji,
/// digits, symbols) is grouped into runs. This is a heuristic, not a
/// morphological analyzer: okurigana that spells a particle (the て of a
/// te-form) is split off from its stem.
#[derive(Debug, Clone, Default)]
pub struct JapaneseTokenizer {
    rules: ScriptRules,
}

impl JapaneseTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScriptRules) -> Self {
        Self { rules }
    }

    pub fn tokenize(&self, text: &str, segment_id: &str) -> Vec<Word> {
        let chars: Vec<char> = text.chars().collect();
        self.scan(&chars, &chars, segment_id)
    }

    /// Like [`tokenize`](Self::tokenize), but classifies each character by
    /// its NFKC form so half-width katakana and full-width romaji group with
    /// their canonical scripts. Word texts are still cut from `text`.
    pub fn tokenize_folded(&self, text: &str, segment_id: &str) -> Vec<Word> {
        let chars: Vec<char> = text.chars().collect();
        let keys = fold_keys(&chars);
        self.scan(&chars, &keys, segment_id)
    }

    /// `keys[i]` classifies `chars[i]`; surfaces always come from `chars`
    fn scan(&self, chars: &[char], keys: &[char], segment_id: &str) -> Vec<Word> {
        let mut words = Vec::new();
        let mut pos = 0;

        while pos < keys.len() {
            let end = match self.class_at(keys, pos) {
                CharClass::Whitespace | CharClass::Punctuation => {
                    pos += 1;
                    continue;
                }
                CharClass::Kanji => self.scan_kanji(keys, pos),
                CharClass::Katakana => self.scan_run(keys, pos, CharClass::Katakana),
                CharClass::Hiragana => self.scan_hiragana(keys, pos),
                CharClass::Other => self.scan_run(keys, pos, CharClass::Other),
            };

            let surface: String = chars[pos..end].iter().collect();
            words.push(Word::new(segment_id, words.len(), surface));
            pos = end;
        }

        words
    }

    fn class_at(&self, chars: &[char], pos: usize) -> CharClass {
        classify(chars[pos], &self.rules.punctuation)
    }

    /// End of the maximal run of `class` starting at `start`
    fn scan_run(&self, chars: &[char], start: usize, class: CharClass) -> usize {
        let mut end = start;
        while end < chars.len() && self.class_at(chars, end) == class {
            end += 1;
        }
        end
    }

    /// Kanji run plus okurigana. Hiragana is accumulated until the suffix
    /// equals a particle; the suffix is kept only when it is not one.
    fn scan_kanji(&self, chars: &[char], start: usize) -> usize {
        let stem_end = self.scan_run(chars, start, CharClass::Kanji);

        let mut suffix = String::new();
        let mut end = stem_end;
        while end < chars.len() && self.class_at(chars, end) == CharClass::Hiragana {
            suffix.push(chars[end]);
            end += 1;
            if self.rules.is_particle(&suffix) {
                break;
            }
        }

        if suffix.is_empty() || self.rules.is_particle(&suffix) {
            stem_end
        } else {
            end
        }
    }

    /// A lone particle is its own word, otherwise the run stops right after
    /// it spells a particle.
    fn scan_hiragana(&self, chars: &[char], start: usize) -> usize {
        if self.rules.is_particle(&chars[start].to_string()) {
            return start + 1;
        }

        let mut run = String::new();
        let mut end = start;
        while end < chars.len() && self.class_at(chars, end) == CharClass::Hiragana {
            run.push(chars[end]);
            end += 1;
            if self.rules.is_particle(&run) {
                break;
            }
        }
        end
    }
}

/// Per-character fold keys. A standalone voicing mark (`ﾞ`, `ﾟ`) takes the
/// key of the character it modifies so it stays in that character's run.
fn fold_keys(chars: &[char]) -> Vec<char> {
    let mut keys: Vec<char> = Vec::with_capacity(chars.len());
    for &c in chars {
        let key = fold_char(c);
        let key = match (key, keys.last()) {
            (VOICED_MARK | SEMI_VOICED_MARK, Some(&prev)) => prev,
            _ => key,
        };
        keys.push(key);
    }
    keys
}
