use yomi_types::Word;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Break text into clickable words, ids derived from `segment_id`.
    /// Word texts are substrings of `text` in source order. Returns an
    /// empty vec when nothing tokenizable remains.
    fn tokenize(&self, text: &str, segment_id: &str) -> Vec<Word>;
}
