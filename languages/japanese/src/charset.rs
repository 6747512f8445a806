//! Script classes used by the tokenizer.

/// Particles that end an okurigana or hiragana run when matched exactly
pub const DEFAULT_PARTICLES: &[&str] = &[
    "は", "が", "を", "に", "の", "で", "へ", "と", "や", "も", "か", "ね", "よ", "わ", "な", "ば",
    "て", "た", "だ",
];

/// Never part of a word
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '。', '、', '！', '？', '「', '」', '『', '』', '（', '）', '・', '…', '.', ',', '!', '?', '(',
    ')', '[', ']',
];

/// Prolonged sound mark
pub const CHOONPU: char = 'ー';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Punctuation,
    Kanji,
    Katakana,
    Hiragana,
    Other,
}

pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3400}'..='\u{4DBF}')
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}') || c == CHOONPU
}

/// Classify `c`, punctuation checked against `punctuation`.
/// Order matters: `・` sits in the katakana block but is punctuation.
pub fn classify(c: char, punctuation: &[char]) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if punctuation.contains(&c) {
        CharClass::Punctuation
    } else if is_kanji(c) {
        CharClass::Kanji
    } else if is_katakana(c) {
        CharClass::Katakana
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else {
        CharClass::Other
    }
}
