use unicode_normalization::UnicodeNormalization;

const BOM: char = '\u{feff}';

/// Strip a leading BOM and normalize CRLF/CR line endings to LF
pub fn clean_subtitle_content(content: &str) -> String {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// NFKC key for one character, used for classification only.
///
/// Expansions keep their first non-space character (`㍻` → `平`, `゛` → U+3099),
/// whitespace maps to itself.
pub fn fold_char(c: char) -> char {
    if c.is_whitespace() {
        return c;
    }
    c.nfkc().find(|f| !f.is_whitespace()).unwrap_or(c)
}
