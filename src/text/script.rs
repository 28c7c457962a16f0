//! Script detection and click granularity.
//!
//! Scripts written without spaces between words get per-character units;
//! everything else is clicked a whole word at a time. The table is ordered:
//! the first rule whose script appears in a word decides how that word is
//! split.

/// Script class of a clickable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// CJK Unified Ideographs.
    Han,
    Other,
}

/// Click granularity for words containing a given script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Every character of the script is its own unit; other characters in
    /// the same word become inert.
    Character,
    /// The whole word is one unit.
    Word,
}

/// One row of the granularity table.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRule {
    pub script: Script,
    pub matches: fn(char) -> bool,
    pub granularity: Granularity,
}

impl ScriptRule {
    pub const HAN: ScriptRule = ScriptRule {
        script: Script::Han,
        matches: is_han,
        granularity: Granularity::Character,
    };

    pub fn matches(&self, c: char) -> bool {
        (self.matches)(c)
    }
}

/// CJK Unified Ideographs block, U+4E00..=U+9FFF.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Full-width punctuation treated like its ASCII counterpart.
const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', '“', '”', '‘', '’', '（', '）', '【', '】', '「',
    '」', '『', '』', '《', '》', '〈', '〉', '…', '—',
];

const ASCII_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Word delimiter: whitespace or one of the fixed punctuation marks.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || ASCII_PUNCTUATION.contains(&c) || CJK_PUNCTUATION.contains(&c)
}
