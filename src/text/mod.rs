//! Entry text → clickable spans.
//!
//! - `script`    : script classes and the per-script granularity rule table
//! - `tokenizer` : lossless split of entry text into `Span`s

pub mod script;
pub mod tokenizer;

pub use script::{Granularity, Script, ScriptRule};
pub use tokenizer::{tokenize, Tokenizer};

/// How a span behaves when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Clickable. Its text becomes the next topic.
    Unit,
    /// Whitespace / punctuation run.
    Separator,
    /// Non-Han character inside a span that was split per character.
    /// Rendered as-is, never clickable.
    Inert,
}

/// A contiguous slice of entry text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub script: Script,
}

impl Span {
    pub fn unit(text: impl Into<String>, script: Script) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Unit,
            script,
        }
    }

    pub fn separator(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Separator,
            script: Script::Other,
        }
    }

    pub fn inert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Inert,
            script: Script::Other,
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.kind == SpanKind::Unit
    }
}

/// Concatenate span texts back into the source string.
pub fn join_spans(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
