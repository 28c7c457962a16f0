use super::script::{is_delimiter, Granularity, Script, ScriptRule};
use super::Span;

/// Splits entry text into spans.
///
/// Delimiter runs (whitespace and punctuation) come out as separators. Each
/// word between them is checked against the rule table and the first rule
/// whose script occurs in the word decides its shape. A `Character` rule
/// splits the word, wrapping matching characters as units and everything
/// else as inert. A `Word` rule keeps the word whole, tagged with the rule's
/// script. Words no rule matches become a single `Script::Other` unit.
///
/// A Latin run glued to a Han character (`"AI的"`) therefore yields inert
/// single letters; that matches what users of the web version see.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Vec<ScriptRule>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            rules: vec![ScriptRule::HAN],
        }
    }
}

impl Tokenizer {
    pub fn new(rules: Vec<ScriptRule>) -> Self {
        Self { rules }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for (is_sep, run) in delimiter_runs(text) {
            if is_sep {
                spans.push(Span::separator(run));
            } else {
                self.split_word(run, &mut spans);
            }
        }
        spans
    }

    fn split_word(&self, word: &str, out: &mut Vec<Span>) {
        let rule = self
            .rules
            .iter()
            .find(|r| word.chars().any(|c| r.matches(c)));

        let Some(rule) = rule else {
            out.push(Span::unit(word, Script::Other));
            return;
        };
        if rule.granularity == Granularity::Word {
            out.push(Span::unit(word, rule.script));
            return;
        }

        for (i, c) in word.char_indices() {
            let ch = &word[i..i + c.len_utf8()];
            if rule.matches(c) {
                out.push(Span::unit(ch, rule.script));
            } else {
                out.push(Span::inert(ch));
            }
        }
    }
}

/// Tokenize with the default (Han per-character) rule table.
pub fn tokenize(text: &str) -> Vec<Span> {
    Tokenizer::default().tokenize(text)
}

/// Maximal runs of delimiter / non-delimiter characters, in order.
fn delimiter_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let sep = is_delimiter(c);
        match current {
            Some(prev) if prev != sep => {
                runs.push((prev, &text[start..i]));
                start = i;
                current = Some(sep);
            }
            None => current = Some(sep),
            _ => {}
        }
    }
    if let Some(sep) = current {
        runs.push((sep, &text[start..]));
    }
    runs
}
