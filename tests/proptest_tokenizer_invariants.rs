//! Property-based invariant tests for the tokenizer.
//!
//! Verifies:
//! 1. Lossless: concatenating the spans gives back the input
//! 2. A span made only of delimiters is never clickable
//! 3. Separator runs are maximal: no two adjacent spans are both separators
//! 4. Separator spans contain delimiters only, units never contain one
//! 5. Every Han character lands in its own clickable span

use infinity_wiki::text::script::{is_delimiter, is_han};
use infinity_wiki::text::{join_spans, tokenize, Script, SpanKind};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_wiki_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        prop::char::range('\u{4E00}', '\u{9FFF}'),
        prop::char::range('\u{3041}', '\u{3096}'),
        prop::sample::select(vec![
            '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}', '-', '_',
        ]),
        prop::sample::select(vec![
            '，', '。', '！', '？', '；', '：', '、', '“', '”', '（', '）', '「', '」', '《', '》',
            '…', '—',
        ]),
        prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{3000}', '\u{00A0}']),
    ]
}

fn arb_wiki_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_wiki_char(), 0..64).prop_map(|cs| cs.into_iter().collect())
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_wiki_text(), any::<String>()]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Lossless
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn join_restores_input(text in arb_text()) {
        let spans = tokenize(&text);
        prop_assert_eq!(join_spans(&spans), text);
        prop_assert!(spans.iter().all(|s| !s.text.is_empty()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Delimiter-only spans are never clickable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delimiter_spans_not_clickable(text in arb_text()) {
        for span in tokenize(&text) {
            if span.text.chars().all(is_delimiter) {
                prop_assert!(!span.is_clickable(), "clickable delimiter span {:?}", span.text);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Separator runs are maximal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_adjacent_separators(text in arb_text()) {
        let spans = tokenize(&text);
        for pair in spans.windows(2) {
            prop_assert!(
                !(pair[0].kind == SpanKind::Separator && pair[1].kind == SpanKind::Separator),
                "adjacent separators {:?} {:?}",
                pair[0].text,
                pair[1].text
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Separators hold delimiters only, units hold none
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn kinds_agree_with_delimiter_set(text in arb_wiki_text()) {
        for span in tokenize(&text) {
            match span.kind {
                SpanKind::Separator => prop_assert!(span.text.chars().all(is_delimiter)),
                SpanKind::Unit | SpanKind::Inert => {
                    prop_assert!(!span.text.chars().any(is_delimiter))
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Han characters are single-character units
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn han_is_per_character(text in arb_wiki_text()) {
        let spans = tokenize(&text);
        let han_in_input = text.chars().filter(|&c| is_han(c)).count();
        let han_units = spans
            .iter()
            .filter(|s| s.is_clickable() && s.script == Script::Han)
            .inspect(|s| assert_eq!(s.text.chars().count(), 1))
            .count();
        prop_assert_eq!(han_units, han_in_input);
    }
}
