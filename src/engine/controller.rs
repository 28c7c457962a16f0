//! Navigation state machine.
//!
//! `Navigator` owns the history, the active language and the current entry.
//! It never blocks and never spawns anything. The host feeds it user actions
//! and the current time, runs the `EntryRequest`s it hands back, and reports
//! each result through [`Navigator::complete`].
//!
//! ```text
//!   click / navigate / toggle        tick(now >= deadline)         complete(text)
//!  Ready ─────────────────► Fading ─────────────────────► Loading ──────────────► Ready
//! ```
//!
//! Clicks and breadcrumb navigation are dropped while loading, so only one
//! request is outstanding at a time. The language toggle is not guarded.

use std::time::{Duration, Instant};

use crate::engine::history::History;
use crate::engine::pipeline::EntryRequest;
use crate::lang::Language;
use crate::text::{Span, Tokenizer};

/// Default fade-out before a transition commits.
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,
    /// Fading out; a transition commits at the deadline.
    Fading,
    /// Waiting for the backend.
    Loading,
    /// Showing an entry (possibly a fallback error entry).
    Ready,
}

/// Transition waiting for the fade to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Push(String),
    Truncate(usize),
    /// Number of toggle presses since the fade started.
    ToggleLanguage(u32),
}

pub struct Navigator {
    language: Language,
    history: History,
    entry_text: String,
    spans: Vec<Span>,
    tokenizer: Tokenizer,
    /// Requests issued but not yet completed.
    in_flight: usize,
    fading: bool,
    generation: u64,
    fade_delay: Duration,
    pending: Option<(Pending, Instant)>,
}

impl Navigator {
    pub fn new(language: Language, fade_delay: Duration) -> Self {
        Self {
            language,
            history: History::new(language.root_label()),
            entry_text: String::new(),
            spans: Vec::new(),
            tokenizer: Tokenizer::default(),
            in_flight: 0,
            fading: false,
            generation: 0,
            fade_delay,
            pending: None,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else if self.pending.is_some() {
            Phase::Fading
        } else if self.generation > 0 {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// True from the user action until the next entry arrives (or, for a
    /// language toggle, until the toggle commits).
    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_topic(&self) -> &str {
        self.history.current()
    }

    pub fn entry_text(&self) -> &str {
        &self.entry_text
    }

    pub fn entry_spans(&self) -> &[Span] {
        &self.spans
    }

    /// Bumped on every completed load; a render identity for the entry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fade_delay(&self) -> Duration {
        self.fade_delay
    }

    /// When the pending transition commits, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    // ── User actions ─────────────────────────────────────────────────────────

    /// Initial load on mount: fetch the root entry for the current language.
    pub fn start(&mut self) -> EntryRequest {
        self.history.reset(self.language.root_label());
        self.begin_load(EntryRequest::Initial(self.language))
    }

    /// A unit was clicked. Returns whether the click was accepted.
    pub fn click_unit(&mut self, word: &str, now: Instant) -> bool {
        if self.is_loading() || self.pending.is_some() {
            log::debug!("click on {word:?} ignored ({:?})", self.phase());
            return false;
        }
        self.schedule(Pending::Push(word.to_string()), now);
        true
    }

    /// A breadcrumb was clicked. Returns whether navigation was accepted.
    pub fn navigate_to(&mut self, index: usize, now: Instant) -> bool {
        if self.is_loading() || self.pending.is_some() {
            log::debug!("navigate to {index} ignored ({:?})", self.phase());
            return false;
        }
        if index + 1 >= self.history.len() {
            // Already there, or not a breadcrumb at all.
            return false;
        }
        self.schedule(Pending::Truncate(index), now);
        true
    }

    /// Switch language after the fade. Always accepted, even mid-load, and
    /// replaces any click or navigation still waiting on its fade.
    ///
    /// Presses during the fade are counted against the first deadline; each
    /// one flips the language once when it commits.
    pub fn toggle_language(&mut self, now: Instant) {
        if let Some((Pending::ToggleLanguage(presses), _)) = &mut self.pending {
            *presses += 1;
            self.fading = true;
            return;
        }
        if let Some((prev, _)) = &self.pending {
            log::debug!("language toggle supersedes pending {prev:?}");
        }
        self.schedule(Pending::ToggleLanguage(1), now);
    }

    // ── Driving ──────────────────────────────────────────────────────────────

    /// Commit the pending transition if its fade has elapsed. Returns the
    /// request the host must run, if the transition needs one.
    pub fn tick(&mut self, now: Instant) -> Option<EntryRequest> {
        let due = matches!(&self.pending, Some((_, at)) if now >= *at);
        if !due {
            return None;
        }
        let (pending, _) = self.pending.take()?;

        match pending {
            Pending::Push(word) => {
                self.history.push(word.clone());
                Some(self.begin_load(EntryRequest::Topic {
                    topic: word,
                    language: self.language,
                }))
            }
            Pending::Truncate(index) => {
                let target = match self.history.navigate_to(index) {
                    Ok(Some(topic)) => topic.to_string(),
                    Ok(None) => {
                        self.fading = false;
                        return None;
                    }
                    Err(e) => {
                        log::warn!("dropping navigation: {e}");
                        self.fading = false;
                        return None;
                    }
                };
                let request = if target == self.language.root_label() {
                    EntryRequest::Initial(self.language)
                } else {
                    EntryRequest::Topic {
                        topic: target,
                        language: self.language,
                    }
                };
                Some(self.begin_load(request))
            }
            Pending::ToggleLanguage(presses) => {
                self.fading = false;
                if presses % 2 == 0 {
                    log::debug!("{presses} language toggles cancel out");
                    return None;
                }
                self.language = self.language.toggled();
                log::info!("language switched to {}", self.language);
                Some(self.start())
            }
        }
    }

    /// Apply a finished request's text. Results are applied in arrival order
    /// and never discarded.
    pub fn complete(&mut self, text: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.spans = self.tokenizer.tokenize(&text);
        self.entry_text = text;
        self.fading = false;
        self.generation += 1;
        log::debug!(
            "entry #{} ready for {:?} ({} spans)",
            self.generation,
            self.history.current(),
            self.spans.len()
        );
    }

    fn schedule(&mut self, pending: Pending, now: Instant) {
        self.fading = true;
        self.pending = Some((pending, now + self.fade_delay));
    }

    fn begin_load(&mut self, request: EntryRequest) -> EntryRequest {
        self.in_flight += 1;
        self.entry_text.clear();
        self.spans.clear();
        log::debug!("requesting {request:?}");
        request
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Language::default(), DEFAULT_FADE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(500);

    /// Navigator that has finished its initial load.
    fn ready(language: Language) -> (Navigator, Instant) {
        let mut nav = Navigator::new(language, FADE);
        let req = nav.start();
        assert_eq!(req, EntryRequest::Initial(language));
        nav.complete("This is the Infinity Wiki.".into());
        (nav, Instant::now())
    }

    fn commit(nav: &mut Navigator, t: Instant) -> Option<EntryRequest> {
        nav.tick(t + FADE)
    }

    #[test]
    fn start_loads_root() {
        let mut nav = Navigator::new(Language::En, FADE);
        assert_eq!(nav.phase(), Phase::Idle);
        nav.start();
        assert_eq!(nav.phase(), Phase::Loading);
        nav.complete("hello".into());
        assert_eq!(nav.phase(), Phase::Ready);
        assert_eq!(nav.generation(), 1);
        assert_eq!(nav.history().topics(), ["Infinity"]);
    }

    #[test]
    fn click_waits_for_fade_then_pushes() {
        let (mut nav, t) = ready(Language::En);
        assert!(nav.click_unit("door", t));
        assert_eq!(nav.phase(), Phase::Fading);
        assert!(nav.is_fading());

        // Before the deadline nothing commits.
        assert_eq!(nav.tick(t + FADE / 2), None);
        assert_eq!(nav.history().len(), 1);

        let req = commit(&mut nav, t);
        assert_eq!(
            req,
            Some(EntryRequest::Topic {
                topic: "door".into(),
                language: Language::En
            })
        );
        assert_eq!(nav.phase(), Phase::Loading);
        assert_eq!(nav.history().topics(), ["Infinity", "door"]);
        assert!(nav.entry_text().is_empty());

        nav.complete("A threshold.".into());
        assert_eq!(nav.phase(), Phase::Ready);
        assert!(!nav.is_fading());
        assert_eq!(nav.generation(), 2);
        assert_eq!(nav.current_topic(), "door");
    }

    #[test]
    fn click_while_loading_is_dropped() {
        let (mut nav, t) = ready(Language::En);
        nav.click_unit("a", t);
        commit(&mut nav, t).unwrap();
        assert!(nav.is_loading());

        assert!(!nav.click_unit("b", t));
        assert_eq!(nav.tick(t + FADE * 4), None);
        assert_eq!(nav.history().topics(), ["Infinity", "a"]);

        nav.complete("entry for a".into());
        assert_eq!(nav.entry_text(), "entry for a");
        assert_eq!(nav.history().topics(), ["Infinity", "a"]);
    }

    #[test]
    fn second_click_during_fade_is_dropped() {
        let (mut nav, t) = ready(Language::En);
        assert!(nav.click_unit("a", t));
        assert!(!nav.click_unit("b", t));
        commit(&mut nav, t);
        assert_eq!(nav.history().topics(), ["Infinity", "a"]);
    }

    #[test]
    fn breadcrumb_to_topic_truncates() {
        let (mut nav, t) = ready(Language::En);
        for word in ["a", "b", "c"] {
            nav.click_unit(word, t);
            commit(&mut nav, t);
            nav.complete(format!("about {word}"));
        }
        assert!(nav.navigate_to(1, t));
        let req = commit(&mut nav, t);
        assert_eq!(
            req,
            Some(EntryRequest::Topic {
                topic: "a".into(),
                language: Language::En
            })
        );
        assert_eq!(nav.history().topics(), ["Infinity", "a"]);
    }

    #[test]
    fn breadcrumb_to_root_uses_initial_request() {
        let (mut nav, t) = ready(Language::Zh);
        nav.click_unit("光", t);
        commit(&mut nav, t);
        nav.complete("……".into());

        assert!(nav.navigate_to(0, t));
        assert_eq!(
            commit(&mut nav, t),
            Some(EntryRequest::Initial(Language::Zh))
        );
        assert_eq!(nav.history().topics(), ["无限"]);
    }

    #[test]
    fn breadcrumb_to_current_or_while_loading_is_ignored() {
        let (mut nav, t) = ready(Language::En);
        assert!(!nav.navigate_to(0, t));
        assert_eq!(nav.phase(), Phase::Ready);
        assert!(!nav.is_fading());

        nav.click_unit("a", t);
        commit(&mut nav, t);
        assert!(!nav.navigate_to(0, t));
        assert_eq!(nav.history().topics(), ["Infinity", "a"]);
    }

    #[test]
    fn toggle_language_resets_history_and_reloads() {
        let (mut nav, t) = ready(Language::Zh);
        nav.click_unit("水", t);
        commit(&mut nav, t);
        nav.complete("……".into());

        nav.toggle_language(t);
        assert_eq!(nav.phase(), Phase::Fading);
        assert_eq!(nav.language(), Language::Zh);

        let req = commit(&mut nav, t);
        assert_eq!(req, Some(EntryRequest::Initial(Language::En)));
        assert_eq!(nav.language(), Language::En);
        assert_eq!(nav.history().topics(), ["Infinity"]);
        assert!(nav.is_loading());
    }

    #[test]
    fn toggle_presses_during_fade_each_flip_once() {
        let (mut nav, t) = ready(Language::Zh);
        nav.toggle_language(t);
        nav.toggle_language(t + Duration::from_millis(100));
        assert_eq!(nav.next_deadline(), Some(t + FADE));

        // Two presses land back on Chinese: no reload, history untouched.
        assert_eq!(nav.tick(t + FADE), None);
        assert_eq!(nav.language(), Language::Zh);
        assert_eq!(nav.phase(), Phase::Ready);
        assert!(!nav.is_fading());
        assert_eq!(nav.generation(), 1);

        nav.toggle_language(t + FADE);
        nav.toggle_language(t + FADE);
        nav.toggle_language(t + FADE + Duration::from_millis(400));
        let req = nav.tick(t + FADE * 2);
        assert_eq!(req, Some(EntryRequest::Initial(Language::En)));
        assert_eq!(nav.language(), Language::En);
    }

    #[test]
    fn toggle_is_accepted_mid_load() {
        let (mut nav, t) = ready(Language::En);
        nav.click_unit("a", t);
        commit(&mut nav, t);
        assert!(nav.is_loading());

        nav.toggle_language(t);
        let req = commit(&mut nav, t);
        assert_eq!(req, Some(EntryRequest::Initial(Language::Zh)));

        // Both outstanding results are applied in arrival order.
        nav.complete("entry for a".into());
        assert!(nav.is_loading());
        nav.complete("此为无限维基。".into());
        assert!(!nav.is_loading());
        assert_eq!(nav.entry_text(), "此为无限维基。");
        assert_eq!(nav.history().topics(), ["无限"]);
    }

    #[test]
    fn completed_text_is_tokenized() {
        let (mut nav, t) = ready(Language::Zh);
        nav.click_unit("门", t);
        commit(&mut nav, t);
        nav.complete(Language::Zh.topic_error_text("门"));

        let units: Vec<_> = nav
            .entry_spans()
            .iter()
            .filter(|s| s.is_clickable())
            .map(|s| s.text.clone())
            .collect();
        assert!(units.contains(&"错".to_string()));
        assert!(units.contains(&"门".to_string()));
    }

    #[test]
    fn next_deadline_tracks_fade() {
        let (mut nav, t) = ready(Language::En);
        assert_eq!(nav.next_deadline(), None);
        nav.click_unit("x", t);
        assert_eq!(nav.next_deadline(), Some(t + FADE));
        commit(&mut nav, t);
        assert_eq!(nav.next_deadline(), None);
    }
}
