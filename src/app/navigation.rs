//! Navigation methods for `WikiApp`.
//!
//! User actions go to the `Navigator` stamped with the current time. Once a
//! fade elapses the navigator hands back an `EntryRequest`, which runs on a
//! worker thread; finished text comes back over a channel polled each frame.

use std::sync::Arc;
use std::time::Instant;

use eframe::egui;
use infinity_wiki::engine::EntryRequest;

use super::WikiApp;

impl WikiApp {
    /// Run `request` on a worker thread.
    pub fn dispatch(&mut self, request: EntryRequest, ctx: &egui::Context) {
        let engine = Arc::clone(&self.engine);
        let tx = self.entry_tx.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let text = request.run(&*engine);
            let _ = tx.send(text);
            ctx.request_repaint();
        });
    }

    /// Apply every entry that finished since the last frame.
    pub fn check_entries(&mut self) {
        while let Ok(text) = self.entry_rx.try_recv() {
            self.nav.complete(text);
            self.hovered = None;
        }
    }

    /// Commit a due transition and keep frames coming until the next one.
    pub fn drive(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(request) = self.nav.tick(now) {
            self.dispatch(request, ctx);
        }
        if let Some(deadline) = self.nav.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    pub fn on_unit_click(&mut self, word: &str, ctx: &egui::Context) {
        if self.nav.click_unit(word, Instant::now()) {
            ctx.request_repaint_after(self.nav.fade_delay());
        }
    }

    pub fn on_breadcrumb(&mut self, index: usize, ctx: &egui::Context) {
        if self.nav.navigate_to(index, Instant::now()) {
            ctx.request_repaint_after(self.nav.fade_delay());
        }
    }

    pub fn on_toggle_language(&mut self, ctx: &egui::Context) {
        self.nav.toggle_language(Instant::now());
        ctx.request_repaint_after(self.nav.fade_delay());
    }
}
