//! Content-area rendering for `WikiApp`.
//!
//! Shows the loader while a request is outstanding, otherwise the current
//! entry as clickable spans, faded out while a transition is pending.

use eframe::egui;

use super::WikiApp;
use crate::ui::{loader, render_spans};

impl WikiApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(24.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), 200.0), |ui| {
            if self.nav.is_loading() {
                ui.vertical_centered(|ui| loader(ui));
                return;
            }

            // Keyed by generation so each entry starts fully visible.
            let generation = self.nav.generation();
            let opacity = ctx.animate_bool_with_time(
                egui::Id::new(("entry-opacity", generation)),
                !self.nav.is_fading(),
                self.nav.fade_delay().as_secs_f32(),
            );

            let interaction = ui
                .push_id(generation, |ui| {
                    render_spans(ui, self.nav.entry_spans(), opacity, self.hovered)
                })
                .inner;

            self.hovered = interaction.hovered;
            if let Some(i) = interaction.clicked {
                let word = self.nav.entry_spans()[i].text.clone();
                self.on_unit_click(&word, ctx);
            }
        });
    }
}
