//! Page chrome for `WikiApp`.
//!
//! Draws the title, the breadcrumb trail (root label plus every visited
//! topic, each clickable), and the footer caption with the language toggle.

use eframe::egui;

use super::WikiApp;
use crate::ui::{truncate_str, DIM_COLOR};

const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
const FOOTER_COLOR: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const MAX_CRUMB_CHARS: usize = 24;

impl WikiApp {
    pub fn draw_header(&self, ui: &mut egui::Ui) {
        let text = self.nav.language().ui_text();
        ui.add_space(32.0);
        ui.label(
            egui::RichText::new(text.title)
                .size(48.0)
                .color(TITLE_COLOR)
                .extra_letter_spacing(8.0),
        );
        ui.add_space(32.0);
    }

    /// Breadcrumb trail. Hidden while only the root is on the path.
    pub fn draw_breadcrumb(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut clicked = None;

        ui.allocate_ui(egui::vec2(ui.available_width(), 40.0), |ui| {
            let topics = self.nav.history().topics();
            if topics.len() <= 1 {
                return;
            }
            ui.horizontal_wrapped(|ui| {
                for (i, topic) in topics.iter().enumerate() {
                    if i > 0 {
                        ui.label(egui::RichText::new("/").color(DIM_COLOR));
                    }
                    let rt = egui::RichText::new(truncate_str(topic, MAX_CRUMB_CHARS))
                        .size(14.0)
                        .color(DIM_COLOR);
                    let resp = ui.add(
                        egui::Label::new(rt)
                            .selectable(false)
                            .sense(egui::Sense::click()),
                    );
                    if resp.clicked() {
                        clicked = Some(i);
                    }
                    resp.on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(topic.as_str());
                }
            });
        });

        if let Some(index) = clicked {
            self.on_breadcrumb(index, ctx);
        }
    }

    pub fn draw_footer(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let text = self.nav.language().ui_text();
        let mut toggle = false;

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text.footer).size(12.0).color(FOOTER_COLOR));
                ui.add_space(12.0);
                let button = egui::Button::new(
                    egui::RichText::new(text.lang_toggle).size(12.0).color(FOOTER_COLOR),
                )
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(1.0, FOOTER_COLOR));
                toggle = ui.add(button).clicked();
            });
        });

        if toggle {
            self.on_toggle_language(ctx);
        }
    }
}
