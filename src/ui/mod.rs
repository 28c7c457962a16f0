//! Stateless egui helpers: fonts, the loader, and tokenized-entry rendering.

use eframe::egui;
use infinity_wiki::text::Span;

pub const ENTRY_SIZE: f32 = 26.0;
pub const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
pub const DIM_COLOR: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const HOVER_BG: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);

// ─── Fonts ────────────────────────────────────────────────────────────────────

/// System fonts with Han coverage, first readable one wins.
const CJK_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simsun.ttc",
];

/// Append a CJK fallback font to both families. Without one, Han
/// characters render as tofu.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let Some((path, data)) = CJK_FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|d| (*p, d)))
    else {
        log::warn!("no CJK font found; Chinese entries may not render");
        return;
    };

    log::info!("using CJK font {path}");
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(data));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Three pulsing dots.
pub fn loader(ui: &mut egui::Ui) {
    let t = ui.input(|i| i.time) as f32;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for k in 0..3 {
            let phase = t * 4.0 - k as f32 * 0.6;
            let alpha = 0.25 + 0.75 * (0.5 + 0.5 * phase.sin());
            ui.label(
                egui::RichText::new(".")
                    .size(36.0)
                    .color(DIM_COLOR.gamma_multiply(alpha)),
            );
        }
    });
    ui.ctx()
        .request_repaint_after(std::time::Duration::from_millis(50));
}

// ─── Entry text ───────────────────────────────────────────────────────────────

/// Outcome of drawing one entry for a frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanInteraction {
    pub clicked: Option<usize>,
    pub hovered: Option<usize>,
}

/// Lay out `spans` as wrapped inline text. Unit spans are clickable and
/// get a background when `hovered` (last frame's hover) points at them.
pub fn render_spans(
    ui: &mut egui::Ui,
    spans: &[Span],
    opacity: f32,
    hovered: Option<usize>,
) -> SpanInteraction {
    let mut out = SpanInteraction::default();
    let color = TEXT_COLOR.gamma_multiply(opacity);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(0.0, 6.0);
        for (i, span) in spans.iter().enumerate() {
            let mut rt = egui::RichText::new(&span.text).size(ENTRY_SIZE).color(color);
            if !span.is_clickable() {
                ui.add(egui::Label::new(rt).selectable(false));
                continue;
            }
            if hovered == Some(i) && opacity > 0.99 {
                rt = rt.background_color(HOVER_BG);
            }
            let resp = ui.add(
                egui::Label::new(rt)
                    .selectable(false)
                    .sense(egui::Sense::click()),
            );
            if resp.clicked() {
                out.clicked = Some(i);
            }
            if resp.hovered() {
                out.hovered = Some(i);
            }
            resp.on_hover_cursor(egui::CursorIcon::PointingHand);
        }
    });
    out
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
