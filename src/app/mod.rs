//! `WikiApp`: the top-level egui application state.
//!
//! This module declares the `WikiApp` struct, its constructor and the
//! `eframe::App` frame loop. The remaining methods are split across:
//!
//! - `navigation` : background generation and the fade/commit cycle
//! - `toolbar`    : title, breadcrumb trail, footer with language toggle
//! - `content`    : the tokenized entry (or the loader)

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::sync::{mpsc, Arc};

use eframe::egui;

use infinity_wiki::config::Config;
use infinity_wiki::engine::{Backend, GenerateError, Navigator, WikiEngine};
use infinity_wiki::net::GeminiClient;

/// Stands in for the real backend when it could not be constructed, so the
/// app still runs and shows the fallback entries.
struct Unavailable(GenerateError);

impl Backend for Unavailable {
    fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(self.0.clone())
    }
}

pub type SharedEngine = Arc<WikiEngine<Box<dyn Backend>>>;

// ─── Application state ───────────────────────────────────────────────────────

pub struct WikiApp {
    pub nav: Navigator,
    pub engine: SharedEngine,
    /// Finished entries from worker threads.
    pub entry_tx: mpsc::Sender<String>,
    pub entry_rx: mpsc::Receiver<String>,
    /// Unit span under the pointer last frame.
    pub hovered: Option<usize>,
}

impl WikiApp {
    pub fn new(config: &Config, ctx: &egui::Context) -> Self {
        let backend: Box<dyn Backend> = match GeminiClient::from_config(config) {
            Ok(client) => {
                log::info!("generating with {} via {}", config.model, client.url());
                Box::new(client)
            }
            Err(e) => {
                log::error!("backend unavailable: {e}");
                Box::new(Unavailable(e))
            }
        };
        let (entry_tx, entry_rx) = mpsc::channel();

        let mut app = Self {
            nav: Navigator::new(config.language, config.fade_delay),
            engine: Arc::new(WikiEngine::new(backend)),
            entry_tx,
            entry_rx,
            hovered: None,
        };
        let request = app.nav.start();
        app.dispatch(request, ctx);
        app
    }
}

impl eframe::App for WikiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_entries();
        self.drive(ctx);

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(8.0, 12.0)))
            .show_separator_line(false)
            .show(ctx, |ui| {
                self.draw_footer(ui, ctx);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(760.0);
                    self.draw_header(ui);
                    self.draw_breadcrumb(ui, ctx);
                    self.draw_content(ui, ctx);
                });
            });
    }
}
