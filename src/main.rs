use eframe::egui;

use infinity_wiki::config::Config;

mod app;
mod ui;

use app::WikiApp;

fn main() {
    env_logger::init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        log::error!("API_KEY is not set. Please set the environment variable.");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Infinity Wiki",
        options,
        Box::new(move |cc| {
            ui::install_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(WikiApp::new(&config, &cc.egui_ctx)))
        }),
    );

    if let Err(e) = result {
        log::error!("Failed to start Infinity Wiki: {e}");
        std::process::exit(1);
    }
}
