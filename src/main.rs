mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::CutoffExplorerApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Cutoff Explorer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CutoffExplorerApp::new(config)))
        }),
    )
}
