use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CutoffExplorerApp {
    pub state: AppState,
}

impl CutoffExplorerApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for CutoffExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: inputs and results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.state.load_error {
                panels::load_error_screen(ui, msg);
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Admission Cutoff Explorer");
                    });
                    ui.add_space(8.0);
                    panels::query_inputs(ui, &mut self.state);
                    results::eligibility_result(ui, &self.state.result);
                });
        });
    }
}
