use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::REQUIRED_COLUMNS;
use crate::data::model::CompetitionCategory;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = state.handle.is_some();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(handle) = &state.handle {
            let ds = handle.dataset();
            ui.label(format!(
                "{} offers, {} courses  ·  {}",
                ds.len(),
                ds.courses().len(),
                handle.path().display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).weak());
        }
    });
}

// ---------------------------------------------------------------------------
// Query inputs
// ---------------------------------------------------------------------------

/// Score input, then course and category selectors once a score is entered.
pub fn query_inputs(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Enter your exam score:").strong());
        let mut score = state.score;
        let response = ui
            .add(
                egui::DragValue::new(&mut score)
                    .range(state.config.score_range.clone())
                    .speed(state.config.score_step)
                    .fixed_decimals(1),
            )
            .on_hover_text("Your exam score (0 to 1000)");
        if response.changed() {
            state.set_score(score);
        }
    });

    if state.entered_score().is_none() {
        return;
    }

    ui.separator();

    let courses = match &state.handle {
        Some(handle) => handle.dataset().courses().to_vec(),
        None => return,
    };

    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Course:").strong());
        let current = state.course.clone().unwrap_or_default();
        egui::ComboBox::from_id_salt("course")
            .selected_text(&current)
            .width(cols[0].available_width())
            .show_ui(&mut cols[0], |ui: &mut Ui| {
                for course in &courses {
                    if ui.selectable_label(current == *course, course).clicked() {
                        state.set_course(course.clone());
                    }
                }
            });

        cols[1].label(RichText::new("Competition type:").strong());
        let mut category = state.category;
        for option in CompetitionCategory::ALL {
            cols[1].radio_value(&mut category, option, option.label());
        }
        if category != state.category {
            state.set_category(category);
        }
    });
}

// ---------------------------------------------------------------------------
// Fatal load error
// ---------------------------------------------------------------------------

/// Shown in place of the dashboard when the dataset could not be loaded.
pub fn load_error_screen(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new("Could not load the dataset").color(Color32::RED));
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.label(format!("Expected columns: {}", REQUIRED_COLUMNS.join(", ")));
        ui.label("Use File → Open… to choose another file.");
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open admission offers")
        .add_filter(
            "Supported files",
            &["xlsx", "xlsm", "xls", "ods", "csv", "json", "parquet", "pq"],
        )
        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_dataset(&path);
    }
}
