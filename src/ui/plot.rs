use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, Plot};

use crate::color::cutoff_color;
use crate::data::eligibility::Evaluation;

// ---------------------------------------------------------------------------
// Cutoff distribution (below the results)
// ---------------------------------------------------------------------------

/// One bar per offer with a known cutoff, plus a line at the user's score.
pub fn cutoff_chart(ui: &mut Ui, e: &Evaluation) {
    if e.cutoffs.is_empty() {
        return;
    }

    let (cleared, missed): (Vec<Bar>, Vec<Bar>) = e
        .cutoffs
        .iter()
        .enumerate()
        .map(|(i, &cutoff)| Bar::new(i as f64, cutoff).width(0.8))
        .partition(|bar| bar.value <= e.score);

    Plot::new("cutoff_plot")
        .legend(Legend::default())
        .height(220.0)
        .x_axis_label("Offer")
        .y_axis_label("Cutoff score")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(cleared)
                    .name("Within reach")
                    .color(cutoff_color(true)),
            );
            plot_ui.bar_chart(
                BarChart::new(missed)
                    .name("Above your score")
                    .color(cutoff_color(false)),
            );
            plot_ui.hline(
                HLine::new(e.score)
                    .name("Your score")
                    .color(Color32::WHITE),
            );
        });
}
