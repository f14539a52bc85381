use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::margin_color;
use crate::data::eligibility::{EligibilityResult, Evaluation, RankedOffer};
use crate::ui::format::one_decimal;
use crate::ui::plot;

const ACCENT: Color32 = Color32::from_rgb(0, 255, 0);

// ---------------------------------------------------------------------------
// Result rendering, one function per variant
// ---------------------------------------------------------------------------

pub fn eligibility_result(ui: &mut Ui, result: &EligibilityResult) {
    match result {
        EligibilityResult::NoQuery => {}
        EligibilityResult::NoOffersFound => {
            ui.separator();
            ui.label(
                RichText::new("No offers were found for the selected course and competition type.")
                    .color(Color32::RED),
            );
        }
        EligibilityResult::Evaluated(e) => evaluation(ui, e),
    }
}

fn evaluation(ui: &mut Ui, e: &Evaluation) {
    ui.separator();
    ui.columns(3, |cols| {
        metric_card(&mut cols[0], &e.total_offers.to_string(), "Total offers");
        metric_card(&mut cols[1], &e.eligible_count.to_string(), "Possible admissions");
        metric_card(&mut cols[2], &one_decimal(e.mean_cutoff), "Mean cutoff");
    });

    ui.separator();
    if e.ranked.is_empty() {
        deficit(ui, e);
    } else {
        ui.heading(RichText::new("Where you would be admitted").color(ACCENT));
        ranked_table(ui, &e.ranked);
    }

    ui.separator();
    plot::cutoff_chart(ui, e);
}

fn metric_card(ui: &mut Ui, value: &str, label: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(value).size(32.0).strong().color(ACCENT));
            ui.label(RichText::new(label).weak());
        });
    });
}

fn deficit(ui: &mut Ui, e: &Evaluation) {
    ui.label(
        RichText::new(
            "⚠ With your current score you would not be admitted to any offer under the selected conditions.",
        )
        .color(Color32::YELLOW),
    );
    if let Some(needed) = e.points_needed {
        ui.add_space(4.0);
        ui.label(format!(
            "You need {} more points to reach the lowest cutoff ({}).",
            one_decimal(Some(needed)),
            one_decimal(e.min_cutoff)
        ));
        ui.label("Consider similar courses or the other competition type.");
    }
}

// ---------------------------------------------------------------------------
// Ranked offers table
// ---------------------------------------------------------------------------

fn ranked_table(ui: &mut Ui, ranked: &[RankedOffer]) {
    let widest = ranked.iter().map(|r| r.margin).fold(0.0, f64::max);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in ["Institution", "State", "Cutoff", "Above cutoff", "Modality"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for r in ranked {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&r.offer.institution_code);
                    });
                    row.col(|ui| {
                        ui.label(&r.offer.campus_state);
                    });
                    row.col(|ui| {
                        ui.label(one_decimal(Some(r.cutoff)));
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("+{} pts", one_decimal(Some(r.margin))))
                                .color(margin_color(r.margin, widest)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(&r.offer.competition_modality_label);
                    });
                });
            }
        });
}
