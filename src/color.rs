use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Hue used for offers the score clears comfortably.
const CLEAR_HUE: f32 = 120.0;
/// Hue used for offers the score barely clears.
const TIGHT_HUE: f32 = 40.0;
/// Hue used for cutoffs above the score.
const MISS_HUE: f32 = 0.0;

fn hsl_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Color mapping: score margin → Color32
// ---------------------------------------------------------------------------

/// Colour for a ranked offer, from amber (barely clears) to green (the
/// widest margin in the current list).
pub fn margin_color(margin: f64, widest_margin: f64) -> Color32 {
    let t = if widest_margin > 0.0 {
        (margin / widest_margin).clamp(0.0, 1.0) as f32
    } else {
        1.0
    };
    hsl_color(TIGHT_HUE + t * (CLEAR_HUE - TIGHT_HUE))
}

/// Colour for a cutoff bar: green when the score clears it, red otherwise.
pub fn cutoff_color(cleared: bool) -> Color32 {
    if cleared {
        hsl_color(CLEAR_HUE)
    } else {
        hsl_color(MISS_HUE)
    }
}
