use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Startup settings for the explorer window.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dataset opened at startup, relative to the working directory.
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Accepted exam score range.
    pub score_range: RangeInclusive<f64>,
    pub score_step: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("planilha.xlsx"),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            score_range: 0.0..=1000.0,
            score_step: 1.0,
        }
    }
}
