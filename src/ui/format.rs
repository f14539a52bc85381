/// Shown wherever a statistic is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// One decimal place, or [`NOT_AVAILABLE`].
pub fn one_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => NOT_AVAILABLE.to_string(),
    }
}
