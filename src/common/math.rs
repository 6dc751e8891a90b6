//! Shared numeric helpers

/// Arithmetic mean of a slice, None when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to two decimal places, the precision used for price-like values
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
