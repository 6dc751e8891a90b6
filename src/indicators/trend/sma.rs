//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Rolling SMA over a close series, one slot per input position.
///
/// Position `i` holds the mean of the trailing `window` closes and is
/// `None` until `window` values have accumulated. A zero window or a
/// window longer than the series yields an all-`None` column.
pub fn sma_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    (0..closes.len())
        .map(|i| {
            if i + 1 >= window {
                math::mean(&closes[i + 1 - window..=i])
            } else {
                None
            }
        })
        .collect()
}

/// Latest defined value of an SMA series, scanning from the end
pub fn latest_sma(series: &[Option<f64>]) -> Option<f64> {
    series.iter().rev().find_map(|v| *v)
}
